// API Gatewayレスポンス変換
//
// Lambdaが返したProxyResponseを、API Gatewayがクライアントに返す
// HTTPレスポンスに変換する。

use aws_lambda_events::encodings::Body as EventBody;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use lambda_http::http::header::{HeaderMap, HeaderName, HeaderValue};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use thiserror::Error;

use crate::domain::ProxyResponse;

/// レスポンス変換のエラー型
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(u16),

    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },

    #[error("Invalid base64 body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// API Gatewayレスポンス変換
pub struct GatewayRenderer;

impl GatewayRenderer {
    /// ProxyResponseをHTTPレスポンスに変換
    ///
    /// isBase64Encodedがtrueの場合はボディをデコードしてバイナリとして返す。
    /// フラグが省略されている場合はテキストとして扱う。
    pub fn render(response: &ProxyResponse) -> Result<Response<Body>, RenderError> {
        let status = StatusCode::from_u16(response.status_code)
            .map_err(|_| RenderError::InvalidStatusCode(response.status_code))?;
        let headers = Self::build_headers(response)?;

        let body = if response.is_base64_encoded() {
            Body::Binary(response.decoded_body()?)
        } else {
            Body::Text(response.body.clone())
        };

        let mut rendered = Response::new(body);
        *rendered.status_mut() = status;
        *rendered.headers_mut() = headers;

        Ok(rendered)
    }

    /// ProxyResponseを型付きのApiGatewayProxyResponseに変換
    ///
    /// ヘッダーは`render`と同じ規則で検証する。
    /// isBase64Encodedがtrueの場合はデコードしたバイナリボディにする。
    pub fn to_typed(response: &ProxyResponse) -> Result<ApiGatewayProxyResponse, RenderError> {
        let headers = Self::build_headers(response)?;

        let body = if response.is_base64_encoded() {
            EventBody::Binary(response.decoded_body()?)
        } else {
            EventBody::Text(response.body.clone())
        };

        let mut typed = ApiGatewayProxyResponse::default();
        typed.status_code = i64::from(response.status_code);
        typed.headers = headers;
        typed.body = Some(body);
        typed.is_base64_encoded = response.is_base64_encoded();

        Ok(typed)
    }

    /// レスポンスレコードのヘッダーをHeaderMapに変換
    pub fn build_headers(response: &ProxyResponse) -> Result<HeaderMap, RenderError> {
        let mut headers = HeaderMap::with_capacity(response.headers.len());

        for (name, value) in &response.headers {
            let invalid = || RenderError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

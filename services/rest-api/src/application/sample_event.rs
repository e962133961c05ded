// ローカル呼び出し用のサンプルイベント
//
// API Gateway REST APIがプロキシ統合でLambdaに送る
// payloadFormatVersion 1.0形式のイベントを組み立てる。

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyRequestContext};
use aws_lambda_events::http::Method;
use thiserror::Error;

/// サンプルイベントに埋め込む固定のリクエストID
pub const SAMPLE_REQUEST_ID: &str = "c6af9ac6-7b61-11e6-9a41-93e8deadbeef";

/// サンプルイベントに埋め込む固定のアカウントID
pub const SAMPLE_ACCOUNT_ID: &str = "123456789012";

/// サンプルイベント生成のエラー型
#[derive(Debug, Error)]
pub enum SampleEventError {
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),
}

/// REST API（1.0形式）のプロキシリクエストイベントを生成
///
/// # Arguments
/// * `method` - HTTPメソッド（大文字小文字は問わない）
/// * `path` - リクエストパス（resource・resourcePathにも同じ値を入れる）
/// * `body` - リクエストボディ
pub fn build_rest_request(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<ApiGatewayProxyRequest, SampleEventError> {
    let method = Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
        .map_err(|_| SampleEventError::InvalidMethod(method.to_string()))?;

    let mut request_context = ApiGatewayProxyRequestContext::default();
    request_context.account_id = Some(SAMPLE_ACCOUNT_ID.to_string());
    request_context.stage = Some("$default".to_string());
    request_context.request_id = Some(SAMPLE_REQUEST_ID.to_string());
    request_context.protocol = Some("HTTP/1.1".to_string());
    request_context.path = Some(path.to_string());
    request_context.resource_path = Some(path.to_string());
    request_context.http_method = method.clone();

    let mut request = ApiGatewayProxyRequest::default();
    request.resource = Some(path.to_string());
    request.path = Some(path.to_string());
    request.http_method = method;
    request.body = body;
    request.request_context = request_context;

    Ok(request)
}

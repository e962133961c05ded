// レスポンス形式の解釈
//
// Lambdaが返した生の結果を、API Gatewayのペイロード形式に従って
// ProxyResponseとして解釈する（API Gateway側の視点）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::proxy_response::ProxyResponse;

/// API Gatewayのペイロード形式バージョン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadFormatVersion {
    /// REST API / HTTP API共通の1.0形式
    #[serde(rename = "1.0")]
    V1,
    /// HTTP APIの2.0形式（レスポンス推論あり）
    #[serde(rename = "2.0")]
    V2,
}

impl PayloadFormatVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "1.0",
            Self::V2 => "2.0",
        }
    }
}

impl fmt::Display for PayloadFormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadFormatVersion {
    type Err = ResponseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.0" => Ok(Self::V1),
            "2.0" => Ok(Self::V2),
            other => Err(ResponseFormatError::UnknownVersion(other.to_string())),
        }
    }
}

/// レスポンス形式のエラー型
///
/// - `NotAnObject`: レスポンスがJSONオブジェクトでない
/// - `InvalidField`: 必須フィールドの欠落、または型の不一致
/// - `UnknownVersion`: 未対応のペイロード形式バージョン
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseFormatError {
    #[error("payload format {version}: response must be a JSON object, got {found}")]
    NotAnObject {
        version: PayloadFormatVersion,
        found: &'static str,
    },

    #[error("payload format {version}: invalid response: {reason}")]
    InvalidField {
        version: PayloadFormatVersion,
        reason: String,
    },

    #[error("unknown payload format version: {0}")]
    UnknownVersion(String),
}

/// Lambdaの生の結果をペイロード形式に従ってProxyResponseに変換
///
/// # 1.0形式
/// `statusCode`（整数）と`body`（文字列）が必須。`headers`は文字列同士のマップ、
/// `isBase64Encoded`は真偽値であれば省略可能（省略時はfalse扱い）。
/// 未知のフィールドは無視する。
///
/// # 2.0形式
/// `statusCode`を含むオブジェクトは1.0と同じ規則で検証する。
/// それ以外は200・application/jsonのレスポンスとして推論し、
/// 文字列ならそのまま、それ以外はJSONシリアライズした文字列をボディにする。
pub fn interpret(
    version: PayloadFormatVersion,
    raw: Value,
) -> Result<ProxyResponse, ResponseFormatError> {
    match version {
        PayloadFormatVersion::V1 => parse_strict(version, raw),
        PayloadFormatVersion::V2 => {
            if raw.get("statusCode").is_some() {
                return parse_strict(version, raw);
            }
            match raw {
                Value::String(body) => Ok(infer(body)),
                other => Ok(infer(other.to_string())),
            }
        }
    }
}

fn parse_strict(
    version: PayloadFormatVersion,
    raw: Value,
) -> Result<ProxyResponse, ResponseFormatError> {
    // serdeは構造体を配列からも復元できるため、先にオブジェクトかどうかを確認する
    if !raw.is_object() {
        return Err(ResponseFormatError::NotAnObject {
            version,
            found: json_type_name(&raw),
        });
    }

    serde_json::from_value(raw).map_err(|e| ResponseFormatError::InvalidField {
        version,
        reason: e.to_string(),
    })
}

fn infer(body: String) -> ProxyResponse {
    ProxyResponse::json(200, body).with_base64_flag(false)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// サンプルハンドラーのバリアント
//
// デプロイされるハンドラーには、ボディの文言と
// isBase64Encodedフラグの有無だけが異なる2つのコピーがある。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::proxy_response::ProxyResponse;

/// フラグ付きバリアントのボディ
pub const WITH_FLAG_BODY: &str = "This is a python api example that supports AWS API Gateway, on payloadFormatVersion \"1.0\", proxy integration.";

/// フラグなしバリアントのボディ
pub const WITHOUT_FLAG_BODY: &str = "This is python api example that supports AWS API Gateway, on payloadFormatVersion \"1.0\", proxy integration.";

/// サンプルが返すステータスコード
pub const EXAMPLE_STATUS_CODE: u16 = 200;

/// 不明なバリアント名
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown example variant: {0} (expected \"with-flag\" or \"without-flag\")")]
pub struct UnknownVariantError(pub String);

/// デプロイされるハンドラーのバリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleVariant {
    /// `isBase64Encoded: false` を含む（デフォルト）
    #[default]
    WithBase64Flag,
    /// `isBase64Encoded` を省略する
    WithoutBase64Flag,
}

impl ExampleVariant {
    /// 設定値としての表記
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WithBase64Flag => "with-flag",
            Self::WithoutBase64Flag => "without-flag",
        }
    }

    /// レスポンスボディの文言
    pub fn body(self) -> &'static str {
        match self {
            Self::WithBase64Flag => WITH_FLAG_BODY,
            Self::WithoutBase64Flag => WITHOUT_FLAG_BODY,
        }
    }

    /// isBase64Encodedフラグを出力するか
    pub fn emits_base64_flag(self) -> bool {
        matches!(self, Self::WithBase64Flag)
    }

    /// このバリアントの固定レスポンスを構築
    ///
    /// Content-Typeはapplication/jsonだが、ボディはJSONエンコードされていない平文。
    pub fn response(self) -> ProxyResponse {
        let response = ProxyResponse::json(EXAMPLE_STATUS_CODE, self.body());
        if self.emits_base64_flag() {
            response.with_base64_flag(false)
        } else {
            response
        }
    }
}

impl fmt::Display for ExampleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExampleVariant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "with-flag" => Ok(Self::WithBase64Flag),
            "without-flag" => Ok(Self::WithoutBase64Flag),
            _ => Err(UnknownVariantError(s.trim().to_string())),
        }
    }
}

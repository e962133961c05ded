// プロキシ統合レスポンス
//
// API Gatewayのプロキシ統合（payloadFormatVersion 1.0）でLambdaが返す
// レスポンスレコードの構造を定義する。

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Content-Typeヘッダー名（レスポンスレコード上の表記）
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// JSONのメディアタイプ
pub const APPLICATION_JSON: &str = "application/json";

/// プロキシ統合レスポンス
///
/// `statusCode`・`headers`・`body`・`isBase64Encoded` の4フィールドを持つ。
/// `isBase64Encoded` が `None` の場合はシリアライズ時に省略され、
/// 受け取る側は `false` として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTPステータスコード
    pub status_code: u16,

    /// レスポンスヘッダー（省略時は空）
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// レスポンスボディ（isBase64Encodedがtrueの場合はbase64文字列）
    pub body: String,

    /// ボディがbase64エンコードされているか
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl ProxyResponse {
    /// ヘッダーなし・フラグなしのレスポンスを作成
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: body.into(),
            is_base64_encoded: None,
        }
    }

    /// `Content-Type: application/json` 付きのレスポンスを作成
    ///
    /// ボディの中身がJSONかどうかは検査しない。
    pub fn json(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(status_code, body).with_header(CONTENT_TYPE_HEADER, APPLICATION_JSON)
    }

    /// ヘッダーを追加する
    ///
    /// 大文字小文字違いの同名ヘッダーが既にあれば置き換える。
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// isBase64Encodedフラグを明示的に設定する
    pub fn with_base64_flag(mut self, encoded: bool) -> Self {
        self.is_base64_encoded = Some(encoded);
        self
    }

    /// ヘッダー値を大文字小文字を区別せずに取得
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Content-Typeヘッダーの値
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE_HEADER)
    }

    /// ボディがbase64エンコードされているか（フラグ省略時はfalse）
    pub fn is_base64_encoded(&self) -> bool {
        self.is_base64_encoded.unwrap_or(false)
    }

    /// クライアントに届くボディのバイト列
    ///
    /// base64エンコードされている場合は標準アルファベットでデコードする。
    pub fn decoded_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        if self.is_base64_encoded() {
            STANDARD.decode(self.body.as_bytes())
        } else {
            Ok(self.body.as_bytes().to_vec())
        }
    }
}

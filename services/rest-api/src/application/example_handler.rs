// プロキシ統合サンプルハンドラー
//
// どんなイベント・コンテキストを受け取っても、
// デプロイされたバリアントの固定レスポンスを返す。

use lambda_runtime::Context;
use serde_json::Value;

use crate::domain::{ExampleVariant, ProxyResponse};

/// Lambdaに渡される呼び出しイベント（内容は参照しない）
pub type InvocationEvent = Value;

/// プロキシ統合サンプルハンドラー
///
/// 状態を持たない純粋関数のラッパー。複数の呼び出しから同時に参照してよい。
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleHandler {
    variant: ExampleVariant,
}

impl ExampleHandler {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `variant` - 返却するレスポンスのバリアント
    pub fn new(variant: ExampleVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ExampleVariant {
        self.variant
    }

    /// 呼び出しを処理してレスポンスを生成
    ///
    /// イベントとコンテキストのどのフィールドも読まないため、
    /// 型を問わず任意のイベントを受け付ける。失敗しない。
    ///
    /// # Returns
    /// ステータス200、`Content-Type: application/json`の固定レスポンス
    pub fn handle<E: ?Sized>(&self, _event: &E, _context: &Context) -> ProxyResponse {
        self.variant.response()
    }
}

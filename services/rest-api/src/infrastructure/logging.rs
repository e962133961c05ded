/// ログ基盤モジュール
///
/// Lambda向けのJSON構造化ログと、ローカル実行CLI向けの
/// 人間が読みやすいログの2種類の初期化を提供する。
use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// `RUST_LOG`が未設定・不正な場合のフィルター
fn env_filter_or(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式でCloudWatch Logsに出力する。`RUST_LOG`でフィルタリングし、
/// 未設定の場合はinfo。リクエスト単位のspanのフィールドもログに含める。
///
/// 複数回呼び出しても最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use rest_api_example::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false);

        // テスト内から呼ばれた場合など、既に初期化済みでもパニックしない
        let _ = tracing_subscriber::registry()
            .with(env_filter_or("info"))
            .with(json_layer)
            .try_init();
    });
}

/// ローカル実行CLI向けのログサブスクライバーを初期化する
///
/// 標準出力はレスポンスの出力に使うため、ログは標準エラーに書く。
/// `RUST_LOG`が未設定の場合はwarn以上のみ出力する。
pub fn init_cli_logging() {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter_or("warn"))
            .with(fmt_layer)
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter_or("debug"))
            .with(fmt_layer)
            .try_init();
    });
}

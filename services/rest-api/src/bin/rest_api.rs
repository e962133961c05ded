/// API Gateway REST APIプロキシ統合Lambdaエントリポイント
///
/// payloadFormatVersion 1.0のプロキシ統合で呼び出され、
/// 固定のレスポンスレコードを返却する。
///
/// # 環境変数
/// - EXAMPLE_VARIANT: `with-flag`（デフォルト）または `without-flag`
/// - RUST_LOG: ログレベル（デフォルト: info）
use lambda_runtime::{Error, LambdaEvent, service_fn};
use rest_api_example::application::{ExampleHandler, InvocationEvent};
use rest_api_example::domain::ProxyResponse;
use rest_api_example::infrastructure::{ExampleConfig, init_logging};
use tracing::{Instrument, error, info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // コールドスタート時に一度だけ設定を読み込む
    let config = ExampleConfig::from_env().inspect_err(|e| {
        error!(error = %e, "設定の読み込みに失敗");
    })?;

    info!(variant = %config.variant, "REST APIサンプルLambda関数を初期化");

    let example_handler = ExampleHandler::new(config.variant);
    let example_handler = &example_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationEvent>| async move {
        handler(example_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// リクエストIDはログのspanにのみ使い、レスポンスには影響しない。
async fn handler(
    example_handler: &ExampleHandler,
    event: LambdaEvent<InvocationEvent>,
) -> Result<ProxyResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async {
        info!("リクエスト受信");

        let response = example_handler.handle(&payload, &context);

        info!(
            status_code = response.status_code,
            variant = %example_handler.variant(),
            "レスポンス送信"
        );

        Ok(response)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use rest_api_example::domain::{ExampleVariant, PayloadFormatVersion, interpret};
    use serde_json::json;

    fn event(payload: InvocationEvent) -> LambdaEvent<InvocationEvent> {
        LambdaEvent::new(payload, Context::default())
    }

    /// 空のイベントで完全なレスポンスを返す
    #[tokio::test]
    async fn test_handler_empty_event() {
        init_logging();
        let example_handler = ExampleHandler::default();

        let response = handler(&example_handler, event(json!({}))).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "This is a python api example that supports AWS API Gateway, on payloadFormatVersion \"1.0\", proxy integration.",
                "isBase64Encoded": false,
            })
        );
    }

    /// イベントの中身に関わらず同じレスポンスを返す
    #[tokio::test]
    async fn test_handler_ignores_event_contents() {
        init_logging();
        let example_handler = ExampleHandler::default();

        let empty = handler(&example_handler, event(json!({}))).await.unwrap();
        let populated = handler(
            &example_handler,
            event(json!({ "path": "/foo", "httpMethod": "GET" })),
        )
        .await
        .unwrap();
        let non_object = handler(&example_handler, event(json!("raw"))).await.unwrap();

        assert_eq!(populated, empty);
        assert_eq!(non_object, empty);
    }

    /// フラグなしバリアントのレスポンスは1.0形式として受理され、フラグはfalse扱い
    #[tokio::test]
    async fn test_handler_without_flag_is_valid_v1_response() {
        init_logging();
        let example_handler = ExampleHandler::new(ExampleVariant::WithoutBase64Flag);

        let response = handler(&example_handler, event(json!({}))).await.unwrap();
        let wire = serde_json::to_value(&response).unwrap();

        assert!(wire.get("isBase64Encoded").is_none());
        assert_eq!(
            wire["body"],
            "This is python api example that supports AWS API Gateway, on payloadFormatVersion \"1.0\", proxy integration."
        );

        let interpreted = interpret(PayloadFormatVersion::V1, wire).unwrap();
        assert_eq!(interpreted, response);
        assert!(!interpreted.is_base64_encoded());
    }
}

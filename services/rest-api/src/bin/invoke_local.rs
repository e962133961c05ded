/// サンプルハンドラーのローカル呼び出しCLI
///
/// Lambdaランタイムを介さずにハンドラーを1回呼び出し、
/// レスポンスレコード（または API Gateway が返すHTTPレスポンス）を標準出力に書く。
///
/// # ローカル実行
/// ```bash
/// # 空のイベントで呼び出し
/// cargo run --bin invoke_local
///
/// # フラグなしバリアント
/// cargo run --bin invoke_local -- --variant without-flag
///
/// # 1.0形式のリクエストイベントを組み立てて呼び出し
/// cargo run --bin invoke_local -- --method GET --path /foo
///
/// # イベントファイルを指定し、API Gatewayのレスポンスとして表示
/// cargo run --bin invoke_local -- --event event.json --render --pretty
/// ```
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use lambda_http::Body;
use lambda_runtime::{Context, Error};
use rest_api_example::application::{
    ExampleHandler, GatewayRenderer, InvocationEvent, build_rest_request,
};
use rest_api_example::domain::{ExampleVariant, ProxyResponse};
use rest_api_example::infrastructure::{ExampleConfig, init_cli_logging};
use serde_json::{Value, json};
use tracing::{debug, error};

/// ローカル呼び出しのリクエストID
const LOCAL_REQUEST_ID: &str = "local-invoke";

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "invoke_local")]
#[command(about = "REST APIサンプルハンドラーをローカルで呼び出す")]
struct CliArgs {
    /// イベントJSONファイル（省略時は空オブジェクト、--methodとは併用不可）
    #[arg(long, short = 'e', conflicts_with = "method")]
    event: Option<PathBuf>,

    /// 1.0形式のリクエストイベントを組み立てる場合のHTTPメソッド
    #[arg(long, short = 'm')]
    method: Option<String>,

    /// 組み立てるリクエストイベントのパス
    #[arg(long, short = 'p', default_value = "/")]
    path: String,

    /// 組み立てるリクエストイベントのボディ
    #[arg(long, short = 'b', requires = "method")]
    body: Option<String>,

    /// バリアント（環境変数EXAMPLE_VARIANTより優先される）
    #[arg(long, short = 'v')]
    variant: Option<ExampleVariant>,

    /// API Gatewayがクライアントへ返すHTTPレスポンスとして表示する
    #[arg(long)]
    render: bool,

    /// JSONを整形して出力する
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Error> {
    init_cli_logging();

    let args = CliArgs::parse();
    let output = invoke(&args).inspect_err(|e| {
        error!(error = %e, "ローカル呼び出しに失敗");
    })?;

    println!("{output}");
    Ok(())
}

/// 引数に従ってハンドラーを呼び出し、出力文字列を生成
fn invoke(args: &CliArgs) -> Result<String, Error> {
    let config = match args.variant {
        Some(variant) => ExampleConfig::new(variant),
        None => ExampleConfig::from_env()?,
    };
    let variant = config.variant;
    let event = load_event(args)?;
    debug!(%variant, "ハンドラーを呼び出し");

    let mut context = Context::default();
    context.request_id = LOCAL_REQUEST_ID.to_string();

    let response = ExampleHandler::new(variant).handle(&event, &context);

    let value = if args.render {
        rendered_view(&response)?
    } else {
        serde_json::to_value(&response)?
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(output)
}

/// 呼び出しイベントを用意する
fn load_event(args: &CliArgs) -> Result<InvocationEvent, Error> {
    if let Some(method) = &args.method {
        let request = build_rest_request(method, &args.path, args.body.clone())?;
        return Ok(serde_json::to_value(request)?);
    }

    match &args.event {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(json!({})),
    }
}

/// API Gatewayが返すHTTPレスポンスをJSONで表現する
///
/// バイナリボディはbase64で再エンコードし、`isBase64Encoded: true`を付ける。
fn rendered_view(response: &ProxyResponse) -> Result<Value, Error> {
    let rendered = GatewayRenderer::render(response)?;

    let headers: serde_json::Map<String, Value> = rendered
        .headers()
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), Value::String(value))
        })
        .collect();

    let mut view = json!({
        "status": rendered.status().as_u16(),
        "headers": headers,
    });

    match rendered.body() {
        Body::Text(text) => view["body"] = Value::String(text.clone()),
        Body::Binary(bytes) => {
            view["body"] = Value::String(STANDARD.encode(bytes));
            view["isBase64Encoded"] = Value::Bool(true);
        }
        _ => view["body"] = Value::String(String::new()),
    }

    Ok(view)
}

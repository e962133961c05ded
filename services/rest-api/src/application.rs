// アプリケーション層モジュール
pub mod example_handler;
pub mod gateway_renderer;
pub mod sample_event;

// 再エクスポート
pub use example_handler::{ExampleHandler, InvocationEvent};
pub use gateway_renderer::{GatewayRenderer, RenderError};
pub use sample_event::{SampleEventError, build_rest_request};

// Domain layer modules
pub mod example_variant;
pub mod proxy_response;
pub mod response_format;

// Re-exports
pub use example_variant::{ExampleVariant, UnknownVariantError, WITH_FLAG_BODY, WITHOUT_FLAG_BODY};
pub use proxy_response::{APPLICATION_JSON, CONTENT_TYPE_HEADER, ProxyResponse};
pub use response_format::{PayloadFormatVersion, ResponseFormatError, interpret};

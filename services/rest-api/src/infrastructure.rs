// Infrastructure layer modules
pub mod example_config;
pub mod logging;

// Re-exports
pub use example_config::{ENV_EXAMPLE_VARIANT, ExampleConfig, ExampleConfigError};
pub use logging::{init_cli_logging, init_logging};

pub mod settings;

pub use settings::{CorsConfig, LoggingConfig, ServerConfig, Settings};

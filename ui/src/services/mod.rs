//! Cross-cutting services shared by both pages
//!
//! - **config**: navigation targets and upload settings
//! - **errors**: error types for browser and configuration failures

pub mod config;
pub mod errors;

pub use config::AppConfig;
pub use errors::{ConfigError, UiError, UiResult};

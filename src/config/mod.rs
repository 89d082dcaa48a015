//! Application configuration.
//!
//! Configuration is read from a TOML file (see [`Config::config_path`]) and
//! held in a [`ConfigStore`] that can be shared between the UI thread and the
//! network worker.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};

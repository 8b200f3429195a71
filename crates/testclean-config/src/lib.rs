//! Runtime configuration for the company registry.

pub mod error;
pub mod settings;

pub use error::{ConfigError, Result};
pub use settings::{EventBusSettings, ServiceSettings, Settings};

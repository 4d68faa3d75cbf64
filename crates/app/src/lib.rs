//! Composition root: configuration and wiring of the appshop services.

pub mod config;
pub mod context;

pub use config::{AppConfig, ConfigError};
pub use context::AppContext;

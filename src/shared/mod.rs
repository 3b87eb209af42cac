//! Cross-cutting settings.

pub mod config;

pub use config::AppConfig;

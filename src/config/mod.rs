//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from built-in defaults, an optional TOML file and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{
    Settings, BotConfig, DatabaseConfig, I18nConfig, LoggingConfig, QuizConfig, ContentConfig,
};

//! Error handling for Stepup
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Stepup application
#[derive(Error, Debug)]
pub enum StepupError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid callback data: {0}")]
    InvalidCallbackData(String),
}

/// Result type alias for Stepup operations
pub type Result<T> = std::result::Result<T, StepupError>;

impl StepupError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            StepupError::Database(_) => false,
            StepupError::Migration(_) => false,
            StepupError::Telegram(_) => true,
            StepupError::Config(_) => false,
            StepupError::ConfigLoad(_) => false,
            StepupError::UserNotFound { .. } => true,
            StepupError::InvalidStateTransition { .. } => true,
            StepupError::Serialization(_) => false,
            StepupError::Io(_) => true,
            StepupError::InvalidInput(_) => true,
            StepupError::InvalidCallbackData(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StepupError::Database(_) => ErrorSeverity::Critical,
            StepupError::Migration(_) => ErrorSeverity::Critical,
            StepupError::Config(_) | StepupError::ConfigLoad(_) => ErrorSeverity::Critical,
            StepupError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            StepupError::InvalidInput(_) | StepupError::InvalidCallbackData(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(StepupError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(StepupError::InvalidCallbackData("x".into()).severity(), ErrorSeverity::Info);
        assert_eq!(StepupError::UserNotFound { user_id: 1 }.severity(), ErrorSeverity::Error);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }

    #[test]
    fn test_recoverable() {
        assert!(StepupError::InvalidInput("bad".into()).is_recoverable());
        assert!(!StepupError::Config("missing token".into()).is_recoverable());
    }
}

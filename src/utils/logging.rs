//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Stepup application.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{Result, StepupError};

/// Initialize logging based on configuration.
///
/// When a log directory is configured, a daily rolling file layer is added next to
/// stdout. The returned guard flushes the file writer and must be held by `main`.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "stepup.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| StepupError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log quiz progress events
pub fn log_quiz_event(user_id: i64, event: &str, question_index: Option<i64>) {
    info!(
        user_id = user_id,
        event = event,
        question_index = question_index,
        "Quiz event"
    );
}

/// Log a session being replaced by a different one
pub fn log_session_replaced(user_id: i64, previous: &str, next: &str) {
    warn!(
        user_id = user_id,
        previous = previous,
        next = next,
        "Pending session replaced"
    );
}

/// Log handler errors with context
pub fn log_handler_error(user_id: Option<i64>, context: &str, error: &StepupError) {
    error!(
        user_id = user_id,
        context = context,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        error = %error,
        "Handler error occurred"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, rows: u64) {
    debug!(
        operation = operation,
        table = table,
        rows = rows,
        "Database operation completed"
    );
}

//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::i18n::fallback;
use crate::utils::errors::{StepupError, Result};
use super::Settings;

/// Longest allowed quiz or feedback session, 30 days
pub const MAX_SESSION_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_quiz_config(&settings.quiz)?;
    validate_content_config(&settings.content)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(StepupError::Config(
            "Bot token is required (set BOT_TOKEN)".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(StepupError::Config(
            "Database URL is required".to_string()
        ));
    }

    if !config.url.starts_with("sqlite:") {
        return Err(StepupError::Config(
            format!("Database URL must be a sqlite url, got: {}", config.url)
        ));
    }

    if config.max_connections == 0 {
        return Err(StepupError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(StepupError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(StepupError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(StepupError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(StepupError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    for lang in &config.supported_languages {
        if fallback::dictionary(lang).is_none() {
            return Err(StepupError::Config(
                format!("Language '{}' has no built-in dictionary", lang)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StepupError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StepupError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate quiz session configuration
fn validate_quiz_config(config: &super::QuizConfig) -> Result<()> {
    if config.session_ttl_seconds == 0 {
        return Err(StepupError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if config.session_ttl_seconds > MAX_SESSION_TTL_SECONDS {
        return Err(StepupError::Config(format!(
            "Session TTL must not exceed {} seconds", MAX_SESSION_TTL_SECONDS
        )));
    }

    if config.cleanup_interval_seconds == 0 {
        return Err(StepupError::Config(
            "Cleanup interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_content_config(config: &super::ContentConfig) -> Result<()> {
    if config.professions_per_category == 0 || config.courses_per_category == 0 {
        return Err(StepupError::Config(
            "Listing limits must be greater than 0".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let settings = Settings::default();
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_non_sqlite_url_rejected() {
        let mut settings = valid_settings();
        settings.database.url = "postgresql://localhost/stepup".to_string();
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_pool_sizes_rejected() {
        let mut settings = valid_settings();
        settings.database.min_connections = 10;
        settings.database.max_connections = 2;
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut settings = valid_settings();
        settings.i18n.supported_languages.push("de".to_string());
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(msg)) if msg.contains("de"));

        let mut settings = valid_settings();
        settings.i18n.default_language = "de".to_string();
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut settings = valid_settings();
        settings.quiz.session_ttl_seconds = 0;
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }

    #[test]
    fn test_huge_ttl_rejected() {
        let mut settings = valid_settings();
        settings.quiz.session_ttl_seconds = MAX_SESSION_TTL_SECONDS;
        assert!(validate_settings(&settings).is_ok());

        settings.quiz.session_ttl_seconds = u64::MAX;
        assert_matches!(validate_settings(&settings), Err(StepupError::Config(_)));
    }
}

//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub quiz: QuizConfig,
    pub content: ContentConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Chat that receives user feedback; feedback is only acknowledged when unset
    pub admin_chat_id: Option<i64>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub seed_on_startup: bool,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files
    pub file_path: Option<String>,
}

/// Quiz session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    pub session_ttl_seconds: u64,
    pub cleanup_interval_seconds: u64,
}

/// Limits for catalog listings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub professions_per_category: u32,
    pub courses_per_category: u32,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and environment variables.
    ///
    /// `STEPUP__SECTION__KEY` variables override file values. The plain
    /// `BOT_TOKEN`, `ADMIN_CHAT_ID` and `CAREER_BOT_DB` variables are honoured
    /// last so existing deployments keep working.
    pub fn new() -> Result<Self, config::ConfigError> {
        // 0 means forwarding is off, as does an empty value
        let admin_chat_id = match std::env::var("ADMIN_CHAT_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<i64>().map_err(|e| {
                config::ConfigError::Message(format!("ADMIN_CHAT_ID must be an integer: {}", e))
            })?)
            .filter(|id| *id != 0),
            _ => None,
        };
        let database_url = std::env::var("CAREER_BOT_DB")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(|path| sqlite_url_from_path(&path));

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STEPUP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("bot.token", std::env::var("BOT_TOKEN").ok())?
            .set_override_option("bot.admin_chat_id", admin_chat_id)?
            .set_override_option("database.url", database_url)?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StepupError> {
        super::validation::validate_settings(self)
    }
}

/// Turn a bare database file path into a sqlx SQLite url
pub fn sqlite_url_from_path(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite://{}", path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_chat_id: None,
            },
            database: DatabaseConfig {
                url: "sqlite://career_bot.db".to_string(),
                max_connections: 5,
                min_connections: 1,
                seed_on_startup: true,
            },
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["ru".to_string(), "en".to_string(), "az".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
            quiz: QuizConfig {
                session_ttl_seconds: 86_400,
                cleanup_interval_seconds: 3_600,
            },
            content: ContentConfig {
                professions_per_category: 20,
                courses_per_category: 5,
            },
        }
    }
}

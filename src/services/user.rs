//! User service implementation
//!
//! Registration, language preference, age group, interest and profile reset.

use tracing::{info, warn, debug};
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::models::{AgeGroup, Category, User};
use crate::utils::errors::{StepupError, Result};

/// User service for managing user operations
#[derive(Debug, Clone)]
pub struct UserService {
    db: DatabaseService,
    settings: Settings,
}

impl UserService {
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        Self { db, settings }
    }

    /// Register a user or refresh the name of an existing one
    pub async fn register(&self, telegram_id: i64, name: String) -> Result<User> {
        let user = self.db.initialize_user(telegram_id, name).await?;
        debug!(telegram_id = telegram_id, has_language = user.language_code.is_some(), "User registered");
        Ok(user)
    }

    pub async fn get_user(&self, telegram_id: i64) -> Result<Option<User>> {
        self.db.users.find_by_telegram_id(telegram_id).await
    }

    /// Language the bot should talk to this user in
    pub async fn language_of(&self, telegram_id: i64) -> Result<String> {
        let stored = self.db.users.get_language(telegram_id).await?;
        Ok(match stored {
            Some(lang) if self.is_supported(&lang) => lang,
            _ => self.settings.i18n.default_language.clone(),
        })
    }

    /// Store the interface language; unsupported codes are rejected
    pub async fn set_language(&self, telegram_id: i64, language_code: &str) -> Result<()> {
        if !self.is_supported(language_code) {
            warn!(telegram_id = telegram_id, language_code = %language_code, "Unsupported language code");
            return Err(StepupError::InvalidInput(format!("Unsupported language: {}", language_code)));
        }

        self.db.users.set_language(telegram_id, language_code).await?;
        info!(telegram_id = telegram_id, language_code = %language_code, "User language preference updated");
        Ok(())
    }

    pub async fn set_age_group(&self, telegram_id: i64, age_group: AgeGroup) -> Result<()> {
        self.db.users.set_age_group(telegram_id, age_group).await?;
        info!(telegram_id = telegram_id, age_group = age_group.as_str(), "Age group saved");
        Ok(())
    }

    pub async fn set_interest(&self, telegram_id: i64, category: Category) -> Result<()> {
        self.db.users.set_interest(telegram_id, category).await
    }

    /// Clear profile fields, favorites and any pending session
    pub async fn reset(&self, telegram_id: i64) -> Result<()> {
        self.db.reset_user(telegram_id).await?;
        info!(telegram_id = telegram_id, "User profile reset");
        Ok(())
    }

    fn is_supported(&self, language_code: &str) -> bool {
        self.settings.i18n.supported_languages.iter().any(|l| l == language_code)
    }
}

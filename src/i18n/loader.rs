//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, lookup with fallbacks, language resolution and message
//! formatting.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::{StepupError, Result};
use crate::config::I18nConfig;
use crate::models::Category;
use super::fallback;

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translation catalogs by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    translations_dir: PathBuf,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Build translation parameters from string pairs
pub fn params(pairs: &[(&str, &str)]) -> TranslationParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl I18n {
    /// Create a new I18n instance without any catalog loaded
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            translations_dir: PathBuf::from(&config.translations_dir),
        }
    }

    /// Load translation files for all supported languages.
    ///
    /// A missing or malformed file only logs a warning: lookups then use the
    /// built-in dictionary for that language.
    pub async fn load_translations(&mut self) -> Result<()> {
        let translations_dir = self.translations_dir.clone();

        if !translations_dir.exists() {
            warn!(dir = %translations_dir.display(), "Translations directory not found, using built-in dictionaries");
            return Ok(());
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                match self.load_language_file(&file_path, lang_code).await {
                    Ok(_) => info!("Loaded translations for language: {}", lang_code),
                    Err(e) => error!("Failed to load translations for {}: {}", lang_code, e),
                }
            } else {
                warn!("Translation file not found: {}", file_path.display());
            }
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let translations: Value = serde_json::from_str(&content)?;

        if let Value::Object(map) = translations {
            debug!("Loaded {} translation keys for {}", count_keys(&map), lang_code);
            self.translations.insert(lang_code.to_string(), map);
        } else {
            return Err(StepupError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ));
        }

        Ok(())
    }

    /// Get a translated message.
    ///
    /// Lookup order: catalog for `lang`, built-in dictionary for `lang`, then
    /// the same two for the default language. The key itself is returned only
    /// when nothing matches.
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.resolve_language(Some(lang));

        let text = self
            .lookup(key, &effective_lang)
            .or_else(|| self.lookup(key, &self.default_language));

        match text {
            Some(text) => self.format_message(&text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    fn lookup(&self, key: &str, lang: &str) -> Option<String> {
        self.get_translation_value(key, lang)
            .and_then(|value| match value {
                Value::String(s) => Some(s.clone()),
                _ => None,
            })
            .filter(|s| !s.trim().is_empty())
            .or_else(|| fallback::lookup(lang, key).map(str::to_string))
    }

    /// Icon and localized title of a category, e.g. "💻 Technology"
    pub fn category_title(&self, category: Category, lang: &str) -> String {
        format!("{} {}", category.icon(), self.t(&category.title_key(), lang, None))
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Stored language if supported, default language otherwise
    pub fn resolve_language(&self, lang: Option<&str>) -> String {
        match lang {
            Some(lang) if self.is_language_supported(lang) => lang.to_string(),
            _ => self.default_language.clone(),
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let translations = self.translations.get(lang)?;

        // Nested keys like "quiz.results_title"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        Some(current)
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Keys that would fall through to the raw key for `lang`
    pub fn missing_keys(&self, lang: &str) -> Vec<&'static str> {
        fallback::keys()
            .filter(|key| {
                let text = self.t(key, lang, None);
                text.trim().is_empty() || text == *key
            })
            .collect()
    }

    /// Get translation statistics
    pub fn get_stats(&self) -> TranslationStats {
        let mut languages: Vec<LanguageStats> = self
            .translations
            .iter()
            .map(|(code, map)| LanguageStats {
                code: code.clone(),
                key_count: count_keys(map),
            })
            .collect();
        languages.sort_by(|a, b| a.code.cmp(&b.code));

        TranslationStats {
            languages,
            builtin_keys: fallback::keys().count(),
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub builtin_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

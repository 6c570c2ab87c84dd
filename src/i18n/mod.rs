//! Internationalization module
//!
//! This module handles multi-language support for the Stepup bot: translation
//! catalogs loaded from JSON, built-in dictionaries and message formatting.

pub mod fallback;
pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams, TranslationStats, LanguageStats, params};

/// Supported interface languages with their display names
pub const LANGUAGES: [(&str, &str); 3] = [
    ("ru", "Русский"),
    ("en", "English"),
    ("az", "Azərbaycan"),
];

/// Display name of a language code
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

//! Reference content: professions, courses, tips and quiz questions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::models::category::CategoryScores;

/// Pick the text for `lang`: Azerbaijani falls back to English, everything
/// falls back to Russian. Empty columns count as missing.
pub fn localized<'a>(lang: &str, ru: &'a str, en: Option<&'a str>, az: Option<&'a str>) -> &'a str {
    let present = |v: Option<&'a str>| v.filter(|s| !s.trim().is_empty());
    match lang {
        "en" => present(en).unwrap_or(ru),
        "az" => present(az).or_else(|| present(en)).unwrap_or(ru),
        _ => ru,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profession {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub description: String,
    pub skills: String,
    pub link: String,
    pub domain: String,
    pub name_en: Option<String>,
    pub description_en: Option<String>,
    pub skills_en: Option<String>,
    pub name_az: Option<String>,
    pub description_az: Option<String>,
    pub skills_az: Option<String>,
}

impl Profession {
    pub fn name_for(&self, lang: &str) -> &str {
        localized(lang, &self.name, self.name_en.as_deref(), self.name_az.as_deref())
    }

    pub fn description_for(&self, lang: &str) -> &str {
        localized(lang, &self.description, self.description_en.as_deref(), self.description_az.as_deref())
    }

    pub fn skills_for(&self, lang: &str) -> &str {
        localized(lang, &self.skills, self.skills_en.as_deref(), self.skills_az.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub link: String,
    pub level: String,
    pub title_en: Option<String>,
    pub title_az: Option<String>,
}

impl Course {
    pub fn title_for(&self, lang: &str) -> &str {
        localized(lang, &self.title, self.title_en.as_deref(), self.title_az.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tip {
    pub id: i64,
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
}

impl Tip {
    pub fn text_for(&self, lang: &str) -> &str {
        localized(lang, &self.text, self.text_en.as_deref(), self.text_az.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub order_idx: i64,
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
}

impl Question {
    pub fn text_for(&self, lang: &str) -> &str {
        localized(lang, &self.text, self.text_en.as_deref(), self.text_az.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
    pub weight_creative: i64,
    pub weight_tech: i64,
    pub weight_social: i64,
    pub weight_business: i64,
    pub weight_green: i64,
}

impl Answer {
    pub fn text_for(&self, lang: &str) -> &str {
        localized(lang, &self.text, self.text_en.as_deref(), self.text_az.as_deref())
    }

    pub fn weights(&self) -> CategoryScores {
        CategoryScores::new(
            self.weight_creative,
            self.weight_tech,
            self.weight_social,
            self.weight_business,
            self.weight_green,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_fallbacks() {
        assert_eq!(localized("ru", "привет", Some("hello"), Some("salam")), "привет");
        assert_eq!(localized("en", "привет", Some("hello"), Some("salam")), "hello");
        assert_eq!(localized("en", "привет", None, Some("salam")), "привет");
        assert_eq!(localized("az", "привет", Some("hello"), Some("salam")), "salam");
        assert_eq!(localized("az", "привет", Some("hello"), None), "hello");
        assert_eq!(localized("az", "привет", Some(" "), Some("")), "привет");
        assert_eq!(localized("de", "привет", Some("hello"), None), "привет");
    }
}

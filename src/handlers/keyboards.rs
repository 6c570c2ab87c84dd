//! Reply and inline keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};
use crate::handlers::callbacks::CallbackAction;
use crate::i18n::{language_name, I18n, LANGUAGES};
use crate::models::{AgeGroup, Answer, Category, FavoriteKind};

const LANGUAGE_BUTTON_PREFIX: &str = "🌐";

/// Buttons of the main reply keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Test,
    Catalog,
    Courses,
    Favorites,
    Tip,
    Profile,
    Language,
}

impl MenuButton {
    const LABELED: [(MenuButton, &'static str); 6] = [
        (MenuButton::Test, "menu.test"),
        (MenuButton::Catalog, "menu.catalog"),
        (MenuButton::Courses, "menu.courses"),
        (MenuButton::Favorites, "menu.favorites"),
        (MenuButton::Tip, "menu.tip"),
        (MenuButton::Profile, "menu.profile"),
    ];

    /// Match a pressed button against its label in every supported language,
    /// so a keyboard sent before a language switch keeps working.
    pub fn resolve(text: &str, i18n: &I18n) -> Option<MenuButton> {
        let text = text.trim();
        if text.starts_with(LANGUAGE_BUTTON_PREFIX) {
            return Some(MenuButton::Language);
        }

        i18n.supported_languages().iter().find_map(|lang| {
            Self::LABELED
                .iter()
                .find(|(_, key)| i18n.t(key, lang, None) == text)
                .map(|(button, _)| *button)
        })
    }
}

fn callback(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.to_data())
}

fn back_row(lang: &str, i18n: &I18n) -> Vec<InlineKeyboardButton> {
    vec![callback(i18n.t("menu.back", lang, None), CallbackAction::Menu)]
}

pub fn main_menu(lang: &str, i18n: &I18n) -> KeyboardMarkup {
    let button = |key: &str| KeyboardButton::new(i18n.t(key, lang, None));
    let language = format!("{} {}", LANGUAGE_BUTTON_PREFIX, language_name(lang).unwrap_or(lang));

    KeyboardMarkup::new(vec![
        vec![button("menu.test"), button("menu.catalog")],
        vec![button("menu.courses"), button("menu.favorites")],
        vec![button("menu.tip"), button("menu.profile")],
        vec![KeyboardButton::new(language), KeyboardButton::new("/lang")],
    ])
    .resize_keyboard()
}

/// Language picker; the current language is marked with a check
pub fn language_picker(current: Option<&str>) -> InlineKeyboardMarkup {
    let rows = LANGUAGES
        .iter()
        .map(|(code, name)| {
            let label = if current == Some(*code) {
                format!("✅ {}", name)
            } else {
                name.to_string()
            };
            vec![callback(label, CallbackAction::Language(code.to_string()))]
        })
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(rows)
}

/// Categories two per row, then a back button
pub fn categories(lang: &str, i18n: &I18n) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Category::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|category| {
                    callback(i18n.category_title(*category, lang), CallbackAction::Category(*category))
                })
                .collect()
        })
        .collect();
    rows.push(back_row(lang, i18n));

    InlineKeyboardMarkup::new(rows)
}

/// One button per answer, then a back button
pub fn answers(answers: &[Answer], lang: &str, i18n: &I18n) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = answers
        .iter()
        .map(|answer| vec![callback(answer.text_for(lang), CallbackAction::Answer(answer.id))])
        .collect();
    rows.push(back_row(lang, i18n));

    InlineKeyboardMarkup::new(rows)
}

pub fn age_groups(lang: &str, i18n: &I18n) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![AgeGroup::ALL
        .iter()
        .map(|group| callback(i18n.t(group.label_key(), lang, None), CallbackAction::Age(*group)))
        .collect::<Vec<_>>()])
}

pub fn favorite_toggle(kind: FavoriteKind, entity_id: i64, lang: &str, i18n: &I18n) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback(
        i18n.t("favorites.add_button", lang, None),
        CallbackAction::Favorite(kind, entity_id),
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::I18nConfig;

    fn i18n() -> I18n {
        I18n::new(&I18nConfig {
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string(), "az".to_string()],
            translations_dir: "does-not-exist".to_string(),
        })
    }

    #[test]
    fn test_menu_buttons_resolve_in_any_language() {
        let i18n = i18n();
        assert_eq!(MenuButton::resolve("🧭 Тест", &i18n), Some(MenuButton::Test));
        assert_eq!(MenuButton::resolve("⭐ Favorites", &i18n), Some(MenuButton::Favorites));
        assert_eq!(MenuButton::resolve("🎯 Kataloq", &i18n), Some(MenuButton::Catalog));
        assert_eq!(MenuButton::resolve("🌐 English", &i18n), Some(MenuButton::Language));
        assert_eq!(MenuButton::resolve("hello", &i18n), None);
    }

    #[test]
    fn test_category_keyboard_layout() {
        let markup = categories("en", &i18n());
        let sizes: Vec<usize> = markup.inline_keyboard.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1, 1]);
        assert_eq!(markup.inline_keyboard[0][0].text, "🎨 Creative");
    }

    #[test]
    fn test_language_picker_marks_current() {
        let markup = language_picker(Some("en"));
        assert!(markup.inline_keyboard.iter().all(|row| row.len() == 1));
        let labels: Vec<&str> = markup.inline_keyboard.iter().map(|row| row[0].text.as_str()).collect();
        assert_eq!(labels, vec!["Русский", "✅ English", "Azərbaycan"]);
    }
}

//! Favorites handlers

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::models::{Category, FavoriteItem, FavoriteKind, Favorites};
use crate::handlers::sender;

/// Handle /favorites and the favorites menu button
pub async fn handle_favorites(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    let favorites = services.favorites_service.list(user_id).await?;
    let text = if favorites.is_empty() {
        i18n.t("favorites.empty", &lang, None)
    } else {
        format_favorites(&favorites, &lang, &i18n)
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle /fav_courses
pub async fn handle_favorite_courses(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    let courses = services.favorites_service.list_courses(user_id).await?;
    let text = if courses.is_empty() {
        i18n.t("favorites.empty", &lang, None)
    } else {
        let mut lines = vec![i18n.t("favorites.courses_header", &lang, None)];
        lines.extend(courses.iter().map(|course| course_line(course, &lang)));
        lines.join("\n")
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle a `fav:<kind>:<id>` button; returns the callback notice
pub async fn handle_toggle(
    user_id: i64,
    kind: FavoriteKind,
    entity_id: i64,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<String> {
    let lang = services.user_service.language_of(user_id).await?;
    // Stale buttons for removed content only get a plain acknowledgement
    let key = match services.favorites_service.toggle(user_id, kind, entity_id).await? {
        Some(true) => "favorites.added",
        Some(false) => "favorites.removed",
        None => "common.ok",
    };
    Ok(i18n.t(key, &lang, None))
}

fn course_line(course: &FavoriteItem, lang: &str) -> String {
    format!("• {} — {}", course.title_for(lang), course.link)
}

/// Plain-text favorites list, professions first
pub fn format_favorites(favorites: &Favorites, lang: &str, i18n: &I18n) -> String {
    let mut lines = vec![i18n.t("favorites.header", lang, None)];

    if !favorites.professions.is_empty() {
        lines.push(format!("\n{}", i18n.t("favorites.professions_header", lang, None)));
        for profession in &favorites.professions {
            let category = profession
                .category
                .parse::<Category>()
                .map(|category| i18n.category_title(category, lang))
                .unwrap_or_else(|_| profession.category.clone());
            lines.push(format!("• {} ({})", profession.title_for(lang), category));
        }
    }

    if !favorites.courses.is_empty() {
        lines.push(format!("\n{}", i18n.t("favorites.courses_header", lang, None)));
        lines.extend(favorites.courses.iter().map(|course| course_line(course, lang)));
    }

    lines.join("\n")
}

//! Courses handler

use teloxide::{Bot, types::{Message, ParseMode}, prelude::*};
use crate::utils::errors::Result;
use crate::utils::helpers::escape_html;
use crate::services::{CourseSelection, ServiceFactory};
use crate::i18n::{params, I18n};
use crate::models::FavoriteKind;
use crate::handlers::{keyboards, sender};

/// Handle /courses and the courses menu button
pub async fn handle_courses(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    let (category, courses) = match services.catalog_service.courses_for_user(user_id).await? {
        CourseSelection::NoInterest => {
            bot.send_message(msg.chat.id, i18n.t("courses.no_interest", &lang, None)).await?;
            return Ok(());
        }
        CourseSelection::Empty(_) => {
            bot.send_message(msg.chat.id, i18n.t("common.no_data", &lang, None)).await?;
            return Ok(());
        }
        CourseSelection::Courses(category, courses) => (category, courses),
    };

    let title = i18n.category_title(category, &lang);
    bot.send_message(
        msg.chat.id,
        i18n.t("courses.courses_for", &lang, Some(&params(&[("category", &title)]))),
    )
    .await?;

    let link_label = i18n.t("courses.link", &lang, None);
    for course in &courses {
        let text = format!(
            "• <b>{}</b>\n{}: {}",
            escape_html(course.title_for(&lang)),
            escape_html(&link_label),
            escape_html(&course.link)
        );
        bot.send_message(msg.chat.id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboards::favorite_toggle(FavoriteKind::Course, course.id, &lang, &i18n))
            .await?;
    }

    Ok(())
}

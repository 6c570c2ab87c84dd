//! Message handlers module
//!
//! Free text is, in order: the answer to a pending feedback prompt, a main
//! menu button, or something the bot has no data for.

use teloxide::{Bot, types::Message, prelude::*};
use tracing::debug;
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::handlers::commands::{catalog, courses, favorites, feedback, profile, quiz, start};
use crate::handlers::{sender, MenuButton};

/// Handle incoming text messages
pub async fn handle_message(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let text = msg.text().unwrap_or_default().to_string();

    if !text.is_empty() && services.feedback_service.is_pending(user_id).await? {
        return feedback::handle_feedback_text(bot, msg, &text, services, i18n).await;
    }

    match MenuButton::resolve(&text, &i18n) {
        Some(button) => {
            debug!(user_id = user_id, button = ?button, "Menu button pressed");
            match button {
                MenuButton::Test => quiz::handle_test(bot, msg, services, i18n).await,
                MenuButton::Catalog => catalog::handle_catalog(bot, msg, services, i18n).await,
                MenuButton::Courses => courses::handle_courses(bot, msg, services, i18n).await,
                MenuButton::Favorites => favorites::handle_favorites(bot, msg, services, i18n).await,
                MenuButton::Tip => catalog::handle_tip(bot, msg, services, i18n).await,
                MenuButton::Profile => profile::handle_profile(bot, msg, services, i18n).await,
                MenuButton::Language => start::handle_language_command(bot, msg, services, i18n).await,
            }
        }
        None => {
            let lang = services.user_service.language_of(user_id).await?;
            bot.send_message(msg.chat.id, i18n.t("common.no_data", &lang, None)).await?;
            Ok(())
        }
    }
}

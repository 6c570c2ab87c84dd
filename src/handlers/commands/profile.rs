//! Profile handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::models::{Category, User};
use crate::handlers::sender;

/// Handle /profile and the profile menu button
pub async fn handle_profile(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    let text = match services.user_service.get_user(user_id).await? {
        Some(user) => format_profile(&user, &lang, &i18n),
        None => i18n.t("profile.not_found", &lang, None),
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

pub fn format_profile(user: &User, lang: &str, i18n: &I18n) -> String {
    let not_set = || i18n.t("profile.not_set", lang, None);

    let name = user.name.clone().unwrap_or_else(not_set);
    let age_group = user
        .age()
        .map(|group| i18n.t(group.label_key(), lang, None))
        .unwrap_or_else(not_set);
    let interest = user
        .interest_category()
        .map(|category| i18n.category_title(category, lang))
        .unwrap_or_else(not_set);
    let scores = user
        .scores()
        .map(|scores| {
            Category::ALL
                .iter()
                .map(|category| format!("{} {}", category.icon(), scores.get(*category)))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .unwrap_or_else(not_set);

    format!(
        "{}\n\n{} {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
        i18n.t("profile.title", lang, None),
        i18n.t("profile.id_label", lang, None),
        user.telegram_id,
        i18n.t("profile.name", lang, None),
        name,
        i18n.t("profile.age_group", lang, None),
        age_group,
        i18n.t("profile.interest", lang, None),
        interest,
        i18n.t("profile.scores", lang, None),
        scores,
    )
}

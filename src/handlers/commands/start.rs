//! Start command handler
//!
//! Onboarding: language choice, age group, main menu and profile reset.

use teloxide::{Bot, types::{ChatId, Message}, prelude::*};
use tracing::{info, debug};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::services::ServiceFactory;
use crate::i18n::{language_name, params, I18n};
use crate::models::AgeGroup;
use crate::handlers::{keyboards, sender};

/// Handle /start command - main entry point for user onboarding
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user = sender(&msg)?;
    let user_id = user.id.0 as i64;

    let profile = services.user_service.register(user_id, user.full_name()).await?;
    log_user_action(user_id, "start", None);

    match profile.language_code.as_deref().filter(|lang| i18n.is_language_supported(lang)) {
        Some(lang) => show_main_menu(&bot, msg.chat.id, lang, &i18n).await,
        None => {
            debug!(user_id = user_id, "No language chosen yet, showing picker");
            bot.send_message(msg.chat.id, i18n.t("start.pick_language", i18n.default_language(), None))
                .reply_markup(keyboards::language_picker(None))
                .await?;
            Ok(())
        }
    }
}

/// Greeting with the main reply keyboard
pub async fn show_main_menu(bot: &Bot, chat_id: ChatId, lang: &str, i18n: &I18n) -> Result<()> {
    bot.send_message(chat_id, i18n.t("start.greeting", lang, None))
        .reply_markup(keyboards::main_menu(lang, i18n))
        .await?;
    bot.send_message(chat_id, i18n.t("start.choose_below", lang, None)).await?;
    Ok(())
}

/// Handle /lang and the language menu button
pub async fn handle_language_command(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let current = services
        .user_service
        .get_user(user_id)
        .await?
        .and_then(|user| user.language_code);
    let lang = i18n.resolve_language(current.as_deref());

    bot.send_message(msg.chat.id, i18n.t("language.title", &lang, None))
        .reply_markup(keyboards::language_picker(current.as_deref()))
        .await?;
    Ok(())
}

/// Handle a `lang:<code>` button
pub async fn handle_language_selected(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    name: String,
    code: &str,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    if !i18n.is_language_supported(code) {
        debug!(user_id = user_id, code = %code, "Ignoring unsupported language");
        return Ok(());
    }

    let profile = services.user_service.register(user_id, name).await?;
    services.user_service.set_language(user_id, code).await?;
    log_user_action(user_id, "language_selected", Some(code));

    let language = language_name(code).unwrap_or(code);
    bot.send_message(chat_id, i18n.t("language.set", code, Some(&params(&[("lang", language)]))))
        .await?;
    show_main_menu(bot, chat_id, code, i18n).await?;

    if profile.age_group.is_none() {
        bot.send_message(chat_id, i18n.t("age.prompt", code, None))
            .reply_markup(keyboards::age_groups(code, i18n))
            .await?;
    }

    Ok(())
}

/// Handle an `age:<group>` button
pub async fn handle_age_selected(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    name: String,
    group: AgeGroup,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    services.user_service.register(user_id, name).await?;
    services.user_service.set_age_group(user_id, group).await?;

    let lang = services.user_service.language_of(user_id).await?;
    bot.send_message(chat_id, i18n.t("age.saved", &lang, None)).await?;
    Ok(())
}

/// Handle /reset: clear the profile, then run /start again
pub async fn handle_reset(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;

    services.user_service.reset(user_id).await?;
    info!(user_id = user_id, "Profile reset requested");

    let lang = services.user_service.language_of(user_id).await?;
    bot.send_message(msg.chat.id, i18n.t("reset.done", &lang, None)).await?;

    handle_start(bot, msg, services, i18n).await
}

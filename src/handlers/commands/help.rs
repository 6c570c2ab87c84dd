//! Help, about and id commands

use teloxide::{Bot, types::{Message, ParseMode}, prelude::*};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::handlers::{keyboards, sender};

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let lang = services.user_service.language_of(sender(&msg)?.id.0 as i64).await?;

    bot.send_message(msg.chat.id, i18n.t("help.text", &lang, None))
        .reply_markup(keyboards::main_menu(&lang, &i18n))
        .await?;
    Ok(())
}

pub async fn handle_about(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let lang = services.user_service.language_of(sender(&msg)?.id.0 as i64).await?;
    bot.send_message(msg.chat.id, i18n.t("about.text", &lang, None)).await?;
    Ok(())
}

/// Handle /id: the sender's Telegram id in a copyable code block
pub async fn handle_id(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    bot.send_message(
        msg.chat.id,
        format!("{} <code>{}</code>", i18n.t("profile.id_label", &lang, None), user_id),
    )
    .parse_mode(ParseMode::Html)
    .await?;
    Ok(())
}

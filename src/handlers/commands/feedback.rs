//! Feedback handlers

use teloxide::{Bot, types::Message, prelude::*};
use tracing::error;
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::handlers::sender;

/// Handle /feedback: prompt and wait for the next text message
pub async fn handle_feedback(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user_id = sender(&msg)?.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    services.feedback_service.begin(user_id).await?;
    bot.send_message(msg.chat.id, i18n.t("feedback.prompt", &lang, None)).await?;
    Ok(())
}

/// Forward the pending feedback text to the admin chat
pub async fn handle_feedback_text(
    bot: Bot,
    msg: Message,
    text: &str,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    let user = sender(&msg)?;
    let user_id = user.id.0 as i64;
    let lang = services.user_service.language_of(user_id).await?;

    let reply = match services.feedback_service.submit(user_id, &user.full_name(), text).await {
        Ok(_) => i18n.t("feedback.sent", &lang, None),
        Err(e) => {
            error!(user_id = user_id, error = %e, "Failed to forward feedback");
            i18n.t("feedback.failed", &lang, None)
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for menu buttons and free text
//! - Keyboards shared by all of them

pub mod commands;
pub mod callbacks;
pub mod messages;
pub mod keyboards;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use callbacks::{CallbackAction, handle_callback_query};
pub use messages::handle_message;
pub use keyboards::MenuButton;

use teloxide::{Bot, types::{ChatId, Message, User}, prelude::*};
use tracing::warn;
use crate::i18n::I18n;
use crate::services::ServiceFactory;
use crate::utils::errors::{StepupError, Result};
use crate::utils::logging::log_handler_error;

/// Sender of a message; updates without one are rejected
pub(crate) fn sender(msg: &Message) -> Result<&User> {
    msg.from
        .as_ref()
        .ok_or_else(|| StepupError::InvalidInput("No user in message".to_string()))
}

/// Log a failed handler and tell the user something went wrong
pub async fn report_error(
    bot: &Bot,
    chat_id: Option<ChatId>,
    user_id: Option<i64>,
    services: &ServiceFactory,
    i18n: &I18n,
    context: &str,
    error: &StepupError,
) {
    log_handler_error(user_id, context, error);

    let chat_id = match chat_id.or(user_id.map(ChatId)) {
        Some(chat_id) => chat_id,
        None => return,
    };

    let lang = match user_id {
        Some(user_id) => services
            .user_service
            .language_of(user_id)
            .await
            .unwrap_or_else(|_| i18n.default_language().to_string()),
        None => i18n.default_language().to_string(),
    };

    if let Err(e) = bot.send_message(chat_id, i18n.t("errors.generic", &lang, None)).await {
        warn!(error = %e, "Failed to deliver error message");
    }
}

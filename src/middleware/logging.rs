//! Logging middleware
//!
//! Logs every incoming update before it reaches the handlers.

use teloxide::types::{CallbackQuery, ChatKind, MediaKind, Message, MessageKind, Update, UpdateKind};
use tracing::{debug, info};
use crate::utils::helpers::truncate_text;

const LOGGED_TEXT_CHARS: usize = 64;

/// Logging middleware for bot interactions
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    log_message_text: bool,
}

impl LoggingMiddleware {
    /// `log_message_text` adds message bodies at debug level
    pub fn new(log_message_text: bool) -> Self {
        Self { log_message_text }
    }

    /// Log incoming update
    pub fn log_update(&self, update: &Update) {
        match &update.kind {
            UpdateKind::Message(message) => self.log_message(message),
            UpdateKind::CallbackQuery(query) => self.log_callback(query),
            other => {
                debug!(update_id = update.id.0, kind = ?std::mem::discriminant(other), "Other update type received");
            }
        }
    }

    fn log_message(&self, message: &Message) {
        let chat_type = match message.chat.kind {
            ChatKind::Private(_) => "private",
            ChatKind::Public(_) => "public",
        };

        let message_type = match &message.kind {
            MessageKind::Common(common) => match &common.media_kind {
                MediaKind::Text(text) => {
                    if self.log_message_text {
                        debug!(
                            chat_id = message.chat.id.0,
                            text = %truncate_text(&text.text, LOGGED_TEXT_CHARS),
                            "Text message received"
                        );
                    }
                    if text.text.starts_with('/') { "command" } else { "text" }
                }
                MediaKind::Photo(_) => "photo",
                MediaKind::Sticker(_) => "sticker",
                MediaKind::Voice(_) => "voice",
                _ => "other_media",
            },
            _ => "other",
        };

        info!(
            user_id = message.from.as_ref().map(|user| user.id.0),
            chat_id = message.chat.id.0,
            chat_type = chat_type,
            message_type = message_type,
            message_id = message.id.0,
            "Message received"
        );
    }

    fn log_callback(&self, query: &CallbackQuery) {
        info!(
            user_id = query.from.id.0,
            callback_data = query.data.as_deref().unwrap_or("none"),
            "Callback query received"
        );
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(false)
    }
}

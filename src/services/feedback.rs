//! Feedback service
//!
//! Puts a user into the feedback session and forwards their next message to
//! the admin chat.

use teloxide::{prelude::*, types::ChatId};
use tracing::{info, warn};
use crate::config::settings::Settings;
use crate::state::{Session, StateStorage};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct FeedbackService {
    bot: Bot,
    storage: StateStorage,
    admin_chat_id: Option<i64>,
}

impl FeedbackService {
    pub fn new(bot: Bot, settings: &Settings, storage: StateStorage) -> Self {
        Self {
            bot,
            storage,
            admin_chat_id: settings.bot.admin_chat_id,
        }
    }

    /// Wait for the next text message from this user
    pub async fn begin(&self, user_id: i64) -> Result<()> {
        self.storage.start_session(user_id, Session::AwaitingFeedback).await?;
        Ok(())
    }

    pub async fn is_pending(&self, user_id: i64) -> Result<bool> {
        Ok(self
            .storage
            .load_context(user_id)
            .await?
            .map(|context| context.is_awaiting_feedback())
            .unwrap_or(false))
    }

    /// Close the session and forward the text; returns whether it was sent.
    ///
    /// The session is cleared before sending, so a failed forward does not
    /// leave the user stuck in feedback mode.
    pub async fn submit(&self, user_id: i64, name: &str, text: &str) -> Result<bool> {
        self.storage.delete_context(user_id).await?;

        let admin_chat_id = match self.admin_chat_id {
            Some(id) => id,
            None => {
                warn!(user_id = user_id, "Feedback received but no admin chat is configured");
                return Ok(false);
            }
        };

        self.bot
            .send_message(ChatId(admin_chat_id), format_feedback(name, user_id, text))
            .await?;
        info!(user_id = user_id, admin_chat_id = admin_chat_id, "Feedback forwarded");
        Ok(true)
    }
}

/// Message forwarded to the admin chat
pub fn format_feedback(name: &str, user_id: i64, text: &str) -> String {
    format!("[Feedback] From: {} ({})\n\n{}", name, user_id, text)
}

//! Callback query handlers module
//!
//! Inline button data is parsed into a `CallbackAction` and routed to the
//! command modules. Unknown or malformed data is acknowledged and ignored.

use std::str::FromStr;
use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{debug, warn};
use crate::utils::errors::{StepupError, Result};
use crate::services::ServiceFactory;
use crate::i18n::I18n;
use crate::handlers::commands::{catalog, favorites, quiz, start};
use crate::models::{AgeGroup, Category, FavoriteKind};

/// Action encoded in inline button data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// `lang:<code>`
    Language(String),
    /// `nav:menu`
    Menu,
    /// `cat:<category>`
    Category(Category),
    /// `ans:<answer id>`
    Answer(i64),
    /// `age:<teen|adult>`
    Age(AgeGroup),
    /// `fav:<profession|course>:<id>`
    Favorite(FavoriteKind, i64),
}

impl CallbackAction {
    pub fn to_data(&self) -> String {
        match self {
            CallbackAction::Language(code) => format!("lang:{}", code),
            CallbackAction::Menu => "nav:menu".to_string(),
            CallbackAction::Category(category) => format!("cat:{}", category.as_str()),
            CallbackAction::Answer(id) => format!("ans:{}", id),
            CallbackAction::Age(group) => format!("age:{}", group.as_str()),
            CallbackAction::Favorite(kind, id) => format!("fav:{}:{}", kind.as_str(), id),
        }
    }
}

impl FromStr for CallbackAction {
    type Err = StepupError;

    fn from_str(data: &str) -> Result<Self> {
        let invalid = || StepupError::InvalidCallbackData(data.to_string());
        let (prefix, rest) = data.split_once(':').ok_or_else(invalid)?;

        match prefix {
            "lang" if !rest.is_empty() => Ok(CallbackAction::Language(rest.to_string())),
            "nav" if rest == "menu" => Ok(CallbackAction::Menu),
            "cat" => rest.parse().map(CallbackAction::Category).map_err(|_| invalid()),
            "ans" => rest.parse().map(CallbackAction::Answer).map_err(|_| invalid()),
            "age" => rest.parse().map(CallbackAction::Age).map_err(|_| invalid()),
            "fav" => {
                let (kind, id) = rest.split_once(':').ok_or_else(invalid)?;
                let kind = kind.parse().map_err(|_| invalid())?;
                let id = id.parse().map_err(|_| invalid())?;
                Ok(CallbackAction::Favorite(kind, id))
            }
            _ => Err(invalid()),
        }
    }
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));

    let action = match query.data.as_deref().map(CallbackAction::from_str) {
        Some(Ok(action)) => action,
        Some(Err(e)) => {
            warn!(user_id = user_id, error = %e, "Ignoring callback");
            bot.answer_callback_query(query.id.clone()).await?;
            return Ok(());
        }
        None => {
            bot.answer_callback_query(query.id.clone()).await?;
            return Ok(());
        }
    };

    debug!(user_id = user_id, action = ?action, "Routing callback");
    let name = query.from.full_name();

    let result = match action {
        CallbackAction::Language(code) => {
            start::handle_language_selected(&bot, chat_id, user_id, name, &code, &services, &i18n)
                .await
                .map(|_| None)
        }
        CallbackAction::Menu => match services.user_service.language_of(user_id).await {
            Ok(lang) => start::show_main_menu(&bot, chat_id, &lang, &i18n).await.map(|_| None),
            Err(e) => Err(e),
        },
        CallbackAction::Category(category) => {
            catalog::handle_category_selected(&bot, chat_id, user_id, name, category, &services, &i18n)
                .await
                .map(|_| None)
        }
        CallbackAction::Answer(answer_id) => {
            quiz::handle_answer(&bot, chat_id, user_id, answer_id, &services, &i18n).await
        }
        CallbackAction::Age(group) => {
            start::handle_age_selected(&bot, chat_id, user_id, name, group, &services, &i18n)
                .await
                .map(|_| None)
        }
        CallbackAction::Favorite(kind, entity_id) => {
            favorites::handle_toggle(user_id, kind, entity_id, &services, &i18n)
                .await
                .map(Some)
        }
    };

    // The button spinner stops even when the action failed
    let mut answer = bot.answer_callback_query(query.id.clone());
    if let Ok(Some(text)) = &result {
        answer = answer.text(text.clone());
    }
    if let Err(e) = answer.await {
        warn!(user_id = user_id, error = %e, "Failed to answer callback query");
    }

    result.map(|_| ())
}

//! Test data helpers for creating test updates
//!
//! Messages and callback queries are built from Bot API JSON, the same way
//! teloxide receives them.

use serde_json::json;
use teloxide::types::{CallbackQuery, Message};

pub const TEST_FIRST_NAME: &str = "Test";
pub const TEST_LAST_NAME: &str = "User";

fn user_json(user_id: i64) -> serde_json::Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": TEST_FIRST_NAME,
        "last_name": TEST_LAST_NAME,
        "language_code": "en"
    })
}

fn message_json(user_id: i64, text: &str) -> serde_json::Value {
    json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": {
            "id": user_id,
            "first_name": TEST_FIRST_NAME,
            "last_name": TEST_LAST_NAME,
            "type": "private"
        },
        "from": user_json(user_id),
        "text": text
    })
}

/// Text message from `user_id` in their private chat
pub fn create_text_message(user_id: i64, text: &str) -> Message {
    serde_json::from_value(message_json(user_id, text)).expect("valid message JSON")
}

/// Inline button press by `user_id` on a bot message in their private chat
pub fn create_callback_query(user_id: i64, data: &str) -> CallbackQuery {
    serde_json::from_value(json!({
        "id": format!("callback_{}", user_id),
        "from": user_json(user_id),
        "message": message_json(user_id, "Bot message"),
        "chat_instance": "test_chat_instance",
        "data": data
    }))
    .expect("valid callback query JSON")
}

/// Display name the bot stores for test users
pub fn test_full_name() -> String {
    format!("{} {}", TEST_FIRST_NAME, TEST_LAST_NAME)
}

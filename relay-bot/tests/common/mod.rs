//! Shared helpers for relay-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use relay_core::{Chat, Message, User};

pub const ADMIN_ID: i64 = 1;
pub const USER_CHAT: i64 = 1001;

/// Text message from a user in their private chat (user id == chat id, as in Telegram).
pub fn user_message(chat_id: i64, id: &str, text: &str) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: chat_id,
            username: Some("anon".to_string()),
            first_name: Some("Anon".to_string()),
            last_name: None,
        },
        chat: Chat::private(chat_id),
        content: text.to_string(),
        message_type: "text".to_string(),
        reply_to_message_id: None,
    }
}

/// Text message from `sender_id` in its private chat, optionally replying to `reply_to`.
pub fn message_from(sender_id: i64, id: &str, text: &str, reply_to: Option<&str>) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: sender_id,
            username: Some("someone".to_string()),
            first_name: None,
            last_name: None,
        },
        chat: Chat::private(sender_id),
        content: text.to_string(),
        message_type: "text".to_string(),
        reply_to_message_id: reply_to.map(String::from),
    }
}

/// Admin message in the admin chat, optionally replying to `reply_to`.
pub fn admin_message(id: &str, text: &str, reply_to: Option<&str>) -> Message {
    message_from(ADMIN_ID, id, text, reply_to)
}

//! Bot abstraction: the transport collaborator the relay talks to.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute mocks.

use crate::error::{RelayError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for outbound calls. Implementations map to a transport (e.g. Telegram).
///
/// Message ids are transport-specific strings (e.g. Telegram numeric ids rendered as text).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message and returns the id the transport assigned to it.
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Sends a text message threaded as a reply to `reply_to_message_id` in `chat`; returns the new id.
    async fn send_reply(&self, chat: &Chat, reply_to_message_id: &str, text: &str)
        -> Result<String>;
    /// Replies to the given message in its own chat.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a photo (transport file reference) with an optional caption.
    async fn send_photo(&self, chat: &Chat, photo: &str, caption: Option<&str>) -> Result<()>;
    /// Returns a file reference to the user's most recent profile photo, if any.
    async fn latest_profile_photo(&self, user_id: i64) -> Result<Option<String>>;
}

/// Parses a message id string into an i32 (Telegram message id width).
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| RelayError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}

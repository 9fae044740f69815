//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what reached the admin and the users
//! without hitting Telegram. Sent messages get ids `A1`, `A2`, ... in call order.

use async_trait::async_trait;
use relay_core::{Bot, Chat, Message, RelayError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message {
        id: String,
        chat_id: i64,
        text: String,
        reply_to: Option<String>,
    },
    Photo {
        chat_id: i64,
        photo: String,
        caption: Option<String>,
    },
}

/// Recording bot. Failure switches let tests simulate transport errors.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    next_id: AtomicUsize,
    /// Returned by `latest_profile_photo`.
    profile_photo: Mutex<Option<String>>,
    pub fail_profile_lookup: AtomicBool,
    pub fail_send_photo: AtomicBool,
    pub fail_send_message: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_photo(photo: &str) -> Self {
        let bot = Self::default();
        *bot.profile_photo.lock().unwrap() = Some(photo.to_string());
        bot
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Text messages delivered to `chat_id`, in order.
    pub fn messages_to(&self, chat_id: i64) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Message { chat_id: c, .. } if *c == chat_id))
            .collect()
    }

    /// Texts delivered to `chat_id`, in order.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.messages_to(chat_id)
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message { text, .. } => Some(text),
                Sent::Photo { .. } => None,
            })
            .collect()
    }

    pub fn photos(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Photo { .. }))
            .collect()
    }

    fn record_message(&self, chat_id: i64, text: &str, reply_to: Option<&str>) -> Result<String> {
        if self.fail_send_message.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("send_message failed".to_string()));
        }
        let id = format!("A{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.sent.lock().unwrap().push(Sent::Message {
            id: id.clone(),
            chat_id,
            text: text.to_string(),
            reply_to: reply_to.map(String::from),
        });
        Ok(id)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record_message(chat.id, text, None)?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        self.record_message(chat.id, text, None)
    }

    async fn send_reply(
        &self,
        chat: &Chat,
        reply_to_message_id: &str,
        text: &str,
    ) -> Result<String> {
        self.record_message(chat.id, text, Some(reply_to_message_id))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record_message(message.chat.id, text, Some(&message.id))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: &str, caption: Option<&str>) -> Result<()> {
        if self.fail_send_photo.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("send_photo failed".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            photo: photo.to_string(),
            caption: caption.map(String::from),
        });
        Ok(())
    }

    async fn latest_profile_photo(&self, _user_id: i64) -> Result<Option<String>> {
        if self.fail_profile_lookup.load(Ordering::SeqCst) {
            return Err(RelayError::Bot("get_user_profile_photos failed".to_string()));
        }
        Ok(self.profile_photo.lock().unwrap().clone())
    }
}

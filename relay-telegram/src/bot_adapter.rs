//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{parse_message_id, Bot as CoreBot, Chat, Message, RelayError, Result};
use teloxide::payloads::setters::*;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile, MessageId, ReplyParameters, UserId};
use tracing::debug;

fn transport_error(e: teloxide::RequestError) -> RelayError {
    RelayError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_reply(
        &self,
        chat: &Chat,
        reply_to_message_id: &str,
        text: &str,
    ) -> Result<String> {
        let reply_to = MessageId(parse_message_id(reply_to_message_id)?);
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(reply_to))
            .await
            .map_err(transport_error)?;
        Ok(sent.id.to_string())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_reply(&message.chat, &message.id, text).await?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: &str, caption: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::file_id(FileId(photo.to_string())));
        if let Some(caption) = caption {
            request = request.caption(caption.to_string());
        }
        request.await.map_err(transport_error)?;
        Ok(())
    }

    async fn latest_profile_photo(&self, user_id: i64) -> Result<Option<String>> {
        let photos = self
            .bot
            .get_user_profile_photos(UserId(user_id as u64))
            .limit(1)
            .await
            .map_err(transport_error)?;
        debug!(user_id = user_id, total_count = photos.total_count, "Fetched profile photos");
        // Sizes are ordered smallest first.
        Ok(photos
            .photos
            .first()
            .and_then(|sizes| sizes.last())
            .map(|size| size.file.id.to_string()))
    }
}

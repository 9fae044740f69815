//! Chain handler that classifies each message and dispatches it to the [`RelayController`].

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::event::{AdminCommand, RelayEvent};
use crate::relay::RelayController;
use crate::runner::BotUsername;

/// Returns Stop for every message the relay acted on and Ignore for the rest.
#[derive(Clone)]
pub struct RelayHandler {
    controller: Arc<RelayController>,
    /// Read under lock for every message; `None` until `get_me` has answered.
    bot_username: BotUsername,
}

impl RelayHandler {
    pub fn new(controller: Arc<RelayController>, bot_username: BotUsername) -> Self {
        Self {
            controller,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        let event = RelayEvent::classify(
            message,
            self.controller.admin_id(),
            bot_username.as_deref(),
        );
        debug!(event = ?event, message_id = %message.id, "Classified message");

        match event {
            RelayEvent::UserMessage => self.controller.on_user_message(message).await?,
            RelayEvent::AdminReply => self.controller.on_admin_reply(message).await?,
            RelayEvent::Command(AdminCommand::Block) => self.controller.on_block(message).await?,
            RelayEvent::Command(AdminCommand::Close) => self.controller.on_close(message).await?,
            RelayEvent::Ignored => return Ok(HandlerResponse::Ignore),
        }

        Ok(HandlerResponse::Stop)
    }
}

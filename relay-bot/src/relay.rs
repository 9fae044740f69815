//! Relay controller: forwards user messages to the admin, routes admin replies back, and runs the
//! `/block` and `/close` commands against the [`ConversationRouter`].

use relay_core::{Bot, Chat, ConversationRouter, HandlerError, Message, Result, User};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// --- Notices ---
pub const MSG_NOT_CONNECTED: &str = "❌ This message is not connected to a user.";
pub const MSG_BLOCK_NEEDS_REPLY: &str = "❌ Reply to a user message to block.";
pub const MSG_USER_NOT_FOUND: &str = "❌ User not found.";
pub const MSG_USER_BLOCKED: &str = "🚫 User blocked.";
pub const MSG_CLOSE_NEEDS_REPLY: &str = "❌ Reply to a user message to close.";
pub const MSG_CHAT_NOT_FOUND: &str = "❌ Chat not found.";
pub const MSG_CHAT_CLOSED: &str = "✅ Chat closed.";
/// Sent to the user when the admin closes their conversation.
pub const MSG_CONVERSATION_CLOSED: &str = "🔒 This conversation has been closed.";

const UNKNOWN_SENDER: &str = "Unknown";

/// Sender identity shown to the admin: `@username`, else full name, else `Unknown`.
pub fn display_name(user: &User) -> String {
    match user.username.as_deref().filter(|u| !u.is_empty()) {
        Some(username) => format!("@{}", username),
        None => user
            .full_name()
            .unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
    }
}

/// Admin-facing text for a relayed user message.
pub fn format_relay(name: &str, chat_id: i64, text: &str) -> String {
    format!("📩 New message\nFrom: {}\nUserID: {}\n\n{}", name, chat_id, text)
}

/// Owns the transport handle, the routing state and the admin identity.
pub struct RelayController {
    bot: Arc<dyn Bot>,
    router: Arc<ConversationRouter>,
    admin_id: i64,
}

impl RelayController {
    pub fn new(bot: Arc<dyn Bot>, router: Arc<ConversationRouter>, admin_id: i64) -> Self {
        Self {
            bot,
            router,
            admin_id,
        }
    }

    pub fn admin_id(&self) -> i64 {
        self.admin_id
    }

    fn admin_chat(&self) -> Chat {
        Chat::private(self.admin_id)
    }

    fn is_admin(&self, message: &Message) -> bool {
        message.user.id == self.admin_id
    }

    /// Relays a user message to the admin and records the link for the admin-facing message.
    ///
    /// Blocked chats are dropped silently. The profile photo is best-effort; a failed send of the
    /// text itself fails the event and records no link.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn on_user_message(&self, message: &Message) -> Result<()> {
        let chat_id = message.chat.id;
        if self.router.is_blocked(chat_id) {
            debug!("Dropping message from blocked user");
            return Ok(());
        }

        let name = display_name(&message.user);

        if let Err(e) = self.forward_profile_photo(message.user.id, &name).await {
            warn!(error = %e, "Profile photo not forwarded; relaying text only");
        }

        let text = format_relay(&name, chat_id, &message.content);
        let admin_message_id = self
            .bot
            .send_message_and_return_id(&self.admin_chat(), &text)
            .await?;

        self.router.record_link(&admin_message_id, chat_id, &message.id);
        info!(
            admin_message_id = %admin_message_id,
            links = self.router.link_count(),
            "User message relayed"
        );
        Ok(())
    }

    /// Sends the sender's latest profile photo to the admin. `Ok(false)` when there is none.
    async fn forward_profile_photo(&self, user_id: i64, name: &str) -> Result<bool> {
        let Some(photo) = self.bot.latest_profile_photo(user_id).await? else {
            return Ok(false);
        };
        let caption = format!("👤 Profile photo of {}", name);
        self.bot
            .send_photo(&self.admin_chat(), &photo, Some(&caption))
            .await?;
        Ok(true)
    }

    /// Routes an admin reply to the user message it answers. Links are kept for further replies.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn on_admin_reply(&self, message: &Message) -> Result<()> {
        if !self.is_admin(message) {
            return Ok(());
        }
        let Some(replied_id) = message.reply_to_message_id.as_deref() else {
            return Ok(());
        };

        let Some(link) = self.router.lookup_link(replied_id) else {
            info!(replied_id = %replied_id, "Reply to unknown message");
            return self.bot.reply_to(message, MSG_NOT_CONNECTED).await;
        };

        if !message.is_text() || message.content.is_empty() {
            return Err(HandlerError::NoText.into());
        }

        self.bot
            .send_reply(
                &Chat::private(link.user_chat_id),
                &link.user_message_id,
                &message.content,
            )
            .await?;
        info!(user_chat_id = link.user_chat_id, "Admin reply delivered");
        Ok(())
    }

    /// `/block`: blocks the user behind the replied-to message. The link itself is kept.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn on_block(&self, message: &Message) -> Result<()> {
        if !self.is_admin(message) {
            debug!(user_id = message.user.id, "Ignoring /block from non-admin");
            return Ok(());
        }
        let Some(replied_id) = message.reply_to_message_id.as_deref() else {
            return self.bot.reply_to(message, MSG_BLOCK_NEEDS_REPLY).await;
        };
        let Some(link) = self.router.lookup_link(replied_id) else {
            return self.bot.reply_to(message, MSG_USER_NOT_FOUND).await;
        };

        self.router.block_user(link.user_chat_id);
        info!(user_chat_id = link.user_chat_id, "User blocked");
        self.bot.reply_to(message, MSG_USER_BLOCKED).await
    }

    /// `/close`: removes the link, then notifies the user it pointed to.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn on_close(&self, message: &Message) -> Result<()> {
        if !self.is_admin(message) {
            debug!(user_id = message.user.id, "Ignoring /close from non-admin");
            return Ok(());
        }
        let Some(replied_id) = message.reply_to_message_id.as_deref() else {
            return self.bot.reply_to(message, MSG_CLOSE_NEEDS_REPLY).await;
        };
        let Some(link) = self.router.remove_link(replied_id) else {
            return self.bot.reply_to(message, MSG_CHAT_NOT_FOUND).await;
        };

        self.bot
            .send_message(&Chat::private(link.user_chat_id), MSG_CONVERSATION_CLOSED)
            .await?;
        info!(
            user_chat_id = link.user_chat_id,
            links = self.router.link_count(),
            "Conversation closed"
        );
        self.bot.reply_to(message, MSG_CHAT_CLOSED).await
    }
}

//! Classification of inbound messages into relay events.
//!
//! - `/block` and `/close` are commands from any chat. The name is case-insensitive and ends at the
//!   first character that cannot be part of a command (`/block,` is `/block`); arguments are ignored.
//!   `/block@name` only counts when `name` is this bot. While the bot username is still unknown any
//!   `@name` is accepted. Who may run them is decided by the controller; commands are never relayed.
//! - Admin messages in a private chat are replies when they reply to something, otherwise ignored.
//! - Non-admin text messages in a private chat are relayed, including other commands such as `/start`.
//! - Everything else (non-text user messages, groups, channels) is ignored.

use relay_core::Message;

/// Admin command recognized by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    Block,
    Close,
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `s` after its leading run of command characters.
fn split_command_word(s: &str) -> (&str, &str) {
    s.split_at(s.find(|c: char| !is_command_char(c)).unwrap_or(s.len()))
}

impl AdminCommand {
    /// Parses the leading `/command` token of `text`, addressed to `bot_username` when given.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let token = text.split_whitespace().next()?;
        let (name, tail) = split_command_word(token.strip_prefix('/')?);

        if let (Some(target), Some(me)) = (tail.strip_prefix('@'), bot_username) {
            let (target, _) = split_command_word(target);
            if !target.eq_ignore_ascii_case(me) {
                return None;
            }
        }

        match name.to_ascii_lowercase().as_str() {
            "block" => Some(Self::Block),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

/// What the relay should do with one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayEvent {
    UserMessage,
    AdminReply,
    Command(AdminCommand),
    Ignored,
}

impl RelayEvent {
    pub fn classify(message: &Message, admin_id: i64, bot_username: Option<&str>) -> Self {
        if message.is_text() {
            if let Some(command) = AdminCommand::parse(&message.content, bot_username) {
                return Self::Command(command);
            }
        }

        if !message.chat.is_private() {
            return Self::Ignored;
        }

        if message.user.id == admin_id {
            return match message.reply_to_message_id {
                Some(_) => Self::AdminReply,
                None => Self::Ignored,
            };
        }

        if message.is_text() {
            Self::UserMessage
        } else {
            Self::Ignored
        }
    }
}

//! # relay_bot
//!
//! Two-way relay between anonymous users and one administrator. User messages are forwarded to the
//! admin chat tagged with the sender; admin replies are routed back through the [`ConversationRouter`].
//! The admin can `/block` a user or `/close` a conversation by replying to a forwarded message.

pub mod cli;
pub mod config;
pub mod event;
pub mod handlers;
pub mod relay;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::RelayConfig;
pub use event::{AdminCommand, RelayEvent};
pub use handlers::{LoggingHandler, RelayHandler};
pub use relay::{display_name, format_relay, RelayController};
pub use relay_core::{ConversationLink, ConversationRouter};
pub use runner::{build_handler_chain, run_relay, BotUsername};

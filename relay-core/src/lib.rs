//! # relay-core
//!
//! Core types and traits for the admin relay bot: [`Bot`], [`Handler`], message and user types,
//! the [`ConversationRouter`] that maps admin-facing messages back to user conversations,
//! and tracing initialization. Transport-agnostic; used by relay-telegram, handler-chain and relay-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod router;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use router::{ConversationLink, ConversationRouter};
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};

//! Error types for the relay core.
//!
//! [`RelayError`] is the top-level error; [`HandlerError`] is used for handler failures.
//! A missing routing link is not an error: router lookups return `Option`.

use thiserror::Error;

/// Top-level error for the relay (transport, handler, config, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;

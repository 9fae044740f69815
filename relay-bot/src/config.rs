//! Relay configuration: Telegram connection (see [`TelegramConfig`]) plus the administrator identity.
//! Loaded from env: BOT_TOKEN, ADMIN_ID, TELEGRAM_API_URL / TELOXIDE_API_URL, LOG_FILE.

use relay_core::{RelayError, Result};
use relay_telegram::TelegramConfig;
use std::env;

/// Full relay config. A missing or unparseable ADMIN_ID is fatal at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub telegram: TelegramConfig,
    /// ADMIN_ID: the only user allowed to reply, block and close.
    pub admin_id: i64,
}

impl RelayConfig {
    /// Loads from environment. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let raw = env::var("ADMIN_ID")
            .map_err(|_| RelayError::Config("ADMIN_ID not set".to_string()))?;
        let admin_id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| RelayError::Config(format!("ADMIN_ID is not an integer: {}", raw)))?;
        Ok(Self { telegram, admin_id })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        &self.telegram.log_file
    }
}

//! Entry point: init logging, validate config, assemble the handler chain and run the REPL.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::{init_tracing, Bot, ConversationRouter};
use relay_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::RelayConfig;
use crate::handlers::{LoggingHandler, RelayHandler};
use crate::relay::RelayController;

/// Shared cache of this bot's username, written by the runner once `get_me` answers.
pub type BotUsername = Arc<tokio::sync::RwLock<Option<String>>>;

/// Builds the chain (logging → relay) around a controller owning `bot` and `router`.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    router: Arc<ConversationRouter>,
    admin_id: i64,
    bot_username: BotUsername,
) -> HandlerChain {
    let controller = Arc::new(RelayController::new(bot, router, admin_id));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RelayHandler::new(controller, bot_username)))
}

/// Runs the relay until the REPL stops. Routing state lives only in this process.
#[instrument(skip(config))]
pub async fn run_relay(config: RelayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        admin_id = config.admin_id,
        telegram_api_url = ?config.telegram.telegram_api_url,
        "Initializing relay bot"
    );

    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let router = Arc::new(ConversationRouter::new());
    let bot_username: BotUsername = Arc::new(tokio::sync::RwLock::new(None));
    let handler_chain =
        build_handler_chain(bot, router, config.admin_id, bot_username.clone());

    run_repl(teloxide_bot, handler_chain, bot_username).await
}

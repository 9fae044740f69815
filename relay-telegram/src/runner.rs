//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls teloxide REPL, and get_me once to fill the bot username cache used to match `/cmd@bot`.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot, HandlerChain and bot username cache.
///
/// `get_me` runs once before the REPL and writes the bot's username into `bot_username`.
/// Each message is converted to core::Message and the chain runs to completion before the handler
/// returns, so updates from one chat are processed one at a time in delivery order. Chain errors
/// fail that event only; they are logged and the REPL keeps running.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            info!(
                username = %me.user.username.as_deref().unwrap_or("unknown"),
                "Bot is running"
            );
            *bot_username.write().await = me.user.username.clone();
        }
        Err(e) => warn!(error = %e, "get_me failed; /cmd@name will not be checked against this bot"),
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}

//! REPL runner: converts teloxide messages to core [`Message`]s and passes them
//! to the handler. Each message is handled in a spawned task so the REPL
//! returns immediately and long agent runs never block polling.

use anyhow::Result;
use dexter_core::Handler;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::to_core_message;

/// Starts the REPL with the given teloxide bot and handler.
///
/// Calls `get_me()` once before starting so the log shows which bot account is
/// live. Non-text messages are converted (with empty content) and logged but
/// still passed to the handler, which decides what to do with them.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot @{} is up and running", username);
        }
    }

    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let handler = handler.clone();

            async move {
                let core_msg = to_core_message(&msg);

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Received non-text message"
                        );
                    }
                }

                // Handle in a spawned task so the REPL returns immediately
                tokio::spawn(async move {
                    if let Err(e) = handler.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}

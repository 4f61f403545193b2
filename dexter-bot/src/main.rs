//! Binary for dexter-bot: wires the Telegram transport, the OpenAI agent, and
//! the relay handler, then runs the REPL.

use anyhow::Result;
use clap::Parser;
use dexter_agent::{Agent, OpenAiAgent};
use dexter_bot::{BotConfig, ConversationStore, RelayHandler};
use dexter_core::{init_tracing, Bot, Handler};
use dexter_telegram::{run_repl, TelegramBot};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "dexter-bot", about = "Telegram relay for the Dexter agent")]
struct Cli {
    /// Telegram bot token; overrides BOT_TOKEN from the environment.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = BotConfig::load(cli.token)?;
    init_tracing(config.log_file.as_deref())?;

    let telegram = TelegramBot::new(config.bot_token.clone());
    let repl_bot = telegram.inner();
    let bot: Arc<dyn Bot> = Arc::new(telegram);

    let agent: Arc<dyn Agent> = Arc::new(match config.openai_base_url.clone() {
        Some(base_url) => OpenAiAgent::with_base_url(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            base_url,
        ),
        None => OpenAiAgent::new(config.openai_api_key.clone(), config.openai_model.clone()),
    });

    let store = Arc::new(ConversationStore::new());
    let handler: Arc<dyn Handler> = Arc::new(RelayHandler::new(agent, bot, store));

    info!(model = %config.openai_model, "Starting dexter-bot");
    run_repl(repl_bot, handler).await
}

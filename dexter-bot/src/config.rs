//! Bot config, loaded from environment variables. Load `.env` first
//! (`dotenvy` in `main`).

use anyhow::Result;
use std::env;

const DEFAULT_MODEL: &str = "gpt-4o";

/// Full bot config: Telegram token, OpenAI access, model, log path.
pub struct BotConfig {
    pub bot_token: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from env. `token_override` (e.g. from the CLI) takes precedence
    /// over BOT_TOKEN. Required: BOT_TOKEN (or override), OPENAI_API_KEY.
    /// Optional: OPENAI_MODEL (default `gpt-4o`), OPENAI_BASE_URL, LOG_FILE.
    pub fn load(token_override: Option<String>) -> Result<Self> {
        let bot_token = match token_override {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let openai_api_key =
            env::var("OPENAI_API_KEY").map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let openai_base_url = env::var("OPENAI_BASE_URL").ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            openai_api_key,
            openai_model,
            openai_base_url,
            log_file,
        })
    }
}

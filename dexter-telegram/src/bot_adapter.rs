//! Teloxide-based implementation of [`dexter_core::Bot`].

use async_trait::async_trait;
use dexter_core::{Bot, Chat, DexterError, Result};
use teloxide::{prelude::*, types::ChatId, types::MessageId};

/// [`dexter_core::Bot`] over the Telegram Bot API via teloxide.
pub struct TelegramBot {
    bot: teloxide::Bot,
}

/// Parses a message id string into an i32. Used by edit/delete.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DexterError::Transport(format!("Invalid message_id: {}", s)))
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Returns the underlying teloxide bot (for the REPL runner).
    pub fn inner(&self) -> teloxide::Bot {
        self.bot.clone()
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| DexterError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| DexterError::Transport(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .await
            .map_err(|e| DexterError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(|e| DexterError::Transport(e.to_string()))?;
        Ok(())
    }
}

//! Bot abstraction for sending, editing, and deleting messages.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in the
//! `dexter-telegram` crate. All methods return `Err` on transport reject
//! (unmodified content, rate limit, message gone); callers decide which
//! failures to swallow.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for message delivery. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message and returns its id (for later `edit_message`/`delete_message`). `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Edits an already-sent message in place (status updates: send once, then edit).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Deletes an already-sent message. Fails if the message is already gone.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
}

//! Core types: user, chat, message, handler response, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chat (private or group) identity. `id` is the conversation key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Sender of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A single incoming message with user, chat, and text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Result of handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Message not handled (or handled asynchronously); nothing more to do now.
    Continue,
    /// Handled to completion; stop here.
    Stop,
}

/// Processes one incoming message. Implementations are shared across messages (`Arc<dyn Handler>`).
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}

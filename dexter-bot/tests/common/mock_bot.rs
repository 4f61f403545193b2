//! Mock implementation of [`dexter_core::Bot`] for integration tests.
//!
//! Records every transport call in one ordered stream so tests can assert on
//! ordering across sends, edits, and deletes without hitting Telegram.

use async_trait::async_trait;
use dexter_core::{Bot, Chat, DexterError, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded transport call, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send { chat_id: i64, text: String },
    SendWithId { chat_id: i64, text: String },
    Edit { chat_id: i64, message_id: String, text: String },
    Delete { chat_id: i64, message_id: String },
}

/// Mock Bot that records calls and returns a fixed placeholder message id.
pub struct MockBot {
    /// Fixed id returned by `send_message_and_return_id`.
    placeholder_id: String,
    calls: mpsc::UnboundedSender<BotCall>,
    fail_deletes: bool,
    fail_edits: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for recorded calls.
    /// Placeholder id is `"1"`; nothing fails.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        Self::build(false, false)
    }

    /// Like [`with_receiver`](Self::with_receiver) but every delete fails
    /// (after being recorded, so ordering is still observable).
    pub fn with_failing_deletes() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        Self::build(true, false)
    }

    /// Like [`with_receiver`](Self::with_receiver) but every edit fails.
    pub fn with_failing_edits() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        Self::build(false, true)
    }

    fn build(fail_deletes: bool, fail_edits: bool) -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                placeholder_id: "1".to_string(),
                calls: tx,
                fail_deletes,
                fail_edits,
            }),
            rx,
        )
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.calls.send(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let _ = self.calls.send(BotCall::SendWithId {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(self.placeholder_id.clone())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let _ = self.calls.send(BotCall::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        if self.fail_edits {
            return Err(DexterError::Transport("edit rejected".to_string()));
        }
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let _ = self.calls.send(BotCall::Delete {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        if self.fail_deletes {
            return Err(DexterError::Transport("message gone".to_string()));
        }
        Ok(())
    }
}

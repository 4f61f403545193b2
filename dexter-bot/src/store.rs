//! Conversation store: lookup-or-create mapping from chat id to its history.
//!
//! Process-lifetime scoped, no eviction, no size bound. Lookup/insert is safe
//! under concurrency; mutation of a history is guarded by its own lock, and in
//! practice serialized by the per-chat queue in [`crate::handler`].

use dashmap::DashMap;
use dexter_agent::ChatHistory;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Maps chat id to its [`ChatHistory`]. Repeated calls with the same id return
/// the same history instance for the process lifetime.
#[derive(Default)]
pub struct ConversationStore {
    histories: DashMap<i64, Arc<Mutex<ChatHistory>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the history for `chat_id`, creating it on first use.
    pub fn get_or_create(&self, chat_id: i64) -> Arc<Mutex<ChatHistory>> {
        self.histories
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(ChatHistory::new())))
            .clone()
    }
}

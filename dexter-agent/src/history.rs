//! In-memory conversation history: an append-only log of prior turns.
//!
//! One instance per conversation, created lazily and kept for the process
//! lifetime. Not persisted.

/// Role of a turn, one-to-one with Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single prior turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only log of turns for one conversation.
#[derive(Debug, Default)]
pub struct ChatHistory {
    turns: Vec<Turn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Clones the turns for handing to an agent run. The run never mutates
    /// the history; the caller appends the new turns only after success.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

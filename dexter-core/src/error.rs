//! Error types for the relay core.
//!
//! [`DexterError`] is the top-level error; transport rejects and agent
//! failures are separate variants so callers can decide what to swallow.

use thiserror::Error;

/// Top-level error (transport, agent, config, IO).
#[derive(Error, Debug)]
pub enum DexterError {
    /// The chat transport rejected a send/edit/delete (unmodified content, rate limit, message gone).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Agent construction or stream production failed.
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`DexterError`].
pub type Result<T> = std::result::Result<T, DexterError>;

//! # dexter-agent
//!
//! Agent surface consumed by the relay: the [`AgentEvent`] stream produced by
//! one agent run, the append-only [`ChatHistory`], and the OpenAI-backed
//! [`OpenAiAgent`]. The relay never sees agent internals, only events.

mod event;
mod history;
mod openai;

pub use event::{Agent, AgentEvent, EventStream};
pub use history::{ChatHistory, Role, Turn};
pub use openai::OpenAiAgent;

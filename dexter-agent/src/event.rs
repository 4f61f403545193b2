//! Agent event stream: one run produces a finite, in-order sequence of events
//! over an unbounded channel, terminated by exactly one `Done` in a
//! well-formed run. Errors ride in-band so stream failures reach the consumer.

use crate::history::Turn;
use dexter_core::Result;
use tokio::sync::mpsc;

/// One event from an in-flight agent run.
///
/// The set of non-terminal variants is open; consumers must ignore variants
/// they do not recognize instead of failing.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    /// Intermediate reasoning note.
    Thinking { message: String },
    /// A tool invocation has begun.
    ToolStart { tool: String },
    /// A tool invocation has finished.
    ToolEnd { tool: String },
    /// Terminal event carrying the final answer. Nothing is produced after it.
    Done { answer: String },
}

/// Receiving end of one agent run. Finite and not restartable.
pub type EventStream = mpsc::UnboundedReceiver<Result<AgentEvent>>;

/// Produces event streams for user inputs. Constructed once and shared
/// (`Arc<dyn Agent>`); each call opens a fresh run.
pub trait Agent: Send + Sync {
    /// Opens a run for `input` against a snapshot of the conversation history.
    /// The returned stream yields events until the run ends.
    fn open_stream(&self, input: &str, history: Vec<Turn>) -> EventStream;
}

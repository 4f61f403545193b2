//! Stream consumer: drives one agent run to exhaustion, feeding status
//! candidates to the [`StatusProjector`] and capturing the final answer.

use crate::status::StatusProjector;
use dexter_agent::{AgentEvent, EventStream};
use dexter_core::Result;
use tracing::debug;

/// Consumes `events` until the stream ends. `Thinking`/`ToolStart` become
/// throttled status candidates; `Done` is captured and not projected (the
/// session is about to be retired); unrecognized variants are ignored.
///
/// A stream ending without `Done` yields `Ok("")` — degraded but non-fatal;
/// the finalizer delivers the empty answer. An `Err` item (agent failure)
/// propagates to the caller's error path.
pub async fn consume_stream(
    mut events: EventStream,
    projector: &mut StatusProjector,
) -> Result<String> {
    let mut final_answer = String::new();
    while let Some(event) = events.recv().await {
        match event? {
            AgentEvent::Thinking { message } => {
                projector
                    .maybe_update(&format!("Thinking: {}...", message), false)
                    .await;
            }
            AgentEvent::ToolStart { tool } => {
                projector
                    .maybe_update(&format!("Using tool: {}...", tool), false)
                    .await;
            }
            AgentEvent::Done { answer } => {
                final_answer = answer;
            }
            other => {
                debug!(event = ?other, "Ignoring unrecognized agent event");
            }
        }
    }
    Ok(final_answer)
}

//! Test agents: a scripted event producer and a delayed echo agent.

use dexter_agent::{Agent, AgentEvent, EventStream, Turn};
use dexter_core::Result;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

/// Agent that replays pre-scripted event sequences, one script per run.
/// Runs beyond the scripted ones yield an empty stream.
pub struct ScriptedAgent {
    scripts: Mutex<VecDeque<Vec<Result<AgentEvent>>>>,
}

impl ScriptedAgent {
    pub fn new(script: Vec<Result<AgentEvent>>) -> Self {
        Self::with_scripts(vec![script])
    }

    pub fn with_scripts(scripts: Vec<Vec<Result<AgentEvent>>>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
        }
    }
}

impl Agent for ScriptedAgent {
    fn open_stream(&self, _input: &str, _history: Vec<Turn>) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default();
        tokio::spawn(async move {
            for event in script {
                let _ = tx.send(event);
            }
        });
        rx
    }
}

/// Agent that answers `echo: {input}` after an optional delay.
pub struct EchoAgent {
    delay_ms: u64,
}

impl EchoAgent {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Agent for EchoAgent {
    fn open_stream(&self, input: &str, _history: Vec<Turn>) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let input = input.to_string();
        let delay = self.delay_ms;
        tokio::spawn(async move {
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            let _ = tx.send(Ok(AgentEvent::Done {
                answer: format!("echo: {}", input),
            }));
        });
        rx
    }
}

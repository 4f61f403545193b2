//! Status projector: throttled edit-in-place of the one status message per
//! in-flight request.
//!
//! Policy: a candidate equal to the displayed text is skipped; a differing
//! candidate is pushed when forced or when the throttle window has elapsed,
//! and dropped otherwise. Dropped candidates are never retried later; the next
//! event gets a fresh chance (lossy sampling keeps the UI on the latest known
//! state instead of replaying history). A failed push is logged and swallowed
//! with `last_text`/`last_push` unchanged, so the same candidate can win a
//! later window.

use dexter_core::{Bot, Chat};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Minimum time between consecutive status edits. Bounds the rate of edit
/// calls; Telegram rejects rapid edit bursts.
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Time source for throttle decisions. Injected so tests control elapsed time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock [`Clock`] used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Per-request status session: the status message identity, the last text
/// displayed, and the time of the last successful push. Constructed fresh
/// when the status message is posted; never shared across requests.
pub struct StatusProjector {
    bot: Arc<dyn Bot>,
    chat: Chat,
    message_id: String,
    last_text: String,
    last_push: Instant,
    clock: Arc<dyn Clock>,
}

impl StatusProjector {
    /// Creates a session for an already-posted status message showing
    /// `initial_text`. The throttle window starts now.
    pub fn new(
        bot: Arc<dyn Bot>,
        chat: Chat,
        message_id: String,
        initial_text: &str,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let last_push = clock.now();
        Self {
            bot,
            chat,
            message_id,
            last_text: initial_text.to_string(),
            last_push,
            clock,
        }
    }

    /// Pushes `candidate` to the transport if it differs from the displayed
    /// text and either `force` is set or the throttle window has elapsed.
    pub async fn maybe_update(&mut self, candidate: &str, force: bool) {
        if candidate == self.last_text {
            return;
        }
        let now = self.clock.now();
        if !force && now.duration_since(self.last_push) <= THROTTLE_INTERVAL {
            debug!(candidate = %candidate, "Status update dropped by throttle");
            return;
        }
        match self
            .bot
            .edit_message(&self.chat, &self.message_id, candidate)
            .await
        {
            Ok(()) => {
                self.last_text = candidate.to_string();
                self.last_push = now;
            }
            Err(e) => {
                error!(error = %e, chat_id = self.chat.id, "Failed to edit status message");
            }
        }
    }
}

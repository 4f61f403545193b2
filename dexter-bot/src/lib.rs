//! # dexter-bot
//!
//! Relays a Telegram message stream to the Dexter agent and projects the
//! agent's incremental progress onto one throttled, edit-in-place status
//! message, followed by the final answer (chunked under the transport limit).
//!
//! **Data flow:** `RelayHandler::handle` → enqueue per chat →
//! `process_queue_loop` consumes serially → `process_message`
//! (post status → open agent stream → [`consume_stream`] feeds the
//! [`StatusProjector`] → [`finalize`] deletes status and delivers the answer).

pub mod config;
pub mod finalize;
pub mod handler;
pub mod relay;
pub mod status;
pub mod store;

pub use config::BotConfig;
pub use finalize::{finalize, split_chunks, MAX_CHUNK_CHARS};
pub use handler::RelayHandler;
pub use relay::consume_stream;
pub use status::{Clock, StatusProjector, SystemClock, THROTTLE_INTERVAL};
pub use store::ConversationStore;

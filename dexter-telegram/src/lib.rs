//! # dexter-telegram
//!
//! Telegram layer: the [`dexter_core::Bot`] implementation over teloxide,
//! teloxide-to-core type adapters, and the REPL runner. Handles only Telegram
//! connectivity; no agent or relay logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{to_core_message, to_core_user};
pub use bot_adapter::{parse_message_id, TelegramBot};
pub use runner::run_repl;

//! # dexter-core
//!
//! Transport-agnostic core for the Dexter relay bot: the [`Bot`] transport
//! trait, the [`Handler`] trait, the message model, error types, and tracing
//! initialization. No Telegram or OpenAI code lives here.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DexterError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, User};

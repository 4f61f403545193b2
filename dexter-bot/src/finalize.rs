//! Delivery finalizer: retires the status message and delivers the final
//! answer, splitting it when it exceeds the transport size limit.

use dexter_core::{Bot, Chat, Result};
use std::sync::Arc;
use tracing::error;

/// Max characters per delivered message. Telegram's ceiling is 4096; 4000
/// leaves a safety margin. Do not tighten to the exact limit.
pub const MAX_CHUNK_CHARS: usize = 4000;

/// Splits `answer` into consecutive chunks of at most [`MAX_CHUNK_CHARS`]
/// characters (fixed-width, not word-aware). An answer that fits, including
/// the empty one, is a single chunk.
pub fn split_chunks(answer: &str) -> Vec<String> {
    if answer.chars().count() <= MAX_CHUNK_CHARS {
        return vec![answer.to_string()];
    }
    let chars: Vec<char> = answer.chars().collect();
    chars
        .chunks(MAX_CHUNK_CHARS)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Retires the status message, then delivers `final_answer` in order.
///
/// The delete is always attempted first; its failure is logged and never
/// blocks delivery. A send failure propagates to the caller's error path.
pub async fn finalize(
    bot: &Arc<dyn Bot>,
    chat: &Chat,
    status_message_id: &str,
    final_answer: &str,
) -> Result<()> {
    if let Err(e) = bot.delete_message(chat, status_message_id).await {
        error!(error = %e, chat_id = chat.id, "Failed to delete status message");
    }
    for chunk in split_chunks(final_answer) {
        bot.send_message(chat, &chunk).await?;
    }
    Ok(())
}

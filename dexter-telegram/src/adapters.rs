//! Adapters from teloxide types to dexter_core types.

use dexter_core::{Chat, Message, User};

/// Converts a teloxide user to core [`User`].
pub fn to_core_user(user: &teloxide::types::User) -> User {
    User {
        id: user.id.0 as i64,
        username: user.username.clone(),
        first_name: Some(user.first_name.clone()),
        last_name: user.last_name.clone(),
    }
}

/// Converts a teloxide message to core [`Message`]. Non-text messages yield empty content.
pub fn to_core_message(msg: &teloxide::types::Message) -> Message {
    Message {
        id: msg.id.to_string(),
        user: msg.from.as_ref().map(to_core_user).unwrap_or(User {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }),
        chat: Chat {
            id: msg.chat.id.0,
            chat_type: format!("{:?}", msg.chat.kind),
        },
        content: msg.text().unwrap_or("").to_string(),
        created_at: chrono::Utc::now(),
    }
}

//! Shared test fixtures: recording mock bot, scripted/echo agents, manual clock.
#![allow(dead_code)] // not every test binary uses every fixture

pub mod mock_bot;
pub mod scripted_agent;

use dexter_bot::Clock;
use dexter_core::{Chat, Message, User};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Clock advanced manually by tests; drives the status throttle.
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    pub fn advance(&self, d: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += d;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// Creates a test message with the given chat_id and content.
pub fn test_message(chat_id: i64, user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", user_id),
        user: User {
            id: user_id,
            username: Some(format!("user_{}", user_id)),
            first_name: Some(format!("User{}", user_id)),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: chrono::Utc::now(),
    }
}

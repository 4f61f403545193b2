//! Relay handler: top of the request state machine
//! (`Idle → StatusPosted → Streaming → Finalized`, with `ErrorNotified`
//! absorbing failures from the posted/streaming states).
//!
//! Messages are queued per chat and processed serially, so one conversation's
//! history is only ever touched by one in-flight request; different chats run
//! concurrently. No retries anywhere: every failure is either swallowed with a
//! log or ends the request with the generic error notice.

use crate::finalize::finalize;
use crate::relay::consume_stream;
use crate::status::{Clock, StatusProjector, SystemClock};
use crate::store::ConversationStore;
use async_trait::async_trait;
use dexter_agent::Agent;
use dexter_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

// ---------- User-facing messages (shown in Telegram) ----------

/// Initial status text posted before the agent stream is opened.
const STATUS_INITIAL: &str = "Thinking...";
/// Reply to /start.
const MSG_WELCOME: &str = "Welcome! I am Dexter, your AI agent. How can I help you today?";
/// Shown when even the status message could not be posted.
const MSG_SEND_FAILED: &str = "Failed to send a reply, please try again later.";
/// Generic error notice; replaces the status message on unrecovered failure.
const MSG_PROCESSING_FAILED: &str = "An error occurred while processing your request.";

/// Sender to the per-chat processing queue.
type QueueSender = mpsc::UnboundedSender<Message>;

/// **Entry point.** Handles every incoming text message: posts a status
/// message, relays the agent's event stream onto it, then delivers the final
/// answer. Implements [`Handler`]; incoming messages are queued per chat and
/// processed serially.
pub struct RelayHandler {
    agent: Arc<dyn Agent>,
    bot: Arc<dyn Bot>,
    store: Arc<ConversationStore>,
    clock: Arc<dyn Clock>,
    message_queues: dashmap::DashMap<i64, QueueSender>,
}

impl RelayHandler {
    /// Creates a handler with the wall clock.
    pub fn new(agent: Arc<dyn Agent>, bot: Arc<dyn Bot>, store: Arc<ConversationStore>) -> Self {
        Self::with_clock(agent, bot, store, Arc::new(SystemClock))
    }

    /// Creates a handler with an injected clock (tests drive the throttle).
    pub fn with_clock(
        agent: Arc<dyn Agent>,
        bot: Arc<dyn Bot>,
        store: Arc<ConversationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            agent,
            bot,
            store,
            clock,
            message_queues: dashmap::DashMap::new(),
        }
    }

    fn get_or_create_queue(&self, chat_id: i64) -> QueueSender {
        let (tx, rx) = mpsc::unbounded_channel::<Message>();
        let agent = self.agent.clone();
        let bot = self.bot.clone();
        let store = self.store.clone();
        let clock = self.clock.clone();
        tokio::spawn(Self::process_queue_loop(rx, agent, bot, store, clock, chat_id));
        tx
    }

    /// Consumes the per-chat queue and processes each message in turn.
    async fn process_queue_loop(
        mut rx: mpsc::UnboundedReceiver<Message>,
        agent: Arc<dyn Agent>,
        bot: Arc<dyn Bot>,
        store: Arc<ConversationStore>,
        clock: Arc<dyn Clock>,
        chat_id: i64,
    ) {
        while let Some(message) = rx.recv().await {
            info!(
                user_id = message.user.id,
                chat_id = chat_id,
                "Processing queued message"
            );
            if let Err(e) = Self::process_message(&agent, &bot, &store, &clock, &message).await {
                error!(error = %e, chat_id = chat_id, "Failed to process queued message");
            }
        }
    }

    /// One request: post status, stream, finalize; on any unrecovered failure
    /// replace the status message with the generic error notice. The history
    /// is appended to only after a fully successful turn.
    async fn process_message(
        agent: &Arc<dyn Agent>,
        bot: &Arc<dyn Bot>,
        store: &Arc<ConversationStore>,
        clock: &Arc<dyn Clock>,
        message: &Message,
    ) -> Result<()> {
        let chat = &message.chat;

        // Idle → StatusPosted
        let status_id = match bot.send_message_and_return_id(chat, STATUS_INITIAL).await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, chat_id = chat.id, "Failed to post status message");
                let _ = bot.send_message(chat, MSG_SEND_FAILED).await;
                return Ok(());
            }
        };
        let mut projector = StatusProjector::new(
            bot.clone(),
            chat.clone(),
            status_id.clone(),
            STATUS_INITIAL,
            clock.clone(),
        );

        let history = store.get_or_create(chat.id);
        let snapshot = history.lock().await.snapshot();

        // StatusPosted → Streaming → Finalized
        let events = agent.open_stream(&message.content, snapshot);
        let outcome: Result<String> = async {
            let answer = consume_stream(events, &mut projector).await?;
            finalize(bot, chat, &status_id, &answer).await?;
            Ok(answer)
        }
        .await;

        match outcome {
            Ok(answer) => {
                let mut history = history.lock().await;
                history.push_user(&message.content);
                history.push_assistant(&answer);
                info!(
                    chat_id = chat.id,
                    answer_len = answer.len(),
                    "Request finalized"
                );
                Ok(())
            }
            Err(e) => {
                // ErrorNotified: best-effort edit; the session is discarded
                // whether or not the edit succeeds.
                error!(error = %e, chat_id = chat.id, "Request failed");
                if let Err(edit_err) = bot.edit_message(chat, &status_id, MSG_PROCESSING_FAILED).await
                {
                    error!(error = %edit_err, chat_id = chat.id, "Failed to post error notice");
                }
                Ok(())
            }
        }
    }
}

/// **Entry point.** Called for each incoming message. `/start` gets the fixed
/// welcome; any other non-empty text is queued per chat and returns
/// immediately.
#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        if message.content.trim() == "/start" {
            self.bot.send_message(&message.chat, MSG_WELCOME).await?;
            return Ok(HandlerResponse::Stop);
        }

        let chat_id = message.chat.id;
        let tx = self
            .message_queues
            .entry(chat_id)
            .or_insert_with(|| self.get_or_create_queue(chat_id))
            .clone();

        if tx.send(message.clone()).is_err() {
            error!(chat_id = chat_id, "Failed to queue message (receiver dropped)");
            return Ok(HandlerResponse::Stop);
        }

        Ok(HandlerResponse::Continue)
    }
}

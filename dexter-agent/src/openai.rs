//! OpenAI-backed [`Agent`]: one chat completion per run.
//!
//! `open_stream` spawns the producing task and returns the receiver, so the
//! caller suspends only when awaiting the next event. The run emits one
//! `Thinking` note, performs the completion over system + history + input,
//! then `Done` with the reply (or an in-band error on API failure).

use crate::event::{Agent, AgentEvent, EventStream};
use crate::history::{Role, Turn};
use async_openai::{
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use dexter_core::DexterError;
use tokio::sync::mpsc;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are Dexter, a helpful AI agent.";

/// Agent backed by the OpenAI Chat Completions API.
#[derive(Clone)]
pub struct OpenAiAgent {
    client: Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl OpenAiAgent {
    /// Creates an agent with the given API key and model (e.g. `gpt-4o`).
    pub fn new(api_key: String, model: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model,
        }
    }

    /// Creates an agent against a custom API base URL (proxies, compatible servers).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model,
        }
    }

    /// Builds the request message list: system prompt, prior turns, then the new input.
    fn build_messages(
        history: &[Turn],
        input: &str,
    ) -> anyhow::Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(history.len() + 2);
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()?
                .into(),
        );
        for turn in history {
            match turn.role {
                Role::User => messages.push(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(turn.content.clone())
                        .build()?
                        .into(),
                ),
                Role::Assistant => messages.push(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(turn.content.clone())
                        .build()?
                        .into(),
                ),
            }
        }
        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(input.to_string())
                .build()?
                .into(),
        );
        Ok(messages)
    }

    async fn complete(
        client: Client<async_openai::config::OpenAIConfig>,
        model: String,
        history: Vec<Turn>,
        input: String,
    ) -> anyhow::Result<String> {
        let messages = Self::build_messages(&history, &input)?;
        debug!(model = %model, message_count = messages.len(), "Chat completion request");
        let request = CreateChatCompletionRequestArgs::default()
            .model(&model)
            .messages(messages)
            .build()?;
        let response = client.chat().create(request).await?;
        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No choices in completion response"),
        }
    }
}

impl Agent for OpenAiAgent {
    fn open_stream(&self, input: &str, history: Vec<Turn>) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = self.client.clone();
        let model = self.model.clone();
        let input = input.to_string();
        tokio::spawn(async move {
            let _ = tx.send(Ok(AgentEvent::Thinking {
                message: "calling the model".to_string(),
            }));
            match Self::complete(client, model, history, input).await {
                Ok(answer) => {
                    let _ = tx.send(Ok(AgentEvent::Done { answer }));
                }
                Err(e) => {
                    let _ = tx.send(Err(DexterError::Agent(e.to_string())));
                }
            }
        });
        rx
    }
}

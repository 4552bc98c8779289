use crate::types::{ChatMessage, Role};
use anyhow::Result;
use once_cell::sync::Lazy;
use rig::client::CompletionClient;
use rig::completion::Chat;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::prompt::{SYSTEM_PROMPT, message_prompt};
use super::providers::{ProviderClient, WireMessage};

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChatError(String);

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ChatError {}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::new(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Streaming State Management
// ============================================

static STREAM_STORE: Lazy<StreamStore> = Lazy::new(StreamStore::default);

struct StreamStore {
    counter: AtomicU64,
    entries: Mutex<HashMap<u64, StreamEntry>>,
}

impl Default for StreamStore {
    fn default() -> Self {
        Self {
            counter: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Default)]
struct StreamEntry {
    buffer: String,
    done: bool,
    error: Option<String>,
}

impl StreamStore {
    fn create_handle(&self) -> StreamHandle {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries.lock().expect("stream store poisoned");
        entries.insert(id, StreamEntry::default());
        StreamHandle { id }
    }

    fn append(&self, id: u64, chunk: &str) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.buffer.push_str(chunk);
        }
    }

    fn finish(&self, id: u64) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.done = true;
        }
    }

    fn fail(&self, id: u64, message: String) {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        if let Some(entry) = entries.get_mut(&id) {
            entry.error = Some(message);
            entry.done = true;
        }
    }

    /// Current text and completion flag. A failed stream reports its error
    /// once and is then forgotten; finished streams are dropped on the read
    /// that observes `done`.
    fn snapshot(&self, id: u64) -> ChatResult<(String, bool)> {
        let mut entries = self.entries.lock().expect("stream store poisoned");
        let Some(entry) = entries.get(&id) else {
            return Err(ChatError::new("invalid stream id"));
        };

        if let Some(message) = entry.error.clone() {
            entries.remove(&id);
            return Err(ChatError::new(message));
        }

        let snapshot = (entry.buffer.clone(), entry.done);
        if snapshot.1 {
            entries.remove(&id);
        }
        Ok(snapshot)
    }
}

#[derive(Clone)]
pub struct StreamHandle {
    id: u64,
}

impl StreamHandle {
    /// Registers a new, empty stream.
    pub fn open() -> Self {
        STREAM_STORE.create_handle()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn append(&self, piece: &str) {
        STREAM_STORE.append(self.id, piece);
    }

    pub fn finish(&self) {
        STREAM_STORE.finish(self.id);
    }

    pub fn fail(&self, err: &str) {
        STREAM_STORE.fail(self.id, err.to_string());
    }
}

/// Chat client for the JSON generator, wrapping whichever provider the
/// environment selects.
pub struct JsonSmithAI {
    client: ProviderClient,
}

impl JsonSmithAI {
    /// Create AI client from environment configuration
    pub fn from_env() -> Result<Self> {
        let client = ProviderClient::from_env()?;
        tracing::info!(provider = client.name(), "chat provider configured");
        Ok(Self { client })
    }

    /// Chat with conversation history (non-streaming, multi-turn)
    pub async fn chat(&self, message: &str, history: Vec<ChatMessage>) -> Result<String> {
        match &self.client {
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(SYSTEM_PROMPT)
                    .max_tokens(4096)
                    .temperature(0.4)
                    .build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(SYSTEM_PROMPT)
                    .max_tokens(4096)
                    .temperature(0.4)
                    .build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client.agent(&model).preamble(SYSTEM_PROMPT).build();

                Ok(agent.chat(message, to_rig_messages(history)).await?)
            }
            ProviderClient::Endpoint(client) => {
                let mut messages = vec![WireMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                }];
                messages.extend(history.iter().map(to_wire_message));
                messages.push(WireMessage {
                    role: "user",
                    content: message.to_string(),
                });

                client.complete(&messages).await
            }
        }
    }
}

fn to_rig_messages(messages: Vec<ChatMessage>) -> Vec<rig::message::Message> {
    messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => rig::message::Message::user(message_prompt(msg)),
            Role::Assistant => rig::message::Message::assistant(&msg.content),
        })
        .collect()
}

fn to_wire_message(msg: &ChatMessage) -> WireMessage {
    match msg.role {
        Role::User => WireMessage {
            role: "user",
            content: message_prompt(msg),
        },
        Role::Assistant => WireMessage {
            role: "assistant",
            content: msg.content.clone(),
        },
    }
}

// ============================================
// Public API Functions
// ============================================

/// Sends the conversation and waits for the whole reply. The last message
/// is the prompt; everything before it is history.
pub async fn chat_reply(messages: Vec<ChatMessage>) -> ChatResult<String> {
    let Some((last_message, history)) = messages.split_last() else {
        return Err(ChatError::new("No messages provided"));
    };

    let ai = JsonSmithAI::from_env()
        .map_err(|e| ChatError::new(format!("Failed to initialize AI: {}", e)))?;

    ai.chat(&message_prompt(last_message), history.to_vec())
        .await
        .map_err(|e| ChatError::new(format!("Chat error: {}", e)))
}

/// Start streaming chat response
pub async fn chat_reply_stream_start(messages: Vec<ChatMessage>) -> ChatResult<u64> {
    if messages.is_empty() {
        return Err(ChatError::new("No messages provided"));
    }

    let handle = StreamHandle::open();
    let id = handle.id();

    crate::runtime::spawn_detached(async move {
        match chat_reply(messages).await {
            Ok(response) => {
                handle.append(&response);
                handle.finish();
            }
            Err(err) => {
                tracing::warn!(%err, stream = handle.id(), "chat request failed");
                handle.fail(&err.to_string());
            }
        }
    });

    Ok(id)
}

/// Poll streaming chat status
pub async fn chat_reply_stream_poll(id: u64) -> ChatResult<(String, bool)> {
    STREAM_STORE.snapshot(id)
}

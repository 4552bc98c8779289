//! Chat transport for the JSON generator.
//!
//! This module provides a unified interface for LLM interactions using the Rig framework.
//! It supports a plain JSON endpoint plus OpenAI, Anthropic and Ollama, selected from
//! environment variables.
//!
//! # Architecture
//!
//! - `client` - `JsonSmithAI` client and the polled stream store
//! - `prompt` - system prompt and attachment folding
//! - `providers` - provider selection and the custom endpoint client
//!
//! # Usage
//!
//! ```rust,no_run
//! use jsonsmith::ai::chat_reply;
//! use jsonsmith::types::ChatMessage;
//!
//! # async fn example() -> Result<(), jsonsmith::ai::ChatError> {
//! let reply = chat_reply(vec![ChatMessage::user("A product with a price", Vec::new())]).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod prompt;
mod providers;

// Re-export main types
pub use client::{
    ChatError, ChatResult, JsonSmithAI, StreamHandle, chat_reply, chat_reply_stream_poll,
    chat_reply_stream_start,
};
pub use providers::{ENDPOINT_VAR, EndpointClient, ProviderClient, WireMessage};

pub mod endpoint;

use anyhow::Result;
use rig::providers;
use std::env;

pub use endpoint::{EndpointClient, WireMessage};

pub const ENDPOINT_VAR: &str = "JSONSMITH_ENDPOINT";

/// Enum to hold different provider clients
pub enum ProviderClient {
    OpenAI(providers::openai::Client),
    Anthropic(providers::anthropic::Client),
    Ollama(providers::ollama::Client),
    Endpoint(EndpointClient),
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> Result<Self> {
        // Priority order:
        // 1. JSONSMITH_ENDPOINT → plain JSON endpoint
        // 2. OPENAI_API_KEY → OpenAI
        // 3. ANTHROPIC_API_KEY → Claude
        // 4. LLM_USE_OLLAMA=true → Ollama

        if let Ok(endpoint) = env::var(ENDPOINT_VAR) {
            let model = env::var("JSONSMITH_MODEL").ok();
            let api_key = env::var("JSONSMITH_API_KEY").ok();
            tracing::debug!(%endpoint, "using custom chat endpoint");
            return Ok(Self::Endpoint(EndpointClient::new(endpoint, model, api_key)));
        }

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            return Ok(Self::Anthropic(providers::anthropic::Client::new(&key)));
        }

        if is_truthy(&env::var("LLM_USE_OLLAMA").unwrap_or_default()) {
            // OLLAMA_HOST is read by the Rig client (defaults to http://localhost:11434)
            return Ok(Self::Ollama(providers::ollama::Client::new()));
        }

        Err(anyhow::anyhow!(
            "No AI provider configured. Set JSONSMITH_ENDPOINT, OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
        ))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderClient::OpenAI(_) => "openai",
            ProviderClient::Anthropic(_) => "anthropic",
            ProviderClient::Ollama(_) => "ollama",
            ProviderClient::Endpoint(_) => "endpoint",
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Client for a plain JSON chat endpoint.
///
/// Request body: `{ "model": ..., "messages": [{ "role", "content" }] }`.
/// Accepts an OpenAI-shaped reply, a `{ "content": ... }` reply, or falls
/// back to the raw body.
pub struct EndpointClient {
    client: reqwest::Client,
    endpoint: String,
    model: Option<String>,
    api_key: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct ReplyChoice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct OpenAIShapedReply {
    choices: Vec<ReplyChoice>,
}

#[derive(Deserialize)]
struct ContentOnlyReply {
    content: String,
}

#[derive(Serialize)]
struct EndpointRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: &'a [WireMessage],
}

impl EndpointClient {
    pub fn new(endpoint: String, model: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub async fn complete(&self, messages: &[WireMessage]) -> Result<String> {
        let mut request = self.client.post(&self.endpoint).json(&EndpointRequest {
            model: self.model.as_deref(),
            messages,
        });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("chat endpoint error {}: {}", status, body));
        }

        Ok(parse_reply(body))
    }
}

fn parse_reply(body: String) -> String {
    if let Ok(parsed) = serde_json::from_str::<OpenAIShapedReply>(&body)
        && let Some(choice) = parsed.choices.into_iter().next()
        && let Some(msg) = choice.message
    {
        return msg.content;
    }

    if let Ok(parsed) = serde_json::from_str::<ContentOnlyReply>(&body) {
        return parsed.content;
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_openai_shape() {
        let body = r#"{"choices":[{"message":{"content":"{\"a\":1}"}}]}"#;
        assert_eq!(parse_reply(body.to_string()), r#"{"a":1}"#);
    }

    #[test]
    fn parses_content_only() {
        assert_eq!(parse_reply(r#"{"content":"hi"}"#.to_string()), "hi");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(parse_reply("plain text".to_string()), "plain text");
    }
}

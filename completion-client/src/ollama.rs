//! Ollama chat client for a local, no-auth server.

use std::time::Duration;

use async_trait::async_trait;
use marco_core::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::CompletionClient;

/// Client for a local Ollama server. Sends `{model, messages, stream: false}` with no
/// auth and reads the reply from `message.content`.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    api_url: String,
    model: String,
}

impl OllamaClient {
    pub fn from_config(config: &CompletionConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: Option<OllamaMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: Option<String>,
}

fn extract_reply(body: &str) -> Result<String, CompletionError> {
    let response: OllamaChatResponse = serde_json::from_str(body)?;
    response
        .message
        .and_then(|message| message.content)
        .ok_or(CompletionError::MissingContent)
}

#[async_trait]
impl CompletionClient for OllamaClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        info!(
            model = %self.model,
            message_count = messages.len(),
            "Ollama chat request"
        );

        // Non-streaming mode: Ollama answers with a single JSON document.
        let request = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let body = response.text().await?;
        let reply = extract_reply(&body)?;

        info!(reply_len = reply.len(), "Ollama chat done");
        Ok(reply)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_reply_from_message() {
        let body = r#"{
            "model": "llama3.2",
            "message": {"role": "assistant", "content": "Essayez Porto hors saison."},
            "done": true
        }"#;
        assert_eq!(extract_reply(body).unwrap(), "Essayez Porto hors saison.");
    }

    #[test]
    fn missing_message_is_missing_content() {
        let body = r#"{"model": "llama3.2", "done": true}"#;
        assert!(matches!(
            extract_reply(body),
            Err(CompletionError::MissingContent)
        ));
    }

    #[test]
    fn request_sets_stream_false() {
        let messages = vec![ChatMessage::user("Bonjour")];
        let request = OllamaChatRequest {
            model: "llama3.2",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}

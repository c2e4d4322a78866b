//! Groq chat-completion client (OpenAI-compatible wire format).

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use marco_core::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::{mask_token, CompletionClient};

/// Client for the hosted Groq endpoint. Sends `{model, messages, max_tokens}` with a
/// bearer token and reads the reply from `choices[0].message.content`.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl GroqClient {
    /// Builds a client from config. Fails when no API key is configured or the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &CompletionConfig) -> anyhow::Result<Self> {
        let api_key = config.api_key.clone().context("GROQ_API_KEY not set")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn extract_reply(body: &str) -> Result<String, CompletionError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::MissingContent)
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        info!(
            model = %self.model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            "Groq chat completion request"
        );

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        info!(reply_len = reply.len(), "Groq chat completion done");
        Ok(reply)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

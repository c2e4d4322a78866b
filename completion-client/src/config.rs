//! Completion endpoint config: provider choice, URL, model, credentials. Loaded from env.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

use crate::{CompletionClient, GroqClient, OllamaClient};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const GROQ_TIMEOUT_SECS: u64 = 30;

const OLLAMA_API_URL: &str = "http://localhost:11434/api/chat";
const OLLAMA_MODEL: &str = "llama3.2";
const OLLAMA_TIMEOUT_SECS: u64 = 60;

const DEFAULT_MAX_TOKENS: u32 = 300;

/// Which completion backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Hosted OpenAI-compatible endpoint, bearer-token auth.
    Groq,
    /// Local Ollama server, no auth.
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::Ollama => "ollama",
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "ollama" => Ok(Provider::Ollama),
            other => anyhow::bail!("unknown LLM provider: {} (expected groq or ollama)", other),
        }
    }
}

/// Completion endpoint config: provider, URL, model, token budget, timeout.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// LLM_PROVIDER (`groq` or `ollama`)
    pub provider: Provider,
    /// GROQ_API_KEY; only required for the hosted provider
    pub api_key: Option<String>,
    /// GROQ_API_URL or OLLAMA_API_URL
    pub api_url: String,
    /// MODEL
    pub model: String,
    /// MAX_TOKENS cap on each reply
    pub max_tokens: u32,
    /// LLM_TIMEOUT_SECS per-request timeout
    pub timeout_secs: u64,
}

impl CompletionConfig {
    /// Load from environment variables. Unset variables fall back to per-provider
    /// defaults; the hosted provider requires GROQ_API_KEY.
    pub fn from_env() -> Result<Self> {
        let provider = match env::var("LLM_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => Provider::Groq,
        };

        let (default_url, default_model, default_timeout) = match provider {
            Provider::Groq => (GROQ_API_URL, GROQ_MODEL, GROQ_TIMEOUT_SECS),
            Provider::Ollama => (OLLAMA_API_URL, OLLAMA_MODEL, OLLAMA_TIMEOUT_SECS),
        };

        let api_key = match provider {
            Provider::Groq => Some(env::var("GROQ_API_KEY").context("GROQ_API_KEY not set")?),
            Provider::Ollama => None,
        };

        let api_url = match provider {
            Provider::Groq => env::var("GROQ_API_URL"),
            Provider::Ollama => env::var("OLLAMA_API_URL"),
        }
        .unwrap_or_else(|_| default_url.to_string());

        let model = env::var("MODEL").unwrap_or_else(|_| default_model.to_string());
        let max_tokens = env::var("MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_timeout);

        let config = Self {
            provider,
            api_key,
            api_url,
            model,
            max_tokens,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config (api_url must be a valid URL).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("completion endpoint URL is not valid: {}", self.api_url);
        }
        Ok(())
    }
}

/// Builds the client matching the configured provider.
pub fn build_client(config: &CompletionConfig) -> Result<Box<dyn CompletionClient>> {
    info!(
        provider = config.provider.as_str(),
        model = %config.model,
        "building completion client"
    );
    let client: Box<dyn CompletionClient> = match config.provider {
        Provider::Groq => Box::new(GroqClient::from_config(config)?),
        Provider::Ollama => Box::new(OllamaClient::from_config(config)?),
    };
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("groq".parse::<Provider>().unwrap(), Provider::Groq);
        assert_eq!("Ollama".parse::<Provider>().unwrap(), Provider::Ollama);
        assert!("claude".parse::<Provider>().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = CompletionConfig {
            provider: Provider::Ollama,
            api_key: None,
            api_url: "not a url".to_string(),
            model: OLLAMA_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: OLLAMA_TIMEOUT_SECS,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn provider_as_str_matches_env_values() {
        assert_eq!(Provider::Groq.as_str(), "groq");
        assert_eq!(Provider::Ollama.as_str(), "ollama");
        assert_eq!(
            Provider::Groq.as_str().parse::<Provider>().unwrap(),
            Provider::Groq
        );
    }

    #[test]
    fn build_client_selects_configured_provider() {
        let groq = CompletionConfig {
            provider: Provider::Groq,
            api_key: Some("gsk_test1234567890".to_string()),
            api_url: GROQ_API_URL.to_string(),
            model: GROQ_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: GROQ_TIMEOUT_SECS,
        };
        let client = build_client(&groq).unwrap();
        assert_eq!(client.model(), GROQ_MODEL);

        let ollama = CompletionConfig {
            provider: Provider::Ollama,
            api_key: None,
            api_url: OLLAMA_API_URL.to_string(),
            model: OLLAMA_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: OLLAMA_TIMEOUT_SECS,
        };
        let client = build_client(&ollama).unwrap();
        assert_eq!(client.model(), OLLAMA_MODEL);
    }
}

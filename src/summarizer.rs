use crate::config::SummarizerConfig;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Optional pass-through hook: condenses the report before delivery.
/// Callers fall back to the raw report when summarization fails.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    prompt: String,
}

impl OpenAiSummarizer {
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            AgentError::Config("OPENAI_API_KEY missing from environment".to_string())
        })?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            prompt: config.prompt.clone(),
        })
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        debug!("summarizing {} bytes with {}", text.len(), self.model);

        let body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": format!("{}\n\n{}", self.prompt, text),
            }],
            "max_tokens": self.max_tokens,
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Summarize(e.to_string()))?
            .error_for_status()
            .map_err(|e| AgentError::Summarize(e.to_string()))?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AgentError::Summarize(e.to_string()))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                AgentError::Summarize("response contained no message content".to_string())
            })
    }
}

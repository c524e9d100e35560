use crate::types::{AgentError, FeedSource, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Agent configuration, loaded from a JSON file. Secrets (SMTP and
/// OpenAI credentials) come from the environment, never from this file.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Feeds to poll, in report order.
    pub feeds: Vec<FeedSource>,
    /// Case-insensitive substrings an entry must contain to be relevant.
    pub keywords: Vec<String>,
    #[serde(default = "default_seen_file")]
    pub seen_file: PathBuf,
    #[serde(default = "default_subject")]
    pub subject: String,
    pub email: EmailConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub summarizer: Option<SummarizerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_seen_file() -> PathBuf {
    PathBuf::from("seen_items.json")
}

fn default_subject() -> String {
    "New regulatory news".to_string()
}

fn default_user_agent() -> String {
    "feed-digest/0.1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    300
}

fn default_prompt() -> String {
    "Summarize the following news items briefly and point out anything that needs action:".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl AgentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: AgentConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!(
            "loaded config from {}: {} feeds, {} keywords",
            path.display(),
            config.feeds.len(),
            config.keywords.len()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.feeds.is_empty() {
            return Err(AgentError::Config("no feeds configured".to_string()));
        }
        if self.keywords.is_empty() {
            return Err(AgentError::Config("no keywords configured".to_string()));
        }
        for feed in &self.feeds {
            if feed.name.trim().is_empty() {
                return Err(AgentError::Config(format!(
                    "feed with empty name (url: {})",
                    feed.url
                )));
            }
            Url::parse(&feed.url).map_err(|e| {
                AgentError::Config(format!("invalid URL for feed {}: {e}", feed.name))
            })?;
        }
        Ok(())
    }
}

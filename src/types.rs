use serde::{Deserialize, Serialize};

/// One configured feed: a display name plus the endpoint URL.
/// Configuration order drives report section order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

/// One parsed feed entry. The `link` is the item's identity: it is what
/// the seen-set stores and what deduplication compares, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Transport-level failure for one source: DNS, timeout, TLS,
    /// non-2xx status. The cause is kept as rendered text so it can be
    /// printed into the report.
    #[error("fetch failed: {cause}")]
    Fetch { r#source: String, cause: String },

    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("email error: {0}")]
    Mail(String),

    #[error("summarization error: {0}")]
    Summarize(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;

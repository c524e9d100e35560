use crate::config::FetchConfig;
use crate::types::{AgentError, FeedSource, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Retrieves raw feed content for one source. Implementations surface
/// every transport failure as `AgentError::Fetch` and never retry.
/// Failure isolation is the aggregator's responsibility.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, source: &FeedSource) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| AgentError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn fetch_error(source: &FeedSource, cause: reqwest::Error) -> AgentError {
        AgentError::Fetch {
            source: source.name.clone(),
            cause: cause.to_string(),
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<String> {
        debug!("fetching {} from {}", source.name, source.url);

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| Self::fetch_error(source, e))?
            .error_for_status()
            .map_err(|e| Self::fetch_error(source, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| Self::fetch_error(source, e))?;

        debug!("fetched {} ({} bytes)", source.name, body.len());
        Ok(body)
    }
}

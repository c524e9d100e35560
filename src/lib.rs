pub mod aggregator;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod notifier;
pub mod parser;
pub mod seen_store;
pub mod summarizer;
pub mod types;

pub use aggregator::{Aggregator, RunOutcome, NO_RELEVANT_NEWS};
pub use config::{AgentConfig, EmailConfig, FetchConfig, SummarizerConfig};
pub use fetcher::{FeedFetcher, HttpFetcher};
pub use notifier::{EmailNotifier, Notifier};
pub use seen_store::SeenStore;
pub use summarizer::{OpenAiSummarizer, Summarizer};
pub use types::{AgentError, FeedSource, NewsItem, Result};

use crate::fetcher::FeedFetcher;
use crate::filter::is_relevant;
use crate::parser::parse_items;
use crate::types::{FeedSource, NewsItem, Result};
use std::collections::HashSet;
use tracing::{info, warn};

/// Report text when no source produced a section.
pub const NO_RELEVANT_NEWS: &str = "No relevant news found.";

/// Result of one aggregation run: the report text, the seen-set updated
/// with every link reported this run, and a count of new items.
pub struct RunOutcome {
    pub report: String,
    pub seen: HashSet<String>,
    pub new_items: usize,
}

/// Drives fetch → parse → filter → dedup across all configured sources
/// and assembles the combined report.
///
/// The aggregator owns the seen-set for the duration of a run and never
/// touches disk; loading and saving are the `SeenStore`'s job at the
/// process boundary.
pub struct Aggregator {
    fetcher: Box<dyn FeedFetcher>,
    keywords: Vec<String>,
}

impl Aggregator {
    pub fn new(fetcher: Box<dyn FeedFetcher>, keywords: Vec<String>) -> Self {
        Self { fetcher, keywords }
    }

    /// Processes every source in configured order. A failing source is
    /// rendered as an error line in the report and never aborts the run.
    ///
    /// Deduplication is against the start-of-run snapshot: links found in
    /// one source this run do not suppress the same link in a later
    /// source. Within a single source, a repeated link is reported once.
    pub async fn run(&self, sources: &[FeedSource], seen: HashSet<String>) -> RunOutcome {
        let mut lines: Vec<String> = Vec::new();
        let mut new_links: HashSet<String> = HashSet::new();
        let mut new_items = 0usize;

        for source in sources {
            match self.collect_source(source, &seen).await {
                Ok(entries) if entries.is_empty() => {
                    info!("{}: nothing new", source.name);
                }
                Ok(entries) => {
                    info!("{}: {} new items", source.name, entries.len());
                    new_items += entries.len();
                    lines.push(format!("## News from {} ##", source.name));
                    for item in entries {
                        lines.push(format!("- {}\n  {}", item.title, item.link));
                        new_links.insert(item.link);
                    }
                    lines.push(String::new());
                }
                Err(e) => {
                    warn!("{}: {}", source.name, e);
                    lines.push(format!("Error with feed {}: {}", source.name, e));
                }
            }
        }

        let report = if lines.is_empty() {
            NO_RELEVANT_NEWS.to_string()
        } else {
            lines.join("\n")
        };

        let mut seen = seen;
        seen.extend(new_links);

        RunOutcome {
            report,
            seen,
            new_items,
        }
    }

    /// Fetches, parses and filters one source, keeping the items that are
    /// relevant, not in the snapshot, and not yet emitted for this source.
    async fn collect_source(
        &self,
        source: &FeedSource,
        snapshot: &HashSet<String>,
    ) -> Result<Vec<NewsItem>> {
        let content = self.fetcher.fetch(source).await?;
        let items = parse_items(&content)?;

        let mut batch_links: HashSet<String> = HashSet::new();
        let entries = items
            .into_iter()
            .filter(|item| is_relevant(item, &self.keywords))
            .filter(|item| !snapshot.contains(&item.link) && batch_links.insert(item.link.clone()))
            .collect();

        Ok(entries)
    }
}

use crate::types::{AgentError, NewsItem, Result};
use feed_rs::parser;
use tracing::debug;

/// Extracts entries from raw RSS/Atom content. The whole payload is
/// parsed at once; feeds are small enough that streaming is not worth it.
///
/// Entries without a link are skipped, since the link is the item's
/// identity for dedup and reporting. A missing description is `None`,
/// not an error.
pub fn parse_items(content: &str) -> Result<Vec<NewsItem>> {
    let feed = parser::parse(content.as_bytes())
        .map_err(|e| AgentError::Parse(e.to_string()))?;

    let items: Vec<NewsItem> = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.links.first()?.href.trim().to_string();
            let title = entry
                .title
                .map(|t| t.content.trim().to_string())
                .unwrap_or_else(|| "Untitled".to_string());
            let description = entry.summary.map(|s| s.content.trim().to_string());
            Some(NewsItem {
                title,
                link,
                description,
            })
        })
        .collect();

    debug!("parsed {} entries", items.len());
    Ok(items)
}

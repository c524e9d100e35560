//! Exercises a full run → persist → reload → run cycle the way the
//! binary drives it.

use async_trait::async_trait;
use feed_digest::{Aggregator, FeedFetcher, FeedSource, Result, SeenStore, NO_RELEVANT_NEWS};
use std::collections::HashSet;
use tempfile::tempdir;

struct FixedFetcher {
    body: String,
}

#[async_trait]
impl FeedFetcher for FixedFetcher {
    async fn fetch(&self, _source: &FeedSource) -> Result<String> {
        Ok(self.body.clone())
    }
}

const FEED_BODY: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>BMF</title>
    <item>
      <title>Hinweise zur Vorabpauschale</title>
      <link>http://bmf/vorabpauschale</link>
      <description>Neue Regelung</description>
    </item>
    <item>
      <title>Wetterbericht</title>
      <link>http://bmf/wetter</link>
    </item>
  </channel>
</rss>"#;

fn aggregator() -> Aggregator {
    Aggregator::new(
        Box::new(FixedFetcher {
            body: FEED_BODY.to_string(),
        }),
        vec!["Vorabpauschale".to_string()],
    )
}

#[tokio::test]
async fn persisted_seen_set_makes_the_next_run_idempotent() {
    let dir = tempdir().unwrap();
    let store = SeenStore::new(dir.path().join("seen_items.json"));
    let sources = [FeedSource {
        name: "BMF".to_string(),
        url: "https://example.org/rss.xml".to_string(),
    }];

    // First run starts from an absent store file.
    let seen = store.load().unwrap();
    assert!(seen.is_empty());

    let first = aggregator().run(&sources, seen).await;
    assert!(first.report.contains("http://bmf/vorabpauschale"));
    assert!(!first.report.contains("http://bmf/wetter"));
    store.save(&first.seen).unwrap();

    // Second run, fresh process: nothing upstream changed, so the report
    // collapses to the sentinel and the persisted set is unchanged.
    let reloaded = store.load().unwrap();
    let second = aggregator().run(&sources, reloaded).await;
    assert_eq!(second.report, NO_RELEVANT_NEWS);

    store.save(&second.seen).unwrap();
    let final_set: HashSet<String> = store.load().unwrap();
    assert_eq!(final_set, first.seen);
}

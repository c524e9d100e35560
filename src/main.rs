use anyhow::Context;
use chrono::Local;
use clap::Parser;
use feed_digest::{
    Aggregator, AgentConfig, EmailNotifier, HttpFetcher, Notifier, OpenAiSummarizer, SeenStore,
    Summarizer,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Poll RSS/Atom feeds, filter entries by keyword, and email a digest of
/// items not reported in a previous run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the agent config file
    #[arg(short, long, default_value = "agent.json")]
    config: PathBuf,

    /// Print the report instead of emailing; skips seen-set persistence
    #[arg(long)]
    dry_run: bool,

    /// Pipe the report through the configured summarizer before sending
    #[arg(long)]
    summarize: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AgentConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    info!(
        "polling {} feeds against {} keywords",
        config.feeds.len(),
        config.keywords.len()
    );

    let store = SeenStore::new(&config.seen_file);
    // Fatal unless the file simply does not exist yet: running without
    // dedup history would re-report everything.
    let seen = store.load().context("loading seen-set")?;

    let fetcher = HttpFetcher::new(&config.fetch)?;
    let aggregator = Aggregator::new(Box::new(fetcher), config.keywords.clone());
    let outcome = aggregator.run(&config.feeds, seen).await;

    info!("{} new items this run", outcome.new_items);

    let mut body = outcome.report;
    if cli.summarize {
        match config.summarizer.as_ref() {
            Some(summarizer_config) => {
                let summarizer = OpenAiSummarizer::from_config(summarizer_config)?;
                match summarizer.summarize(&body).await {
                    Ok(summary) => body = summary,
                    Err(e) => warn!("summarization failed, sending raw report: {e}"),
                }
            }
            None => warn!("--summarize given but no summarizer configured, sending raw report"),
        }
    }

    if cli.dry_run {
        println!("{body}");
        return Ok(());
    }

    let subject = format!("{} ({})", config.subject, Local::now().format("%Y-%m-%d"));
    let notifier = EmailNotifier::from_config(&config.email)?;
    notifier.send(&subject, &body).await.context("sending digest")?;

    // Persist only after delivery: a crash or send failure re-reports
    // next run instead of dropping items. A save failure here means the
    // next run will re-report today's items, so it fails the process.
    store.save(&outcome.seen).context("persisting seen-set")?;

    Ok(())
}

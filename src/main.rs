//! MÍDIA GROSSA — daily newsletter generator, one run per invocation.
//! Collects the configured RSS feeds, asks Claude for the day's edition and
//! publishes index.html plus the dated copy under edicoes/.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use midia_grossa::ai::ClaudeClient;
use midia_grossa::edition::EditionDate;
use midia_grossa::ingest::registry::FeedRegistry;
use midia_grossa::ingest::rss::HttpFeedFetcher;
use midia_grossa::storage::LocalDiskStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when the vars come from the environment.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    let registry = FeedRegistry::load_default()?;
    let generator = ClaudeClient::from_env()?;
    let fetcher = HttpFeedFetcher::new();
    let store = LocalDiskStore::new(".");
    let date = EditionDate::today();

    midia_grossa::run::run_edition(&registry, &fetcher, &generator, &store, &date).await
}

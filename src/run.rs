// src/run.rs
//! Orchestrates one edition: collect -> prompt -> generate -> sanitize ->
//! persist. Feed failures were already absorbed upstream; anything that
//! fails from generation onward aborts the run with nothing written past
//! the failure point.

use anyhow::Result;
use tracing::info;

use crate::ai::TextGenerator;
use crate::edition::EditionDate;
use crate::ingest::registry::FeedRegistry;
use crate::ingest::types::FeedFetcher;
use crate::ingest::{collect, CollectOptions};
use crate::prompt::build_prompt;
use crate::sanitize::strip_code_fence;
use crate::storage::EditionStore;

pub async fn run_edition(
    registry: &FeedRegistry,
    fetcher: &dyn FeedFetcher,
    generator: &dyn TextGenerator,
    store: &dyn EditionStore,
    date: &EditionDate,
) -> Result<()> {
    info!(edition = %date.label, "gerando edição");

    info!("coletando notícias dos feeds RSS");
    let digest = collect(fetcher, registry, CollectOptions::default()).await;

    let prompt = build_prompt(&digest, date);

    info!(generator = generator.name(), "gerando HTML da edição");
    let raw = generator.generate(&prompt).await?;
    let html = strip_code_fence(&raw);

    info!("salvando arquivos");
    store.write_current(&html)?;
    store.write_archive(&date.key, &html)?;

    info!(edition = %date.key, "edição gerada com sucesso");
    Ok(())
}

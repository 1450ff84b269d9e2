// src/ingest/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One feed entry as delivered by the transport layer, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub published_at: u64, // unix seconds; 0 when the feed omits pubDate
}

/// A normalized news item ready for the generation prompt.
/// Serialized field names match the payload the editor prompt expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectedItem {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "resumo")]
    pub summary: String,
}

/// All surviving items for one category, in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDigest {
    #[serde(rename = "categoria")]
    pub name: String,
    #[serde(rename = "noticias")]
    pub items: Vec<CollectedItem>,
}

/// Full collection result for one run: one entry per configured category,
/// present even when empty, in registry order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Digest {
    pub categories: Vec<CategoryDigest>,
}

impl Digest {
    pub fn category(&self, name: &str) -> Option<&CategoryDigest> {
        self.categories.iter().find(|c| c.name == name)
    }
}

#[async_trait::async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch and parse one feed URL into raw entries, in feed order.
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>>;
}

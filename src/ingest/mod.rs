// src/ingest/mod.rs
pub mod registry;
pub mod rss;
pub mod types;

use crate::ingest::registry::FeedRegistry;
use crate::ingest::types::{CategoryDigest, CollectedItem, Digest, FeedFetcher, RawEntry};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

/// Raw entries taken from a single feed, in feed order.
pub const PER_FEED_CAP: usize = 8;
/// Items kept per category after cross-feed aggregation.
pub const CATEGORY_CAP: usize = 12;
/// Summary length cap, in characters, applied after tag stripping.
pub const SUMMARY_MAX_CHARS: usize = 300;

#[derive(Clone, Copy, Debug)]
pub struct CollectOptions {
    pub per_feed_cap: usize,
    pub category_cap: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            per_feed_cap: PER_FEED_CAP,
            category_cap: CATEGORY_CAP,
        }
    }
}

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("collect_entries_total", "Raw entries seen across feeds.");
        describe_counter!("collect_kept_total", "Items kept after normalization + caps.");
        describe_counter!("collect_feed_errors_total", "Feed fetch/parse errors.");
    });
}

/// Strip HTML from a summary: decode entities first so escaped tags are
/// removed too, then drop every `<...>` span.
pub fn strip_markup(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s).to_string();
    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    re_tags.replace_all(&decoded, "").to_string()
}

/// Turn a raw feed entry into a prompt-ready item. Entries without a usable
/// title are dropped. The summary falls back to the description field, loses
/// all markup, and is capped at `summary_cap` characters.
pub fn normalize_entry(entry: RawEntry, summary_cap: usize) -> Option<CollectedItem> {
    let title = entry.title.unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return None;
    }
    let raw_summary = entry.summary.or(entry.description).unwrap_or_default();
    let mut summary = strip_markup(raw_summary.trim()).trim().to_string();
    if summary.chars().count() > summary_cap {
        summary = summary.chars().take(summary_cap).collect();
    }
    Some(CollectedItem { title, summary })
}

/// Collect news for every category in the registry. A failing feed is logged
/// and contributes zero items; it never aborts its category or the run.
pub async fn collect(
    fetcher: &dyn FeedFetcher,
    registry: &FeedRegistry,
    opts: CollectOptions,
) -> Digest {
    ensure_metrics_described();

    let mut categories = Vec::with_capacity(registry.categories().len());
    for cat in registry.categories() {
        let mut items: Vec<CollectedItem> = Vec::new();
        for url in &cat.feeds {
            match fetcher.fetch(url).await {
                Ok(entries) => {
                    counter!("collect_entries_total").increment(entries.len() as u64);
                    for entry in entries.into_iter().take(opts.per_feed_cap) {
                        if let Some(item) = normalize_entry(entry, SUMMARY_MAX_CHARS) {
                            items.push(item);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, url = %url, category = %cat.name, "feed error");
                    counter!("collect_feed_errors_total").increment(1);
                }
            }
        }
        items.truncate(opts.category_cap);
        counter!("collect_kept_total").increment(items.len() as u64);
        tracing::info!(category = %cat.name, count = items.len(), "notícias coletadas");
        categories.push(CategoryDigest {
            name: cat.name.clone(),
            items,
        });
    }

    Digest { categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, description: &str) -> RawEntry {
        RawEntry {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..RawEntry::default()
        }
    }

    #[test]
    fn strip_markup_removes_tags_and_entities() {
        let out = strip_markup("<p>Fla vence <b>cl&aacute;ssico</b> no Maracanã</p>");
        assert!(!out.contains('<') && !out.contains('>'));
        assert_eq!(out, "Fla vence clássico no Maracanã");
    }

    #[test]
    fn normalize_drops_blank_titles() {
        assert!(normalize_entry(entry("   ", "corpo"), SUMMARY_MAX_CHARS).is_none());
        let none_title = RawEntry {
            description: Some("corpo".into()),
            ..RawEntry::default()
        };
        assert!(normalize_entry(none_title, SUMMARY_MAX_CHARS).is_none());
    }

    #[test]
    fn normalize_caps_summary_at_limit() {
        let long = "a".repeat(500);
        let item = normalize_entry(entry("título", &long), SUMMARY_MAX_CHARS).unwrap();
        assert_eq!(item.summary.chars().count(), SUMMARY_MAX_CHARS);
    }

    #[test]
    fn summary_field_wins_over_description() {
        let raw = RawEntry {
            title: Some("t".into()),
            summary: Some("resumo".into()),
            description: Some("descrição".into()),
            ..RawEntry::default()
        };
        let item = normalize_entry(raw, SUMMARY_MAX_CHARS).unwrap();
        assert_eq!(item.summary, "resumo");
    }

    #[test]
    fn missing_summary_and_description_yield_empty_summary() {
        let raw = RawEntry {
            title: Some("só título".into()),
            ..RawEntry::default()
        };
        let item = normalize_entry(raw, SUMMARY_MAX_CHARS).unwrap();
        assert_eq!(item.summary, "");
    }
}

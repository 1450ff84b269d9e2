// src/ingest/rss.rs
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use metrics::histogram;
use quick_xml::de::from_str;
use serde::Deserialize;
use std::time::Duration;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::ingest::types::{FeedFetcher, RawEntry};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    // Some aggregated feeds expose an Atom-style summary instead.
    summary: Option<String>,
}

fn parse_rfc2822_to_unix(ts: &str) -> u64 {
    OffsetDateTime::parse(ts, &Rfc2822)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).unix_timestamp())
        .and_then(|x| u64::try_from(x).ok())
        .unwrap_or(0)
}

/// Parse an RSS 2.0 body into raw entries, preserving feed order.
/// Malformed XML is an error; the collector decides what to do with it.
pub fn parse_rss(body: &str) -> Result<Vec<RawEntry>> {
    let t0 = std::time::Instant::now();
    let xml_clean = scrub_html_entities_for_xml(body);
    let rss: Rss = from_str(&xml_clean).context("parsing rss xml")?;

    let mut out = Vec::with_capacity(rss.channel.item.len());
    for it in rss.channel.item {
        out.push(RawEntry {
            title: it.title,
            summary: it.summary,
            description: it.description,
            link: it.link,
            published_at: it
                .pub_date
                .as_deref()
                .map(parse_rfc2822_to_unix)
                .unwrap_or(0),
        });
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("collect_parse_ms").record(ms);
    Ok(out)
}

/// Real transport: HTTP GET + RSS parse via a shared reqwest client.
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent("midia-grossa/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
            .expect("reqwest client");
        Self { client }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        if !resp.status().is_success() {
            bail!("GET {url}: HTTP {}", resp.status());
        }
        let body = resp
            .text()
            .await
            .with_context(|| format!("reading body of {url}"))?;
        parse_rss(&body)
    }
}

fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

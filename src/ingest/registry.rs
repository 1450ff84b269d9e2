// src/ingest/registry.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "FEEDS_CONFIG_PATH";
const DEFAULT_PATH: &str = "config/feeds.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeedCategory {
    pub name: String,
    pub feeds: Vec<String>,
}

/// Static mapping category -> ordered feed URLs. Built once at startup and
/// injected into the collector; category order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRegistry {
    categories: Vec<FeedCategory>,
}

impl FeedRegistry {
    /// The stock MÍDIA GROSSA sources.
    pub fn builtin() -> Self {
        let cat = |name: &str, feeds: &[&str]| FeedCategory {
            name: name.to_string(),
            feeds: feeds.iter().map(|u| u.to_string()).collect(),
        };
        Self {
            categories: vec![
                cat(
                    "politica",
                    &[
                        "https://g1.globo.com/rss/g1/politica/",
                        "https://agenciabrasil.ebc.com.br/rss/politica/feed.xml",
                    ],
                ),
                cat(
                    "pop",
                    &[
                        "https://g1.globo.com/rss/g1/pop-arte/",
                        "https://www.uol.com.br/esporte/ultnot/ults4960.xml",
                    ],
                ),
                cat(
                    "esportes",
                    &[
                        "https://ge.globo.com/rss/ge/",
                        "https://g1.globo.com/rss/g1/esportes/",
                    ],
                ),
                cat(
                    "mercado",
                    &[
                        "https://feeds.infomoney.com.br/infomoney/all",
                        "https://agenciabrasil.ebc.com.br/rss/economia/feed.xml",
                    ],
                ),
            ],
        }
    }

    pub fn from_categories(categories: Vec<FeedCategory>) -> Result<Self> {
        if categories.iter().any(|c| c.name.trim().is_empty()) {
            return Err(anyhow!("feed registry contains a category with empty name"));
        }
        Ok(Self { categories })
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct File {
            #[serde(rename = "category")]
            categories: Vec<FeedCategory>,
        }
        let file: File = toml::from_str(s).context("parsing feed registry toml")?;
        Self::from_categories(file.categories)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading feed registry from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load the registry using env var + fallbacks:
    /// 1) $FEEDS_CONFIG_PATH
    /// 2) config/feeds.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::from_path(&pb);
            }
            return Err(anyhow!("FEEDS_CONFIG_PATH points to non-existent path"));
        }
        let default = PathBuf::from(DEFAULT_PATH);
        if default.exists() {
            return Self::from_path(&default);
        }
        Ok(Self::builtin())
    }

    pub fn categories(&self) -> &[FeedCategory] {
        &self.categories
    }
}

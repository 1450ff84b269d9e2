// src/storage.rs
//! Two named durable sinks: the "current" edition and a dated archive copy.
//! Kept behind a trait so the backend can move off local disk without
//! touching the orchestrator.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_FILE: &str = "index.html";
pub const ARCHIVE_DIR: &str = "edicoes";

pub trait EditionStore: Send + Sync {
    /// Overwrite the current-edition slot.
    fn write_current(&self, html: &str) -> Result<()>;
    /// Write the archive slot for `date_key` (YYYY-MM-DD), creating the
    /// archive directory if needed; same-day re-runs overwrite.
    fn write_archive(&self, date_key: &str, html: &str) -> Result<()>;
}

pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current_path(&self) -> PathBuf {
        self.root.join(CURRENT_FILE)
    }

    pub fn archive_path(&self, date_key: &str) -> PathBuf {
        self.root.join(ARCHIVE_DIR).join(format!("{date_key}.html"))
    }
}

impl EditionStore for LocalDiskStore {
    fn write_current(&self, html: &str) -> Result<()> {
        write_text(&self.current_path(), html)
    }

    fn write_archive(&self, date_key: &str, html: &str) -> Result<()> {
        let dir = self.root.join(ARCHIVE_DIR);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        write_text(&self.archive_path(date_key), html)
    }
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    // &str guarantees valid UTF-8 on disk; accents survive as-is.
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

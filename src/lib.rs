// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod ai;
pub mod edition;
pub mod ingest;
pub mod prompt;
pub mod run;
pub mod sanitize;
pub mod storage;

// ---- Re-exports for stable public API ----
pub use crate::ai::{ClaudeClient, TextGenerator};
pub use crate::edition::EditionDate;
pub use crate::ingest::registry::FeedRegistry;
pub use crate::run::run_edition;
pub use crate::storage::{EditionStore, LocalDiskStore};

// tests/edition_run.rs
// End-to-end runs against a temp directory store, with the generator
// replaced by test doubles.

use anyhow::{bail, Result};
use async_trait::async_trait;

use midia_grossa::ai::{FailingGenerator, FixedGenerator};
use midia_grossa::edition::EditionDate;
use midia_grossa::ingest::registry::{FeedCategory, FeedRegistry};
use midia_grossa::ingest::types::{FeedFetcher, RawEntry};
use midia_grossa::run::run_edition;
use midia_grossa::storage::{LocalDiskStore, ARCHIVE_DIR};

const DOC: &str = "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<body>Edição de teste</body>\n</html>";

/// One healthy in-memory feed; enough for the orchestrator paths.
struct OneFeed;

#[async_trait]
impl FeedFetcher for OneFeed {
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        if url.contains("morto") {
            bail!("GET {url}: connection refused");
        }
        Ok(vec![RawEntry {
            title: Some("Manchete do dia".into()),
            description: Some("Resumo curto.".into()),
            ..RawEntry::default()
        }])
    }
}

fn small_registry() -> FeedRegistry {
    FeedRegistry::from_categories(vec![
        FeedCategory {
            name: "politica".into(),
            feeds: vec!["https://ok.test/politica".into()],
        },
        FeedCategory {
            name: "esportes".into(),
            feeds: vec!["https://morto.test/ge".into()],
        },
    ])
    .unwrap()
}

fn date() -> EditionDate {
    EditionDate {
        key: "2026-08-21".into(),
        label: "Sexta-feira, 21 de agosto de 2026".into(),
    }
}

#[tokio::test]
async fn fenced_generator_output_is_persisted_unwrapped() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalDiskStore::new(tmp.path());
    let generator = FixedGenerator {
        body: format!("```html\n{DOC}\n```"),
    };

    run_edition(&small_registry(), &OneFeed, &generator, &store, &date())
        .await
        .expect("run succeeds");

    let current = std::fs::read_to_string(store.current_path()).unwrap();
    assert_eq!(current, DOC);
    assert!(!current.contains("```"));

    let archived = std::fs::read_to_string(store.archive_path("2026-08-21")).unwrap();
    assert_eq!(archived, DOC);
}

#[tokio::test]
async fn same_day_rerun_overwrites_the_same_archive_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalDiskStore::new(tmp.path());

    let first = FixedGenerator {
        body: "<html>primeira tiragem</html>".into(),
    };
    run_edition(&small_registry(), &OneFeed, &first, &store, &date())
        .await
        .unwrap();

    let second = FixedGenerator {
        body: "<html>segunda tiragem</html>".into(),
    };
    run_edition(&small_registry(), &OneFeed, &second, &store, &date())
        .await
        .unwrap();

    let archived = std::fs::read_to_string(store.archive_path("2026-08-21")).unwrap();
    assert_eq!(archived, "<html>segunda tiragem</html>");

    let count = std::fs::read_dir(tmp.path().join(ARCHIVE_DIR)).unwrap().count();
    assert_eq!(count, 1, "re-run must overwrite, not duplicate");
}

#[tokio::test]
async fn generator_failure_leaves_storage_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalDiskStore::new(tmp.path());

    let result = run_edition(&small_registry(), &OneFeed, &FailingGenerator, &store, &date()).await;

    assert!(result.is_err());
    assert!(!store.current_path().exists());
    assert!(!tmp.path().join(ARCHIVE_DIR).exists());
}

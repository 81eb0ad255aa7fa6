//! End-to-end dataset generation tests
//!
//! Runs the full pipeline against a catalog written to a temporary directory.

mod helpers;

use helpers::{write_catalog, BASE_URL};
use seogen::{GenerationError, SeoGenConfig};
use seogen_common::{EntityKind, ProgressObserver, ProgressSnapshot};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

fn config_for(root: &Path) -> SeoGenConfig {
    let mut config = SeoGenConfig::default();
    config.catalog_dir = root.join("data");
    config.batch.output_dir = root.join("out");
    config.batch.batch_delay_ms = 0;
    config.generator.base_url = BASE_URL.to_string();
    config
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl ProgressObserver for Recorder {
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        self.events
            .lock()
            .unwrap()
            .push(format!("progress {} {}", snapshot.kind, snapshot.batch));
    }

    fn on_phase_started(&self, kind: EntityKind, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {} {}", kind, total));
    }

    fn on_phase_completed(&self, kind: EntityKind, successful: usize, unsuccessful: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("end {} {}", kind, successful + unsuccessful));
    }
}

#[tokio::test]
async fn test_full_run_writes_report_and_documents() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 20);
    let config = config_for(dir.path());

    let report = seogen::run(&config, None).await.unwrap();

    // 20 games, 6 categories, 8 tags, 1 home page
    assert_eq!(report.phases.len(), 3);
    assert_eq!(report.phase(EntityKind::Game).unwrap().total, 20);
    assert_eq!(report.phase(EntityKind::Category).unwrap().total, 6);
    assert_eq!(report.phase(EntityKind::Tag).unwrap().total, 8);
    assert_eq!(report.totals.processed, 35);
    assert_eq!(
        report.totals.successful + report.totals.rejected + report.totals.failed,
        35
    );
    assert_eq!(report.totals.failed, 0);

    let out = dir.path().join("out");
    let written: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("generation-report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(written["run_id"], report.run_id.to_string());
    assert_eq!(written["phases"].as_array().unwrap().len(), 3);
    assert_eq!(written["totals"]["processed"], 35);
    assert_eq!(written["settings"]["base_url"], BASE_URL);

    assert_eq!(report.home.is_persisted(), out.join("home.json").exists());

    let game_files = std::fs::read_dir(out.join("games"))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(game_files, report.phase(EntityKind::Game).unwrap().successful);
}

#[tokio::test]
async fn test_exported_indexes_supply_page_samples() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 12);
    let mut config = config_for(dir.path());
    config.batch.enable_quality_check = false;

    let report = seogen::run(&config, None).await.unwrap();
    assert_eq!(report.totals.failed, 0);

    // game 1 leads the puzzle index and has a thumbnail
    let puzzle: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("out/categories/puzzle.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(puzzle["metadata"]["openGraph"]["image"], "https://cdn.test/1.jpg");
    assert_eq!(puzzle["content"]["stats"]["total"], 2);
}

#[tokio::test]
async fn test_observer_sees_phases_in_order() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 12);
    let config = config_for(dir.path());
    let recorder = Recorder::default();

    seogen::run(&config, Some(&recorder)).await.unwrap();

    let events = recorder.events.into_inner().unwrap();
    let phase_events: Vec<&String> = events.iter().filter(|e| !e.starts_with("progress")).collect();
    assert_eq!(
        phase_events,
        vec![
            "start game 12",
            "end game 12",
            "start category 6",
            "end category 6",
            "start tag 8",
            "end tag 8",
            "start home 1",
            "end home 1",
        ]
    );
    assert_eq!(
        events.iter().filter(|e| e.starts_with("progress game")).count(),
        2
    );
}

#[tokio::test]
async fn test_missing_catalog_still_reports() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path());

    let report = seogen::run(&config, None).await.unwrap();
    assert!(report.phases.iter().all(|p| p.total == 0));
    assert_eq!(report.totals.processed, 1);
    assert!(dir.path().join("out/generation-report.json").exists());
}

#[tokio::test]
async fn test_malformed_catalog_aborts_run() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    write_catalog(&data, 5);
    std::fs::write(data.join("validated-games.json"), "{ not json").unwrap();
    let config = config_for(dir.path());

    assert!(seogen::run(&config, None).await.is_err());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_bad_template_file_is_fatal_before_any_output() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 5);
    let templates = dir.path().join("templates.toml");
    std::fs::write(&templates, "[genres.unknown]\ntitles = [\"{title}\"]\n").unwrap();

    let mut config = config_for(dir.path());
    config.templates = Some(templates);

    let err = seogen::run(&config, None).await.unwrap_err();
    assert!(matches!(err, GenerationError::FatalConfig(_)));
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_invalid_batch_size_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 5);
    let mut config = config_for(dir.path());
    config.batch.batch_size = 0;

    let err = seogen::run(&config, None).await.unwrap_err();
    assert!(matches!(err, GenerationError::FatalConfig(_)));
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_report_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir.path().join("data"), 4);
    let mut config = config_for(dir.path());
    config.batch.generate_progress_report = false;

    seogen::run(&config, None).await.unwrap();
    assert!(!dir.path().join("out/generation-report.json").exists());
}

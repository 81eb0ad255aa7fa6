//! Shared fixtures for seogen integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use seogen::error::{GenerationError, Result};
use seogen::generator::{GeneratorConfig, SeoGenerator};
use seogen::output::{JsonFileStore, OutputStore};
use seogen::templates::TemplateRegistry;
use seogen::types::{Entity, SeoDocument};
use seogen::validators::{QualityChecker, QualityConfig};
use seogen::workflow::{BatchConfig, BatchOrchestrator, GenerationReport, WorkItem};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BASE_URL: &str = "https://games.test";

const CATEGORIES: &[&str] = &["action", "puzzle", "adventure", "strategy", "racing", "arcade"];
const TAGS: &[&str] = &["animal", "jump", "car", "zombie", "space", "cooking", "ninja", "farm"];
const NAMES: &[&str] = &[
    "Jungle", "Rocket", "Pixel", "Shadow", "Candy", "Turbo", "Castle", "Ocean", "Robot",
    "Dragon", "Frost", "Neon",
];
const SUFFIXES: &[&str] = &["Run", "Quest", "Blast", "Rush", "Legends", "Escape"];

/// Deterministic, varied game entity
pub fn game(id: u64) -> Entity {
    let i = id as usize;
    let title = format!(
        "{} {} {}",
        NAMES[i % NAMES.len()],
        SUFFIXES[(i / NAMES.len()) % SUFFIXES.len()],
        id
    );
    let slug = title.to_lowercase().replace(' ', "-");
    let category = CATEGORIES[i % CATEGORIES.len()].to_string();
    Entity {
        id,
        slug,
        title,
        all_categories: vec![category.clone()],
        category,
        tags: vec![
            TAGS[i % TAGS.len()].to_string(),
            TAGS[(i + 3) % TAGS.len()].to_string(),
        ],
        thumbnail: (i % 3 != 0).then(|| format!("https://cdn.test/{}.jpg", id)),
        developer: Some("Test Studio".to_string()),
        devices: if i % 2 == 0 {
            vec!["desktop".to_string(), "mobile".to_string()]
        } else {
            vec!["desktop".to_string()]
        },
        featured: i % 4 == 0,
    }
}

/// `n` game work items with no related games
pub fn game_items(n: u64) -> Vec<WorkItem> {
    (1..=n)
        .map(|id| WorkItem::Game {
            entity: game(id),
            related: Vec::new(),
        })
        .collect()
}

pub fn generator() -> SeoGenerator {
    SeoGenerator::new(
        GeneratorConfig {
            base_url: BASE_URL.to_string(),
            ..Default::default()
        },
        Arc::new(TemplateRegistry::builtin()),
    )
}

/// Fast batch config writing under `dir`
pub fn batch_config(dir: &Path) -> BatchConfig {
    BatchConfig {
        output_dir: dir.to_path_buf(),
        batch_delay_ms: 0,
        ..Default::default()
    }
}

pub fn orchestrator_with(
    batch: BatchConfig,
    quality: QualityConfig,
    store: Arc<dyn OutputStore>,
) -> BatchOrchestrator {
    BatchOrchestrator::new(batch, generator(), QualityChecker::new(quality), store)
}

/// Default orchestrator writing JSON under `dir`
pub fn orchestrator(dir: &Path) -> BatchOrchestrator {
    orchestrator_with(
        batch_config(dir),
        QualityConfig::default(),
        Arc::new(JsonFileStore::new(dir)),
    )
}

/// Every file under `root`, keyed by relative path
pub fn snapshot_dir(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(rel, std::fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

/// Store that fails for selected keys and delegates the rest
pub struct FailingStore {
    inner: JsonFileStore,
    failing_keys: HashSet<String>,
    writes: AtomicUsize,
}

impl FailingStore {
    pub fn new(root: &Path, failing_keys: &[&str]) -> Self {
        Self {
            inner: JsonFileStore::new(root),
            failing_keys: failing_keys.iter().map(|k| k.to_string()).collect(),
            writes: AtomicUsize::new(0),
        }
    }

    /// Successful writes so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutputStore for FailingStore {
    async fn write_document(&self, document: &SeoDocument) -> Result<PathBuf> {
        if self.failing_keys.contains(&document.output_key()) {
            return Err(GenerationError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated disk failure",
            )));
        }
        let path = self.inner.write_document(document).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(path)
    }

    async fn write_report(&self, report: &GenerationReport) -> Result<PathBuf> {
        self.inner.write_report(report).await
    }
}

/// Write a catalog directory with `n` games plus matching indexes, in the
/// layouts the catalog exporter produces
pub fn write_catalog(dir: &Path, n: u64) {
    let games: Vec<Entity> = (1..=n).map(game).collect();

    let mut categories: BTreeMap<String, (u64, Vec<u64>)> = BTreeMap::new();
    let mut tags: BTreeMap<String, (u64, Vec<u64>)> = BTreeMap::new();
    for g in &games {
        let entry = categories.entry(g.category.clone()).or_default();
        entry.0 += 1;
        entry.1.push(g.id);
        for t in &g.tags {
            let entry = tags.entry(t.clone()).or_default();
            entry.0 += 1;
            entry.1.push(g.id);
        }
    }
    let index = |m: &BTreeMap<String, (u64, Vec<u64>)>| {
        serde_json::Value::Object(
            m.iter()
                .map(|(k, (count, ids))| {
                    (k.clone(), serde_json::json!({"count": count, "game_ids": ids}))
                })
                .collect(),
        )
    };
    // reorganizer summary layout
    let stats = serde_json::json!({
        "total_categories": categories.len(),
        "categories": categories
            .iter()
            .map(|(name, (count, _))| serde_json::json!({
                "name": name,
                "count": count,
                "percentage": format!("{:.1}", *count as f64 * 100.0 / n.max(1) as f64),
            }))
            .collect::<Vec<_>>(),
    });

    std::fs::create_dir_all(dir).unwrap();
    // catalog export uses `primary_category`
    let records: Vec<serde_json::Value> = games
        .iter()
        .map(|g| {
            let mut v = serde_json::to_value(g).unwrap();
            let category = v["category"].take();
            let obj = v.as_object_mut().unwrap();
            obj.remove("category");
            obj.insert("primary_category".to_string(), category);
            v
        })
        .collect();
    std::fs::write(
        dir.join("validated-games.json"),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("category-index.json"),
        serde_json::to_string_pretty(&index(&categories)).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("tags-index.json"),
        serde_json::to_string_pretty(&index(&tags)).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("category-stats.json"),
        serde_json::to_string_pretty(&stats).unwrap(),
    )
    .unwrap();
}

//! Catalog provider
//!
//! The pipeline loads the whole catalog once before a run. [`CatalogProvider`]
//! is the seam; [`JsonCatalog`] reads the scraper's JSON exports from a
//! directory:
//!
//! | File | Content |
//! |------|---------|
//! | `validated-games.json` | entity records (array, or object keyed by id) |
//! | `category-index.json` | `{category: {count, game_ids}}` |
//! | `tags-index.json` | `{tag: {count, game_ids}}` |
//! | `category-stats.json` | see [`parse_category_stats`] |
//!
//! A missing file yields an empty collection and a warning. A file that exists
//! but is not valid JSON is an error. Category stats only refine index counts,
//! so a stats file in an unknown layout is skipped with a warning.

use crate::error::{GenerationError, Result};
use crate::types::{CatalogSnapshot, CategoryStats, Entity};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Entity records file name
pub const GAMES_FILE: &str = "validated-games.json";
/// Category index file name
pub const CATEGORY_INDEX_FILE: &str = "category-index.json";
/// Tag index file name
pub const TAG_INDEX_FILE: &str = "tags-index.json";
/// Category statistics file name
pub const CATEGORY_STATS_FILE: &str = "category-stats.json";

/// Source of catalog records for one run
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load every collection
    async fn load(&self) -> Result<CatalogSnapshot>;
}

/// Catalog backed by JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Catalog directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a file, `None` if it is missing or unreadable
    async fn read_optional(&self, name: &str) -> Option<String> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Catalog file unavailable, using empty collection"
                );
                None
            }
        }
    }

    async fn load_collection<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        match self.read_optional(name).await {
            Some(content) => serde_json::from_str(&content).map_err(|e| {
                warn!(file = name, error = %e, "Malformed catalog file");
                GenerationError::Serialization(e)
            }),
            None => Ok(T::default()),
        }
    }

    async fn load_entities(&self) -> Result<Vec<Entity>> {
        let Some(content) = self.read_optional(GAMES_FILE).await else {
            return Ok(Vec::new());
        };
        let value: Value = serde_json::from_str(&content)?;
        parse_entities(value)
    }
}

/// Decode entity records, skipping the ones that do not fit the schema
///
/// Accepts an array of records or an object keyed by id (key order is kept
/// as serde_json delivers it, which is sorted by key).
pub fn parse_entities(value: Value) -> Result<Vec<Entity>> {
    let records: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => {
            return Err(GenerationError::InputMalformed(format!(
                "{} must be an array or object, found {}",
                GAMES_FILE,
                json_type_name(&other)
            )))
        }
    };

    let total = records.len();
    let entities: Vec<Entity> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Entity>(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed entity record");
                None
            }
        })
        .collect();

    if entities.len() < total {
        debug!(
            kept = entities.len(),
            skipped = total - entities.len(),
            "Entity records decoded"
        );
    }
    Ok(entities)
}

/// One row of a list-shaped stats file
#[derive(Debug, Deserialize)]
struct StatsRow {
    #[serde(alias = "category")]
    name: String,
    count: u64,
}

/// Layouts `category-stats.json` has been written in
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatsFile {
    /// `{"action": 12, ...}`
    Counts(CategoryStats),
    /// `{"total_categories": 2, "categories": [{"name", "count", "percentage"}]}`
    Summary { categories: Vec<StatsRow> },
    /// `[{"category", "count", "chunks"}]`
    Rows(Vec<StatsRow>),
}

/// Decode category counts from any known stats layout
///
/// Unknown layouts yield an empty map and a warning.
pub fn parse_category_stats(value: Value) -> CategoryStats {
    let kind = json_type_name(&value);
    match serde_json::from_value::<StatsFile>(value) {
        Ok(StatsFile::Counts(counts)) => counts,
        Ok(StatsFile::Summary { categories: rows }) | Ok(StatsFile::Rows(rows)) => rows
            .into_iter()
            .map(|row| (row.name, row.count))
            .collect(),
        Err(_) => {
            warn!(
                file = CATEGORY_STATS_FILE,
                found = kind,
                "Unrecognized category stats layout, using index counts"
            );
            CategoryStats::default()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalog {
    async fn load(&self) -> Result<CatalogSnapshot> {
        let entities = self.load_entities().await?;
        let categories = self.load_collection(CATEGORY_INDEX_FILE).await?;
        let tags = self.load_collection(TAG_INDEX_FILE).await?;
        let stats = match self.read_optional(CATEGORY_STATS_FILE).await {
            Some(content) => parse_category_stats(serde_json::from_str(&content)?),
            None => CategoryStats::default(),
        };

        let snapshot = CatalogSnapshot {
            entities,
            categories,
            tags,
            stats,
        };
        info!(
            dir = %self.dir.display(),
            entities = snapshot.entities.len(),
            categories = snapshot.categories.len(),
            tags = snapshot.tags.len(),
            "Catalog loaded"
        );
        Ok(snapshot)
    }
}

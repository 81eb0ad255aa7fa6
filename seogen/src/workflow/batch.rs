//! Batch orchestrator
//!
//! Drives one collection of work items through generate → check → gate →
//! persist, in fixed-size batches split into concurrency-sized chunks.
//!
//! # Execution model
//! - Batches run one after another, with a pacing delay between them (none
//!   after the last)
//! - Inside a chunk, generation and scoring run in item order; the writes of
//!   accepted documents then run concurrently via `join_all`
//! - Every item settles into exactly one [`GenerationResult`]; a failure in
//!   one item never affects its neighbours
//! - Progress is reported once per completed batch
//!
//! Scoring in item order keeps gate decisions reproducible: the duplicate
//! caches see documents in the same order on every run.

use super::progress::PhaseProgress;
use crate::error::{FailureKind, GenerationError};
use crate::generator::{HomeInput, SeoGenerator};
use crate::output::OutputStore;
use crate::types::{Entity, RelatedItem, SeoDocument};
use crate::validators::QualityChecker;
use futures::future::join_all;
use seogen_common::{EntityKind, ProgressObserver};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

// ============================================================================
// Configuration
// ============================================================================

/// Batch configuration (`[batch]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Output root directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Items per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Items per concurrent chunk
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Score documents and apply the gate
    #[serde(default = "default_true")]
    pub enable_quality_check: bool,

    /// Write `generation-report.json` after a full run
    #[serde(default = "default_true")]
    pub generate_progress_report: bool,

    /// Pause between batches (milliseconds)
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output/seo")
}

fn default_batch_size() -> usize {
    10
}

fn default_concurrency() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_batch_delay_ms() -> u64 {
    100
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            batch_size: default_batch_size(),
            concurrency: default_concurrency(),
            enable_quality_check: true,
            generate_progress_report: true,
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl BatchConfig {
    /// Reject sizes that would stall the orchestrator
    pub fn validate(&self) -> seogen_common::Result<()> {
        if self.batch_size == 0 {
            return Err(seogen_common::Error::Config(
                "batch.batch_size must be > 0".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(seogen_common::Error::Config(
                "batch.concurrency must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Work items and results
// ============================================================================

/// One unit of generation work
#[derive(Debug, Clone)]
pub enum WorkItem {
    /// Game page
    Game {
        entity: Entity,
        related: Vec<RelatedItem>,
    },
    /// Category page
    Category {
        name: String,
        game_count: u64,
        sample: Option<Entity>,
    },
    /// Tag page
    Tag {
        name: String,
        game_count: u64,
        related_tags: Vec<String>,
        sample: Option<Entity>,
    },
}

impl WorkItem {
    /// Page kind
    pub fn kind(&self) -> EntityKind {
        match self {
            WorkItem::Game { .. } => EntityKind::Game,
            WorkItem::Category { .. } => EntityKind::Category,
            WorkItem::Tag { .. } => EntityKind::Tag,
        }
    }

    /// Key reported when no document could be built
    pub fn key(&self) -> String {
        match self {
            WorkItem::Game { entity, .. } if !entity.slug.trim().is_empty() => {
                entity.slug.trim().to_string()
            }
            WorkItem::Game { entity, .. } => entity.id.to_string(),
            WorkItem::Category { name, .. } => name.clone(),
            WorkItem::Tag { name, .. } => name.clone(),
        }
    }

    /// Catalog id, for games
    pub fn entity_id(&self) -> Option<u64> {
        match self {
            WorkItem::Game { entity, .. } => Some(entity.id),
            _ => None,
        }
    }
}

/// How an item settled
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Written to the output store
    Persisted { path: PathBuf },
    /// Below the quality gate
    Rejected { reason: String },
    /// Malformed input or I/O failure
    Failed { kind: FailureKind, error: String },
}

/// Final state of one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub kind: EntityKind,
    /// Output key (slug or id, category, tag, `home`)
    pub key: String,
    pub entity_id: Option<u64>,
    pub outcome: Outcome,
    /// Composite score; `None` when the gate is disabled or generation failed
    pub quality_score: Option<f64>,
}

impl GenerationResult {
    pub fn is_persisted(&self) -> bool {
        matches!(self.outcome, Outcome::Persisted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Failure category, `None` when persisted
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            Outcome::Persisted { .. } => None,
            Outcome::Rejected { .. } => Some(FailureKind::QualityRejected),
            Outcome::Failed { kind, .. } => Some(*kind),
        }
    }

    /// Rejection reason or error text
    pub fn reason(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Persisted { .. } => None,
            Outcome::Rejected { reason } => Some(reason),
            Outcome::Failed { error, .. } => Some(error),
        }
    }
}

/// A document that passed the gate and awaits persistence
struct Accepted {
    key: String,
    entity_id: Option<u64>,
    document: SeoDocument,
    quality_score: Option<f64>,
}

enum Gated {
    Accepted(Accepted),
    Settled(GenerationResult),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Drives collections through the generate/check/persist pipeline
pub struct BatchOrchestrator {
    config: BatchConfig,
    generator: SeoGenerator,
    checker: QualityChecker,
    store: Arc<dyn OutputStore>,
}

impl BatchOrchestrator {
    pub fn new(
        config: BatchConfig,
        generator: SeoGenerator,
        checker: QualityChecker,
        store: Arc<dyn OutputStore>,
    ) -> Self {
        Self {
            config,
            generator,
            checker,
            store,
        }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn generator(&self) -> &SeoGenerator {
        &self.generator
    }

    pub fn checker(&self) -> &QualityChecker {
        &self.checker
    }

    pub fn store(&self) -> &Arc<dyn OutputStore> {
        &self.store
    }

    /// Process a collection of one kind
    ///
    /// Returns one result per item, in input order. `observer` is notified
    /// after every batch.
    pub async fn process_collection(
        &self,
        items: Vec<WorkItem>,
        kind: EntityKind,
        observer: Option<&dyn ProgressObserver>,
    ) -> Vec<GenerationResult> {
        let total = items.len();
        let batch_size = self.config.batch_size.max(1);
        let concurrency = self.config.concurrency.max(1);
        let total_batches = total.div_ceil(batch_size);

        info!(kind = %kind, total, total_batches, batch_size, concurrency, "Processing collection");

        let mut progress = PhaseProgress::start(kind, total, total_batches);
        let mut results = Vec::with_capacity(total);

        for (batch_index, batch) in items.chunks(batch_size).enumerate() {
            for chunk in batch.chunks(concurrency) {
                for result in self.process_chunk(chunk).await {
                    progress.record(&result);
                    results.push(result);
                }
            }

            let snapshot = progress.snapshot(batch_index + 1);
            info!(
                kind = %kind,
                batch = snapshot.batch,
                total_batches,
                processed = snapshot.processed,
                total,
                successful = snapshot.successful,
                rejected = snapshot.rejected,
                failed = snapshot.failed,
                remaining = %seogen_common::human_time::format_millis(
                    snapshot.estimated_remaining_ms as u128
                ),
                "Batch complete"
            );
            if let Some(observer) = observer {
                observer.on_progress(&snapshot);
            }

            if batch_index + 1 < total_batches && self.config.batch_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.batch_delay_ms)).await;
            }
        }

        results
    }

    /// Process a single item end to end
    pub async fn process_item(&self, item: &WorkItem) -> GenerationResult {
        match self.prepare(item) {
            Gated::Accepted(accepted) => self.persist(accepted).await,
            Gated::Settled(result) => result,
        }
    }

    /// Generate, check and persist the home page document
    pub async fn process_home(&self, input: &HomeInput) -> GenerationResult {
        let document = SeoDocument::Home(self.generator.generate_home(input));
        match self.gate("home".to_string(), None, document) {
            Gated::Accepted(accepted) => self.persist(accepted).await,
            Gated::Settled(result) => result,
        }
    }

    async fn process_chunk(&self, chunk: &[WorkItem]) -> Vec<GenerationResult> {
        let gated: Vec<Gated> = chunk.iter().map(|item| self.prepare(item)).collect();

        let futures = gated.into_iter().map(|gated| async move {
            match gated {
                Gated::Accepted(accepted) => self.persist(accepted).await,
                Gated::Settled(result) => result,
            }
        });
        join_all(futures).await
    }

    /// Generate and score one item
    fn prepare(&self, item: &WorkItem) -> Gated {
        let generated = match item {
            WorkItem::Game { entity, related } => self
                .generator
                .generate_game(entity, related)
                .map(SeoDocument::Game),
            WorkItem::Category {
                name,
                game_count,
                sample,
            } => self
                .generator
                .generate_category(name, *game_count, sample.as_ref())
                .map(SeoDocument::Category),
            WorkItem::Tag {
                name,
                game_count,
                related_tags,
                sample,
            } => self
                .generator
                .generate_tag(name, *game_count, related_tags, sample.as_ref())
                .map(SeoDocument::Tag),
        };

        match generated {
            Ok(document) => self.gate(document.output_key(), item.entity_id(), document),
            Err(e) => Gated::Settled(failed(item.kind(), item.key(), item.entity_id(), None, &e)),
        }
    }

    /// Apply the quality gate to a generated document
    fn gate(&self, key: String, entity_id: Option<u64>, document: SeoDocument) -> Gated {
        let kind = document.kind();
        if !self.config.enable_quality_check {
            return Gated::Accepted(Accepted {
                key,
                entity_id,
                document,
                quality_score: None,
            });
        }

        let check = self.checker.check(&document);
        let threshold = self.checker.config().threshold_for(kind);
        let score = check.overall_score;

        if check.passes(threshold) {
            debug!(kind = %kind, key = %key, score, threshold, "Document accepted");
            return Gated::Accepted(Accepted {
                key,
                entity_id,
                document,
                quality_score: Some(score),
            });
        }

        let reason = format!(
            "{} ({})",
            GenerationError::QualityRejected { score, threshold },
            check.primary_reason()
        );
        warn!(kind = %kind, key = %key, score, threshold, reason = %reason, "Document rejected");
        Gated::Settled(GenerationResult {
            kind,
            key,
            entity_id,
            outcome: Outcome::Rejected { reason },
            quality_score: Some(score),
        })
    }

    async fn persist(&self, accepted: Accepted) -> GenerationResult {
        let Accepted {
            key,
            entity_id,
            document,
            quality_score,
        } = accepted;
        let kind = document.kind();

        match self.store.write_document(&document).await {
            Ok(path) => GenerationResult {
                kind,
                key,
                entity_id,
                outcome: Outcome::Persisted { path },
                quality_score,
            },
            Err(e) => failed(kind, key, entity_id, quality_score, &e),
        }
    }
}

fn failed(
    kind: EntityKind,
    key: String,
    entity_id: Option<u64>,
    quality_score: Option<f64>,
    error: &GenerationError,
) -> GenerationResult {
    warn!(kind = %kind, key = %key, error = %error, "Item failed");
    GenerationResult {
        kind,
        key,
        entity_id,
        outcome: Outcome::Failed {
            kind: error.failure_kind(),
            error: error.to_string(),
        },
        quality_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_config_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.batch_delay_ms, 100);
        assert!(config.enable_quality_check);
        assert!(config.generate_progress_report);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_batch_config_rejects_zero_sizes() {
        let config = BatchConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BatchConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_work_item_key_falls_back_to_id() {
        let item = WorkItem::Game {
            entity: Entity {
                id: 9,
                ..Default::default()
            },
            related: vec![],
        };
        assert_eq!(item.key(), "9");
        assert_eq!(item.entity_id(), Some(9));
        assert_eq!(item.kind(), EntityKind::Game);
    }

    #[test]
    fn test_result_accessors() {
        let result = GenerationResult {
            kind: EntityKind::Tag,
            key: "puzzle".to_string(),
            entity_id: None,
            outcome: Outcome::Rejected {
                reason: "low".to_string(),
            },
            quality_score: Some(0.3),
        };
        assert!(result.is_rejected());
        assert!(!result.is_persisted());
        assert_eq!(result.failure_kind(), Some(FailureKind::QualityRejected));
        assert_eq!(result.reason(), Some("low"));
    }
}

//! Full-dataset generation
//!
//! Loads the catalog once and runs the phases strictly in order:
//! games → categories → tags → home. Each phase is summarized on its own so
//! failures stay attributable; the home phase uses selections derived from
//! the catalog (featured games, top categories, latest games).

use super::batch::{BatchOrchestrator, GenerationResult, WorkItem};
use super::summary::{GenerationReport, PhaseSummary, RunSettings, RunTotals};
use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::generator::{HomeInput, PopularCategory};
use crate::templates::seeded_index;
use crate::types::{CatalogSnapshot, Entity, RelatedItem};
use chrono::Utc;
use seogen_common::{EntityKind, ProgressObserver};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Featured games shown on the home page
pub const HOME_FEATURED_MAX: usize = 6;
/// Categories shown on the home page
pub const HOME_CATEGORIES_MAX: usize = 8;
/// Latest games shown on the home page
pub const HOME_LATEST_MAX: usize = 8;
/// Related tags kept per tag
pub const RELATED_TAGS_MAX: usize = 5;
/// Minimum word Jaccard for two tags to be related
pub const RELATED_TAG_SIMILARITY: f64 = 0.3;

// ============================================================================
// Selection helpers
// ============================================================================

/// Related games for `entity`: other games in its primary category
///
/// The candidate list (catalog order) is rotated by a seeded offset so that
/// different games show different neighbours, then capped at `max`.
pub fn related_games(entity: &Entity, candidates: &[&Entity], max: usize) -> Vec<RelatedItem> {
    let others: Vec<&Entity> = candidates
        .iter()
        .copied()
        .filter(|c| c.id != entity.id)
        .collect();
    if others.is_empty() || max == 0 {
        return Vec::new();
    }

    let seed = if entity.slug.is_empty() {
        entity.id.to_string()
    } else {
        entity.slug.clone()
    };
    let offset = seeded_index(&seed, others.len());

    others
        .iter()
        .cycle()
        .skip(offset)
        .take(max.min(others.len()))
        .map(|e| RelatedItem::from(*e))
        .collect()
}

fn tag_words(tag: &str) -> HashSet<&str> {
    tag.split('-').filter(|w| !w.is_empty()).collect()
}

/// Tags whose hyphen-split words overlap `tag` with Jaccard above 0.3
///
/// Most similar first (ties by name), at most five.
pub fn related_tags<'a>(tag: &str, all_tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let words = tag_words(tag);
    let mut scored: Vec<(f64, &str)> = all_tags
        .into_iter()
        .filter(|other| *other != tag)
        .filter_map(|other| {
            let other_words = tag_words(other);
            let union = words.union(&other_words).count();
            if union == 0 {
                return None;
            }
            let similarity = words.intersection(&other_words).count() as f64 / union as f64;
            (similarity > RELATED_TAG_SIMILARITY).then_some((similarity, other))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(RELATED_TAGS_MAX)
        .map(|(_, t)| t.to_string())
        .collect()
}

/// Home page selections from a catalog snapshot
pub fn home_input(snapshot: &CatalogSnapshot) -> HomeInput {
    let featured = snapshot
        .entities
        .iter()
        .filter(|e| e.featured)
        .take(HOME_FEATURED_MAX)
        .map(RelatedItem::from)
        .collect();

    let mut popular: Vec<PopularCategory> = category_counts(snapshot)
        .into_iter()
        .map(|(name, count)| PopularCategory { name, count })
        .collect();
    popular.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    popular.truncate(HOME_CATEGORIES_MAX);

    let latest = snapshot
        .entities
        .iter()
        .take(HOME_LATEST_MAX)
        .map(RelatedItem::from)
        .collect();

    HomeInput {
        featured,
        popular_categories: popular,
        latest,
        total_games: snapshot.entities.len() as u64,
    }
}

/// Game count per category
///
/// `category-stats.json` wins over the index count; an index entry without a
/// count falls back to its id list.
fn category_counts(snapshot: &CatalogSnapshot) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = snapshot
        .categories
        .iter()
        .map(|(name, entry)| {
            let count = if entry.count > 0 {
                entry.count
            } else {
                entry.ids.len() as u64
            };
            (name.clone(), count)
        })
        .collect();
    for (name, count) in &snapshot.stats {
        counts.insert(name.clone(), *count);
    }
    counts
}

fn sample_entity(ids: &[u64], by_id: &HashMap<u64, &Entity>) -> Option<Entity> {
    ids.iter().find_map(|id| by_id.get(id)).map(|e| (*e).clone())
}

/// Build the work items for all three batched phases
pub fn build_work_items(
    snapshot: &CatalogSnapshot,
    max_related_games: usize,
) -> (Vec<WorkItem>, Vec<WorkItem>, Vec<WorkItem>) {
    let by_id: HashMap<u64, &Entity> = snapshot.entities.iter().map(|e| (e.id, e)).collect();

    let mut by_category: HashMap<&str, Vec<&Entity>> = HashMap::new();
    for entity in &snapshot.entities {
        let category = entity.category.trim();
        if !category.is_empty() {
            by_category.entry(category).or_default().push(entity);
        }
    }

    let games = snapshot
        .entities
        .iter()
        .map(|entity| {
            let candidates = by_category
                .get(entity.category.trim())
                .map(Vec::as_slice)
                .unwrap_or_default();
            WorkItem::Game {
                entity: entity.clone(),
                related: related_games(entity, candidates, max_related_games),
            }
        })
        .collect();

    let counts = category_counts(snapshot);
    let categories = counts
        .iter()
        .map(|(name, count)| WorkItem::Category {
            name: name.clone(),
            game_count: *count,
            sample: snapshot
                .categories
                .get(name)
                .and_then(|entry| sample_entity(&entry.ids, &by_id)),
        })
        .collect();

    let tag_names: Vec<&str> = snapshot.tags.keys().map(String::as_str).collect();
    let tags = snapshot
        .tags
        .iter()
        .map(|(name, entry)| WorkItem::Tag {
            name: name.clone(),
            game_count: if entry.count > 0 {
                entry.count
            } else {
                entry.ids.len() as u64
            },
            related_tags: related_tags(name, tag_names.iter().copied()),
            sample: sample_entity(&entry.ids, &by_id),
        })
        .collect();

    (games, categories, tags)
}

// ============================================================================
// Full run
// ============================================================================

impl BatchOrchestrator {
    /// Generate every document the catalog supports
    ///
    /// Per-item failures are recorded in the report. Only a catalog that
    /// cannot be loaded aborts the run.
    pub async fn generate_full_dataset(
        &self,
        catalog: &dyn CatalogProvider,
        observer: Option<&dyn ProgressObserver>,
    ) -> Result<GenerationReport> {
        let started = Instant::now();
        let run_id = Uuid::new_v4();
        let generated_at = Utc::now();
        info!(run_id = %run_id, "Starting full dataset generation");

        let snapshot = catalog.load().await?;
        let (games, categories, tags) =
            build_work_items(&snapshot, self.generator().config().max_related_games);

        let mut phases = Vec::with_capacity(3);
        let mut totals = RunTotals::default();
        for (kind, items) in [
            (EntityKind::Game, games),
            (EntityKind::Category, categories),
            (EntityKind::Tag, tags),
        ] {
            let summary = self.run_phase(kind, items, observer).await;
            totals.add_phase(&summary);
            phases.push(summary);
        }

        let input = home_input(&snapshot);
        info!(
            featured = input.featured.len(),
            categories = input.popular_categories.len(),
            latest = input.latest.len(),
            "Generating home page"
        );
        if let Some(observer) = observer {
            observer.on_phase_started(EntityKind::Home, 1);
        }
        let home = self.process_home(&input).await;
        if let Some(observer) = observer {
            let ok = usize::from(home.is_persisted());
            observer.on_phase_completed(EntityKind::Home, ok, 1 - ok);
        }
        totals.add_result(&home);

        let elapsed = started.elapsed();
        let processing_time_ms = elapsed.as_millis() as u64;
        let report = GenerationReport {
            run_id,
            generated_at,
            settings: RunSettings::new(
                self.config(),
                self.checker().config().threshold,
                &self.generator().config().base_url,
            ),
            phases,
            home,
            totals,
            processing_time_ms,
            processing_time: seogen_common::human_time::format_duration(elapsed),
        };

        if self.config().generate_progress_report {
            match self.store().write_report(&report).await {
                Ok(path) => info!(path = %path.display(), "Generation report written"),
                Err(e) => warn!(error = %e, "Failed to write generation report"),
            }
        }

        info!(
            run_id = %run_id,
            processed = totals.processed,
            successful = totals.successful,
            rejected = totals.rejected,
            failed = totals.failed,
            elapsed = %report.processing_time,
            "Full dataset generation complete"
        );
        Ok(report)
    }

    async fn run_phase(
        &self,
        kind: EntityKind,
        items: Vec<WorkItem>,
        observer: Option<&dyn ProgressObserver>,
    ) -> PhaseSummary {
        if let Some(observer) = observer {
            observer.on_phase_started(kind, items.len());
        }
        let results: Vec<GenerationResult> = self.process_collection(items, kind, observer).await;
        let summary = PhaseSummary::from_results(kind, &results);
        if let Some(observer) = observer {
            observer.on_phase_completed(kind, summary.successful, summary.unsuccessful());
        }
        info!(
            kind = %kind,
            total = summary.total,
            successful = summary.successful,
            rejected = summary.rejected,
            failed = summary.failed,
            average_quality = summary.average_quality,
            "Phase complete"
        );
        summary
    }
}

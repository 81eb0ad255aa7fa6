//! Run summary and report
//!
//! [`PhaseSummary`] aggregates the results of one phase; [`GenerationReport`]
//! is what ends up in `generation-report.json`.

use super::batch::{BatchConfig, GenerationResult};
use crate::error::FailureKind;
use chrono::{DateTime, Utc};
use seogen_common::EntityKind;
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// One item that did not end up persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureRecord {
    pub key: String,
    pub entity_id: Option<u64>,
    pub kind: FailureKind,
    pub reason: String,
    pub score: Option<f64>,
}

/// Totals for one phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummary {
    pub kind: EntityKind,
    pub total: usize,
    pub successful: usize,
    pub rejected: usize,
    pub failed: usize,
    /// Mean composite score over the items that were scored, 0 if none
    pub average_quality: f64,
    pub failures: Vec<FailureRecord>,
}

impl PhaseSummary {
    pub fn from_results(kind: EntityKind, results: &[GenerationResult]) -> Self {
        let successful = results.iter().filter(|r| r.is_persisted()).count();
        let rejected = results.iter().filter(|r| r.is_rejected()).count();
        let failed = results.iter().filter(|r| r.is_failed()).count();

        let failures = results
            .iter()
            .filter_map(|r| {
                let kind = r.failure_kind()?;
                Some(FailureRecord {
                    key: r.key.clone(),
                    entity_id: r.entity_id,
                    kind,
                    reason: r.reason().unwrap_or_default().to_string(),
                    score: r.quality_score,
                })
            })
            .collect();

        Self {
            kind,
            total: results.len(),
            successful,
            rejected,
            failed,
            average_quality: average_quality(results),
            failures,
        }
    }

    /// Items not persisted
    pub fn unsuccessful(&self) -> usize {
        self.rejected + self.failed
    }
}

/// Mean of the available quality scores, 0 when nothing was scored
pub fn average_quality(results: &[GenerationResult]) -> f64 {
    let scores: Vec<f64> = results.iter().filter_map(|r| r.quality_score).collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Run-wide totals (home counts as one item)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub processed: usize,
    pub successful: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl RunTotals {
    pub fn add_phase(&mut self, phase: &PhaseSummary) {
        self.processed += phase.total;
        self.successful += phase.successful;
        self.rejected += phase.rejected;
        self.failed += phase.failed;
    }

    pub fn add_result(&mut self, result: &GenerationResult) {
        self.processed += 1;
        if result.is_persisted() {
            self.successful += 1;
        } else if result.is_rejected() {
            self.rejected += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Settings the run used, echoed into the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSettings {
    pub output_dir: PathBuf,
    pub batch_size: usize,
    pub concurrency: usize,
    pub enable_quality_check: bool,
    pub quality_threshold: f64,
    pub base_url: String,
}

impl RunSettings {
    pub fn new(batch: &BatchConfig, quality_threshold: f64, base_url: &str) -> Self {
        Self {
            output_dir: batch.output_dir.clone(),
            batch_size: batch.batch_size,
            concurrency: batch.concurrency,
            enable_quality_check: batch.enable_quality_check,
            quality_threshold,
            base_url: base_url.to_string(),
        }
    }
}

/// Full-run report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub settings: RunSettings,
    /// Game, category and tag phases, in run order
    pub phases: Vec<PhaseSummary>,
    pub home: GenerationResult,
    pub totals: RunTotals,
    pub processing_time_ms: u64,
    /// `processing_time_ms` formatted for humans
    pub processing_time: String,
}

impl GenerationReport {
    /// Summary for a phase, if it ran
    pub fn phase(&self, kind: EntityKind) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::batch::Outcome;

    fn result(key: &str, outcome: Outcome, score: Option<f64>) -> GenerationResult {
        GenerationResult {
            kind: EntityKind::Category,
            key: key.to_string(),
            entity_id: None,
            outcome,
            quality_score: score,
        }
    }

    #[test]
    fn test_phase_summary_counts_and_failures() {
        let results = vec![
            result(
                "action",
                Outcome::Persisted {
                    path: PathBuf::from("categories/action.json"),
                },
                Some(0.9),
            ),
            result(
                "puzzle",
                Outcome::Rejected {
                    reason: "too similar".to_string(),
                },
                Some(0.5),
            ),
            result(
                "racing",
                Outcome::Failed {
                    kind: FailureKind::IoFailure,
                    error: "disk full".to_string(),
                },
                Some(0.7),
            ),
        ];

        let summary = PhaseSummary::from_results(EntityKind::Category, &results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.unsuccessful(), 2);
        assert!((summary.average_quality - 0.7).abs() < 1e-9);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].kind, FailureKind::QualityRejected);
        assert_eq!(summary.failures[1].reason, "disk full");
    }

    #[test]
    fn test_average_quality_without_scores() {
        let results = vec![result(
            "x",
            Outcome::Persisted {
                path: PathBuf::from("x.json"),
            },
            None,
        )];
        assert_eq!(average_quality(&results), 0.0);
        assert_eq!(average_quality(&[]), 0.0);
    }

    #[test]
    fn test_run_totals() {
        let mut totals = RunTotals::default();
        let phase = PhaseSummary {
            kind: EntityKind::Game,
            total: 10,
            successful: 7,
            rejected: 2,
            failed: 1,
            average_quality: 0.8,
            failures: vec![],
        };
        totals.add_phase(&phase);
        totals.add_result(&result(
            "home",
            Outcome::Persisted {
                path: PathBuf::from("home.json"),
            },
            Some(0.9),
        ));
        assert_eq!(
            totals,
            RunTotals {
                processed: 11,
                successful: 8,
                rejected: 2,
                failed: 1
            }
        );
    }
}

//! Phase progress tracking
//!
//! Tallies outcomes as chunks settle and builds the per-batch
//! [`ProgressSnapshot`] with a linear time-remaining estimate.

use super::batch::GenerationResult;
use seogen_common::{EntityKind, ProgressSnapshot};
use std::time::Instant;

/// Remaining time extrapolated from the average time per processed item
///
/// Returns 0 before anything has been processed or once everything has.
pub fn estimate_remaining_ms(elapsed_ms: u64, processed: usize, total: usize) -> u64 {
    if processed == 0 || processed >= total {
        return 0;
    }
    let per_item = elapsed_ms as f64 / processed as f64;
    (per_item * (total - processed) as f64).round() as u64
}

/// Running counters for one phase
#[derive(Debug)]
pub struct PhaseProgress {
    kind: EntityKind,
    total: usize,
    total_batches: usize,
    started: Instant,
    successful: usize,
    rejected: usize,
    failed: usize,
}

impl PhaseProgress {
    /// Start tracking a phase of `total` items split into `total_batches`
    pub fn start(kind: EntityKind, total: usize, total_batches: usize) -> Self {
        Self {
            kind,
            total,
            total_batches,
            started: Instant::now(),
            successful: 0,
            rejected: 0,
            failed: 0,
        }
    }

    /// Count one settled item
    pub fn record(&mut self, result: &GenerationResult) {
        if result.is_persisted() {
            self.successful += 1;
        } else if result.is_rejected() {
            self.rejected += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Items settled so far
    pub fn processed(&self) -> usize {
        self.successful + self.rejected + self.failed
    }

    /// Snapshot after batch `batch` (1-based)
    pub fn snapshot(&self, batch: usize) -> ProgressSnapshot {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let processed = self.processed();
        ProgressSnapshot {
            kind: self.kind,
            batch,
            total_batches: self.total_batches,
            total: self.total,
            processed,
            successful: self.successful,
            rejected: self.rejected,
            failed: self.failed,
            elapsed_ms,
            estimated_remaining_ms: estimate_remaining_ms(elapsed_ms, processed, self.total),
        }
    }
}

//! Generation workflow
//!
//! - **batch** - batch orchestrator, work items, per-item results, the gate
//! - **progress** - per-phase counters and time-remaining estimate
//! - **summary** - phase summaries and the run report
//! - **dataset** - full catalog run (games → categories → tags → home)

pub mod batch;
pub mod dataset;
pub mod progress;
pub mod summary;

pub use batch::{BatchConfig, BatchOrchestrator, GenerationResult, Outcome, WorkItem};
pub use dataset::{build_work_items, home_input, related_games, related_tags};
pub use summary::{FailureRecord, GenerationReport, PhaseSummary, RunSettings, RunTotals};

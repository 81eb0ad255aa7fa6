//! Quality validation
//!
//! - **text_metrics** - tokenization, similarity and readability heuristics
//! - **duplicate_cache** - bounded title/description caches
//! - **quality_checker** - three-dimension scoring and the per-run caches

pub mod duplicate_cache;
pub mod quality_checker;
pub mod text_metrics;

pub use duplicate_cache::{BoundedCache, CacheStats, DuplicateCaches};
pub use quality_checker::{
    CheckDetails, DensityBand, LengthRange, QualityCheckResult, QualityChecker, QualityConfig,
    QualityWeights, ThresholdOverrides,
};

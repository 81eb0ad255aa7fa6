//! Error types for seogen
//!
//! Per-entity errors are caught inside the single-item operation and turned
//! into a [`FailureKind`] on the item's result. Only [`GenerationError::FatalConfig`]
//! and a catalog that cannot be decoded abort a whole run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Generation pipeline error
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Entity record lacks fields needed to build any document
    #[error("Malformed input: {0}")]
    InputMalformed(String),

    /// Composite quality score below the gate threshold
    #[error("Quality score {score:.3} below threshold {threshold:.3}")]
    QualityRejected {
        /// Composite score
        score: f64,
        /// Gate threshold in effect
        threshold: f64,
    },

    /// Output write or catalog read failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template registry or run configuration unusable
    #[error("Fatal configuration error: {0}")]
    FatalConfig(String),

    /// seogen-common error
    #[error("Common error: {0}")]
    Common(#[from] seogen_common::Error),
}

/// Failure category recorded in the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InputMalformed,
    QualityRejected,
    IoFailure,
    FatalConfig,
}

impl GenerationError {
    /// Summary category for this error
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            GenerationError::InputMalformed(_) => FailureKind::InputMalformed,
            GenerationError::QualityRejected { .. } => FailureKind::QualityRejected,
            GenerationError::Io(_) | GenerationError::Serialization(_) => FailureKind::IoFailure,
            GenerationError::FatalConfig(_) => FailureKind::FatalConfig,
            GenerationError::Common(err) => match err {
                seogen_common::Error::Config(_) => FailureKind::FatalConfig,
                seogen_common::Error::InvalidInput(_) => FailureKind::InputMalformed,
                _ => FailureKind::IoFailure,
            },
        }
    }

    /// True if the run must stop
    pub fn is_fatal(&self) -> bool {
        self.failure_kind() == FailureKind::FatalConfig
    }
}

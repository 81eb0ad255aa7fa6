//! seogen - SEO metadata generation for a browser-game catalog
//!
//! Bulk-generates titles, descriptions, keywords, Open Graph/Twitter cards
//! and structured data for every game, category, tag and the home page, scores
//! each document for uniqueness, SEO compliance and content quality, and
//! persists only the documents that clear the quality gate.
//!
//! # Architecture
//! ```text
//! CatalogProvider → BatchOrchestrator → SeoGenerator (TemplateRegistry)
//!                                     → QualityChecker → gate
//!                                     → OutputStore
//!                                     → GenerationReport
//! ```
//!
//! Everything except the catalog and the output store is synchronous and
//! deterministic; the same catalog, templates and configuration produce the
//! same documents on every run.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod templates;
pub mod types;
pub mod validators;
pub mod workflow;

pub use crate::config::SeoGenConfig;
pub use crate::error::{FailureKind, GenerationError, Result};

use crate::catalog::JsonCatalog;
use crate::generator::SeoGenerator;
use crate::output::JsonFileStore;
use crate::templates::TemplateRegistry;
use crate::validators::QualityChecker;
use crate::workflow::{BatchOrchestrator, GenerationReport};
use seogen_common::ProgressObserver;
use std::sync::Arc;

/// Template registry named by the configuration, or the built-in one
pub fn load_templates(config: &SeoGenConfig) -> Result<TemplateRegistry> {
    match &config.templates {
        Some(path) => TemplateRegistry::load(path),
        None => Ok(TemplateRegistry::builtin()),
    }
}

/// Orchestrator writing JSON files under `config.batch.output_dir`
pub fn build_orchestrator(config: &SeoGenConfig, registry: TemplateRegistry) -> BatchOrchestrator {
    let generator = SeoGenerator::new(config.generator.clone(), Arc::new(registry));
    let checker = QualityChecker::new(config.quality.clone());
    let store = Arc::new(JsonFileStore::new(config.batch.output_dir.clone()));
    BatchOrchestrator::new(config.batch.clone(), generator, checker, store)
}

/// Validate the configuration and generate the full dataset
///
/// # Errors
/// [`GenerationError::FatalConfig`] for an invalid configuration or template
/// file; catalog errors when the catalog cannot be read. Per-item failures
/// are reported in the returned [`GenerationReport`].
pub async fn run(
    config: &SeoGenConfig,
    observer: Option<&dyn ProgressObserver>,
) -> Result<GenerationReport> {
    config
        .validate()
        .map_err(|e| GenerationError::FatalConfig(e.to_string()))?;
    let registry = load_templates(config)?;
    let orchestrator = build_orchestrator(config, registry);
    let catalog = JsonCatalog::new(config.catalog_dir.clone());
    orchestrator.generate_full_dataset(&catalog, observer).await
}

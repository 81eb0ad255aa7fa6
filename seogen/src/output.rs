//! Output store
//!
//! Persists accepted documents and the run report. Layout under the root:
//!
//! ```text
//! {root}/games/{slug}.json
//! {root}/categories/{category}.json
//! {root}/tags/{tag}.json
//! {root}/home.json
//! {root}/generation-report.json
//! ```
//!
//! Writes replace the whole file, so regenerating a document is idempotent.

use crate::error::{GenerationError, Result};
use crate::types::SeoDocument;
use crate::workflow::GenerationReport;
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report file name
pub const REPORT_FILE: &str = "generation-report.json";

/// Home document file name
pub const HOME_FILE: &str = "home.json";

/// Destination for generated documents
#[async_trait]
pub trait OutputStore: Send + Sync {
    /// Persist one document, fully replacing any previous version
    ///
    /// Returns the location written.
    async fn write_document(&self, document: &SeoDocument) -> Result<PathBuf>;

    /// Persist the run report
    async fn write_report(&self, report: &GenerationReport) -> Result<PathBuf>;
}

/// Pretty-printed JSON files under a root directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a document is written to
    pub fn document_path(&self, document: &SeoDocument) -> Result<PathBuf> {
        let kind = document.kind();
        if kind == seogen_common::EntityKind::Home {
            return Ok(self.root.join(HOME_FILE));
        }
        let key = document.output_key();
        check_key(&key)?;
        Ok(self
            .root
            .join(kind.dir_name())
            .join(format!("{}.json", key)))
    }
}

/// Reject keys that would escape the kind directory
fn check_key(key: &str) -> Result<()> {
    if key.is_empty()
        || key == "."
        || key.contains("..")
        || key.contains('/')
        || key.contains('\\')
    {
        return Err(GenerationError::InputMalformed(format!(
            "unusable output key '{}'",
            key
        )));
    }
    Ok(())
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[async_trait]
impl OutputStore for JsonFileStore {
    async fn write_document(&self, document: &SeoDocument) -> Result<PathBuf> {
        let path = self.document_path(document)?;
        write_json(&path, document).await?;
        debug!(kind = %document.kind(), path = %path.display(), "Document written");
        Ok(path)
    }

    async fn write_report(&self, report: &GenerationReport) -> Result<PathBuf> {
        let path = self.root.join(REPORT_FILE);
        write_json(&path, report).await?;
        debug!(path = %path.display(), "Report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("jungle-run").is_ok());
        assert!(check_key("v1.2").is_ok());
        assert!(check_key("").is_err());
        assert!(check_key("..").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key("a\\b").is_err());
        assert!(check_key("../etc").is_err());
    }
}

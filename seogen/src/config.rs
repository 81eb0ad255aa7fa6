//! Run configuration
//!
//! One TOML file, every field optional:
//!
//! ```toml
//! catalog_dir = "data"
//! templates = "templates.toml"   # optional override file
//!
//! [batch]
//! output_dir = "output/seo"
//! batch_size = 10
//! concurrency = 5
//!
//! [generator]
//! base_url = "https://playbrowserminigames.com"
//! site_name = "Play Browser Mini Games"
//!
//! [quality]
//! threshold = 0.6
//! overrides = { home = 0.8 }
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Resolution order for the file itself lives in
//! [`seogen_common::config::resolve_config_path`].

use crate::generator::GeneratorConfig;
use crate::validators::QualityConfig;
use crate::workflow::BatchConfig;
use seogen_common::config::{load_toml_or_default, parse_toml, resolve_config_path, LoggingConfig};
use seogen_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete seogen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoGenConfig {
    /// Directory holding the catalog JSON files
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,

    /// Template override file (built-in templates when absent)
    #[serde(default)]
    pub templates: Option<PathBuf>,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub quality: QualityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for SeoGenConfig {
    fn default() -> Self {
        Self {
            catalog_dir: default_catalog_dir(),
            templates: None,
            batch: BatchConfig::default(),
            generator: GeneratorConfig::default(),
            quality: QualityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SeoGenConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content)
    }

    /// Load from the resolved config path, or defaults when there is none
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(cli_path, seogen_common::config::CONFIG_ENV_VAR);
        load_toml_or_default(path.as_deref())
    }

    /// Check every section before any entity is processed
    pub fn validate(&self) -> Result<()> {
        self.batch.validate()?;
        self.quality.validate()?;

        let generator = &self.generator;
        if generator.base_url.trim().is_empty() {
            return Err(Error::Config("generator.base_url must not be empty".to_string()));
        }
        if generator.title_max_length == 0 || generator.description_max_length == 0 {
            return Err(Error::Config(
                "generator title/description limits must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

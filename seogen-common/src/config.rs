//! Configuration file resolution, TOML loading and logging setup
//!
//! Config file resolution follows a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. `seogen.toml` in the user configuration directory
//! 4. None (caller falls back to compiled defaults)
//!
//! A missing config file is never fatal: callers log a warning and use
//! built-in defaults. A config file that exists but does not parse is an error.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the config file path
pub const CONFIG_ENV_VAR: &str = "SEOGEN_CONFIG";

/// Config file name looked up in the user configuration directory
pub const CONFIG_FILE_NAME: &str = "seogen.toml";

/// Logging configuration (`[logging]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolve the config file path
///
/// Returns `None` when neither the CLI, the environment nor the user config
/// directory provide a file.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: User config directory
    dirs::config_dir()
        .map(|d| d.join("seogen").join(CONFIG_FILE_NAME))
        .filter(|p| p.exists())
}

/// Parse a TOML document into `T`
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T> {
    Ok(toml::from_str(content)?)
}

/// Load and parse a TOML file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(format!("config file {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;
    parse_toml(&content)
}

/// Load a TOML file, falling back to `T::default()` when the file is missing
///
/// Parse errors are still reported: a present-but-broken config should not
/// silently turn into defaults.
pub fn load_toml_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        info!("No config file found, using built-in defaults");
        return Ok(T::default());
    };

    match load_toml(path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        Err(Error::NotFound(_)) => {
            warn!(path = %path.display(), "Config file not found, using built-in defaults");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

/// Initialize the global tracing subscriber from `[logging]`
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| Error::Config(format!("Logging already initialized: {}", e)))
}

//! seogen - command-line entry point
//!
//! Loads the configuration (CLI → `SEOGEN_CONFIG` → user config dir →
//! defaults), applies command-line overrides, initializes logging and runs
//! the full dataset generation. [`seogen::run`] validates the configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use seogen::SeoGenConfig;
use seogen_common::config::init_logging;
use seogen_common::human_time::format_millis;
use seogen_common::ProgressSnapshot;
use tracing::info;

/// Command-line arguments for seogen
#[derive(Parser, Debug)]
#[command(name = "seogen")]
#[command(about = "Generate and quality-check SEO metadata for a game catalog")]
#[command(version)]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the catalog JSON files
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site base URL for canonical and image links
    #[arg(long)]
    base_url: Option<String>,

    /// Persist every generated document without scoring
    #[arg(long)]
    no_quality_check: bool,

    /// Template override file (TOML)
    #[arg(long)]
    templates: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut SeoGenConfig) {
        if let Some(dir) = self.catalog_dir {
            config.catalog_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.batch.output_dir = dir;
        }
        if let Some(url) = self.base_url {
            config.generator.base_url = url;
        }
        if self.no_quality_check {
            config.batch.enable_quality_check = false;
        }
        if let Some(path) = self.templates {
            config.templates = Some(path);
        }
    }
}

fn log_progress(snapshot: &ProgressSnapshot) {
    info!(
        "[{}] batch {}/{}: {}/{} done ({} ok, {} rejected, {} failed), ~{} remaining",
        snapshot.kind,
        snapshot.batch,
        snapshot.total_batches,
        snapshot.processed,
        snapshot.total,
        snapshot.successful,
        snapshot.rejected,
        snapshot.failed,
        format_millis(snapshot.estimated_remaining_ms as u128)
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();

    let config_path = args.config.take();
    let mut config =
        SeoGenConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("Starting seogen {}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {}", config.catalog_dir.display());
    info!("Output: {}", config.batch.output_dir.display());

    let report = seogen::run(&config, Some(&log_progress))
        .await
        .context("Generation failed")?;

    for phase in &report.phases {
        info!(
            "{}: {} total, {} persisted, {} rejected, {} failed, average quality {:.3}",
            phase.kind,
            phase.total,
            phase.successful,
            phase.rejected,
            phase.failed,
            phase.average_quality
        );
    }
    info!(
        "Done in {}: {} of {} documents persisted",
        report.processing_time, report.totals.successful, report.totals.processed
    );
    Ok(())
}

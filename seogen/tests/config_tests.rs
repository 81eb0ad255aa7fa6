//! Configuration loading for the seogen binary
//!
//! Tests that touch SEOGEN_CONFIG are marked #[serial].

use seogen::templates::{Genre, TemplateRegistry};
use seogen::SeoGenConfig;
use seogen_common::config::CONFIG_ENV_VAR;
use seogen_common::EntityKind;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../demos")
        .join(name)
}

#[test]
fn test_demo_config_is_valid() {
    let content = std::fs::read_to_string(demo("seogen.toml")).unwrap();
    let config = SeoGenConfig::from_toml_str(&content).unwrap();
    config.validate().unwrap();

    assert_eq!(config.batch.batch_size, 10);
    assert_eq!(config.generator.site_name, "Play Browser Mini Games");
    assert_eq!(config.quality.threshold_for(EntityKind::Game), 0.6);
    assert_eq!(config.quality.threshold_for(EntityKind::Category), 0.7);
    assert_eq!(config.quality.threshold_for(EntityKind::Home), 0.8);
}

#[test]
fn test_demo_templates_load() {
    let registry = TemplateRegistry::load(&demo("templates.toml")).unwrap();
    assert!(registry.genre_set(Genre::Puzzle).titles[0].contains("Puzzle"));
    // no racing section: default set applies
    assert_eq!(
        registry.game_set("racing").titles,
        registry.genre_set(Genre::Default).titles
    );
}

#[test]
#[serial]
fn test_load_uses_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "catalog_dir = \"from-env\"\n[batch]\nconcurrency = 2\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &path);

    let config = SeoGenConfig::load(None).unwrap();
    assert_eq!(config.catalog_dir, PathBuf::from("from-env"));
    assert_eq!(config.batch.concurrency, 2);

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_cli_path_wins_over_env_var() {
    let dir = TempDir::new().unwrap();
    let env_path = dir.path().join("env.toml");
    let cli_path = dir.path().join("cli.toml");
    std::fs::write(&env_path, "catalog_dir = \"env\"\n").unwrap();
    std::fs::write(&cli_path, "catalog_dir = \"cli\"\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = SeoGenConfig::load(Some(&cli_path)).unwrap();
    assert_eq!(config.catalog_dir, PathBuf::from("cli"));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.toml"));

    let config = SeoGenConfig::load(None).unwrap();
    assert_eq!(config, SeoGenConfig::default());

    env::remove_var(CONFIG_ENV_VAR);
}

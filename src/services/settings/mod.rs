//! Configuration loading and saving.
//!
//! The portal config lives in a TOML file under the platform config
//! directory. A missing file yields defaults so a fresh checkout works
//! without setup.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::PortalConfig;

const CONFIG_FILE: &str = "config.toml";

/// Platform path of the config file.
pub fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "lab-portal", "lab-calendar")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

/// Load the config from the platform location, falling back to defaults
/// when no file exists yet.
pub fn load() -> Result<PortalConfig> {
    load_from(&config_path()?)
}

/// Persist the config to the platform location.
pub fn save(config: &PortalConfig) -> Result<()> {
    save_to(config, &config_path()?)
}

fn load_from(path: &Path) -> Result<PortalConfig> {
    if !path.exists() {
        log::info!("No config file at {:?}, using defaults", path);
        return Ok(PortalConfig::default());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config file {:?}", path))
}

fn save_to(config: &PortalConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, text).with_context(|| format!("Failed to write config file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = PortalConfig::default();
        config.api_base_url = "https://lab.example.org/api".to_string();
        config.max_retries = 5;

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = [not toml").unwrap();

        assert!(load_from(&path).is_err());
    }
}

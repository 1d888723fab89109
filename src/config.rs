use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::page::Page;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default)]
    pub reduce_motion: bool,
    #[serde(default)]
    pub page: Page,
}

/// Determine the config file path with fallback logic
fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/foliotui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("foliotui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config anywhere: run with the built-in sample page
    Ok(None)
}

/// Load configuration, falling back to defaults when no file exists.
/// A CLI-supplied path that does not exist is an error; the search paths
/// are allowed to be absent.
pub fn load(cli_path: Option<String>) -> Result<Config> {
    match find_config_path(cli_path)? {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let config = serde_yaml::from_str(&raw)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

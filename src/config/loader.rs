//! Configuration file discovery and loading.

use crate::config::schema::PickyConfig;
use crate::error::{PickyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = ".picky.yml";

/// Path of the project configuration file under `project_root`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Parse YAML content into PickyConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PickyConfig> {
    // An empty file deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(PickyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PickyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// Returns defaults when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<PickyConfig> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("Loading config from {}", path.display());
            parse_config(&content, path)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(PickyConfig::default())
        }
        Err(e) => Err(PickyError::Io(e)),
    }
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads that file; otherwise loads
/// `.picky.yml` from the project root.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PickyConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_config_file(&config_path(project_root)),
    }
}

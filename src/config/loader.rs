//! Configuration file discovery and loading.

use crate::config::schema::ShiplaneConfig;
use crate::error::{Result, ShiplaneError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding shiplane files inside a project.
pub const CONFIG_DIR: &str = ".shiplane";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Default project config location: `<project_root>/.shiplane/config.yml`.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Parse YAML content into ShiplaneConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShiplaneConfig> {
    // An empty file deserializes as YAML null
    if content.trim().is_empty() {
        return Ok(ShiplaneConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShiplaneError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ShiplaneConfig>> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content, path).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ShiplaneError::Io(e)),
    }
}

/// Load the lane config for a project.
///
/// An explicit `config_override` must exist; the default location is
/// optional and falls back to [`ShiplaneConfig::default`].
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ShiplaneConfig> {
    if let Some(path) = config_override {
        return load_config_file(path)?.ok_or_else(|| {
            ShiplaneError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            ))
        });
    }

    let path = default_config_path(project_root);
    match load_config_file(&path)? {
        Some(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(ShiplaneConfig::default())
        }
    }
}

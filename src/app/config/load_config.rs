use std::fs;
use std::path::Path;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, BuilderConfig};

/// Load `cfrelease.toml` from `dir`, falling back to built-in defaults when absent.
pub fn load_config(dir: &Path) -> Result<BuilderConfig, AppError> {
    let path = dir.join(paths::CONFIG_FILE);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no configuration file; using defaults");
        return Ok(BuilderConfig::default());
    }
    load_config_file(&path)
}

/// Load an explicitly requested configuration file. A missing file is an error.
pub fn load_config_file(path: &Path) -> Result<BuilderConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let config = config::parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

//! Pure parse/validate for builder configuration (`cfrelease.toml`).

use crate::domain::AppError;
use crate::domain::config::BuilderConfig;

/// Parse and validate builder configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BuilderConfig, AppError> {
    let config: BuilderConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Render configuration back to TOML.
pub fn render_config(config: &BuilderConfig) -> Result<String, AppError> {
    toml::to_string_pretty(config)
        .map_err(|e| AppError::config_error(format!("Failed to render configuration: {e}")))
}

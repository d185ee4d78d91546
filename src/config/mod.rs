pub mod types;

pub use types::{AnalysisConfig, Config, OutputConfig, VersionDefaults};

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;

/// Picked up from the project directory when no `--config` is given.
pub const PROJECT_CONFIG_FILE: &str = ".dockerfile-gen.toml";

/// Load configuration from file or use defaults.
///
/// An explicit `path` must exist. Without one, `.dockerfile-gen.toml` in
/// `project_root` is used when present; otherwise the built-in defaults apply.
pub fn load_config(path: Option<&Path>, project_root: &Path) -> Result<Config> {
    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingConfig(path.to_path_buf()).into());
        }
        return parse_config_file(path);
    }

    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        log::debug!("Using project configuration {}", project_config.display());
        return parse_config_file(&project_config);
    }

    log::debug!("No configuration file found, using defaults");
    Ok(Config::default())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;
    parse_config(&content)
        .map_err(|e| ConfigError::ParsingFailed(format!("{}: {}", path.display(), e)).into())
}

/// Parse a TOML configuration document; missing keys take their defaults.
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

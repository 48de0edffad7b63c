//! Configuration file discovery and loading.
//!
//! The config file is chosen in this order:
//! 1. Explicit path (`--config`)
//! 2. `ENVPICKER_CONFIG` environment variable
//! 3. `.envpicker/config.yml` under the project root
//!
//! With no file at all the built-in defaults apply. A file that was named
//! explicitly must exist.

use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::PickerConfig;
use crate::error::{PickerError, Result};

/// Variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "ENVPICKER_CONFIG";

/// Find the project config at `.envpicker/config.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(".envpicker").join("config.yml");
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse configuration from a YAML string.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid and
/// `ConfigValidationError` if it holds unusable values.
pub fn parse_config(content: &str, source: &Path) -> Result<PickerConfig> {
    if content.trim().is_empty() {
        return Ok(PickerConfig::default());
    }
    let config: PickerConfig =
        serde_yaml::from_str(content).map_err(|e| PickerError::ConfigParseError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a single file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PickerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PickerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PickerError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Load configuration for a project.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<PickerConfig> {
    load_config_with_env(explicit, project_root, |key| std::env::var(key))
}

/// Load configuration with a custom env var lookup (for testing).
pub fn load_config_with_env<F>(
    explicit: Option<&Path>,
    project_root: &Path,
    env_fn: F,
) -> Result<PickerConfig>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    if let Some(path) = env_fn(CONFIG_ENV_VAR).ok().filter(|p| !p.trim().is_empty()) {
        return load_config_file(Path::new(&path));
    }

    match find_project_config(project_root) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(PickerConfig::default())
        }
    }
}

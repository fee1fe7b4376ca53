//! Configuration file discovery and loading.

use crate::config::schema::LintConfig;
use crate::error::{LintgateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project config file, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".lintgate.yml";

/// Location of the project config file, if any.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into LintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintgateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintgateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into LintConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LintgateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project's `.lintgate.yml` is used when present, and defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LintConfig> {
    if let Some(override_path) = config_override {
        let path = if override_path.is_absolute() {
            override_path.to_path_buf()
        } else {
            project_root.join(override_path)
        };
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(&path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!(
                "No {} in {}; using defaults",
                CONFIG_FILE_NAME,
                project_root.display()
            );
            Ok(LintConfig::default())
        }
    }
}

//! Configuration validation rules.
//!
//! - `tool` must be non-empty
//! - `env_dir` must be non-empty
//! - `env` keys must be non-empty and contain no `=`

use crate::config::schema::LintConfig;
use crate::error::{LintgateError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &LintConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.tool.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-tool".to_string(),
            message: "'tool' must name the lint tool to run".to_string(),
        });
    }

    if config.env_dir.as_os_str().is_empty() {
        errors.push(ValidationError {
            rule: "empty-env-dir".to_string(),
            message: "'env_dir' must name the dependency environment directory".to_string(),
        });
    }

    let mut keys: Vec<_> = config.env.keys().collect();
    keys.sort();
    for key in keys {
        if key.is_empty() || key.contains('=') {
            errors.push(ValidationError {
                rule: "invalid-env-key".to_string(),
                message: format!("'env' has invalid variable name '{}'", key),
            });
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &LintConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LintgateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&LintConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_tool() {
        let config = LintConfig {
            tool: "  ".to_string(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-tool"));
    }

    #[test]
    fn rejects_empty_env_dir() {
        let config = LintConfig {
            env_dir: PathBuf::new(),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-env-dir"));
    }

    #[test]
    fn rejects_env_key_with_equals() {
        let mut config = LintConfig::default();
        config.env.insert("A=B".to_string(), "c".to_string());
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "invalid-env-key"));
    }

    #[test]
    fn validate_joins_all_messages() {
        let config = LintConfig {
            tool: String::new(),
            env_dir: PathBuf::new(),
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("tool"));
        assert!(msg.contains("env_dir"));
    }
}

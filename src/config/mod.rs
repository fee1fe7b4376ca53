//! Configuration loading, parsing, and validation for lintgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - `KEY=value` files in [`env_file`]
//!
//! # Example
//!
//! ```
//! use lintgate::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".lintgate.yml"), "tool: ruff\nargs: [check, .]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.tool, "ruff");
//! ```
//!
//! # Precedence
//!
//! 1. Built-in defaults (`flake8 .` inside `venv/`)
//! 2. Project config (`.lintgate.yml`, or the file passed with `--config`)
//! 3. Command-line overrides

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::EnvFileParser;
pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{ConfigOverrides, LintConfig, OutputMode};
pub use validator::{validate, validate_config, ValidationError};

//! Configuration schema definitions for lintgate.
//!
//! These structs map to the `.lintgate.yml` file format. Every field has a
//! default, so an absent file is the same as an empty one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure for `.lintgate.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Analysis tool to run (name looked up in the environment, or a path)
    pub tool: String,

    /// Arguments passed to the tool
    pub args: Vec<String>,

    /// Dependency environment directory (relative to project root)
    pub env_dir: PathBuf,

    /// File of KEY=value variables passed to the tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,

    /// Extra environment variables passed to the tool
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,

    /// Default output mode when no CLI flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            args: default_args(),
            env_dir: default_env_dir(),
            env_file: None,
            env: HashMap::new(),
            output: None,
        }
    }
}

fn default_tool() -> String {
    "flake8".to_string()
}

fn default_args() -> Vec<String> {
    vec![".".to_string()]
}

fn default_env_dir() -> PathBuf {
    PathBuf::from("venv")
}

/// Output verbosity levels accepted in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

/// Overrides collected from the command line.
///
/// `None`/empty fields leave the file value in place, so an empty `args`
/// cannot clear configured arguments.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tool: Option<String>,
    pub env_dir: Option<PathBuf>,
    pub args: Vec<String>,
}

impl LintConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(tool) = &overrides.tool {
            self.tool = tool.clone();
        }
        if let Some(env_dir) = &overrides.env_dir {
            self.env_dir = env_dir.clone();
        }
        if !overrides.args.is_empty() {
            self.args = overrides.args.clone();
        }
        self
    }
}

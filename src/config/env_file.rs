//! `KEY=value` file parsing.
//!
//! Used for the optional `env_file` whose variables are handed to the lint
//! tool, and for a virtual environment's `pyvenv.cfg`, which uses the same
//! shape with spaces around `=`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Parses `KEY=value` files into a map.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `home = /usr/bin`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines without `=` or with an empty key are ignored.
///
/// # Example
///
/// ```
/// use lintgate::config::EnvFileParser;
///
/// let content = r#"
/// # pyvenv.cfg
/// home = /usr/bin
/// include-system-site-packages = false
/// version = 3.11.4
/// "#;
///
/// let vars = EnvFileParser::parse(content).unwrap();
/// assert_eq!(vars.get("home"), Some(&"/usr/bin".to_string()));
/// assert_eq!(vars.get("version"), Some(&"3.11.4".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse file content into a map of variables.
    pub fn parse(content: &str) -> Result<HashMap<String, String>> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        Ok(vars)
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim())))
    }

    fn unquote(value: &str) -> String {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    }

    /// Load and parse a file.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load and parse a file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(HashMap::new())
        }
    }
}

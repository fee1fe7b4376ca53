//! Prepared dependency environments.
//!
//! Activating a virtual environment from a shell mutates the shell's own
//! variables. Here activation produces a [`PreparedEnvironment`] value that
//! describes the variables a child process should see; the caller hands it
//! to [`execute`](crate::shell::execute) and nothing global changes.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::EnvFileParser;
use crate::error::{LintgateError, Result};
use crate::shell::env_bin_dir_name;

use super::probe::{is_executable, is_path_like, resolve_tool_path};

/// Variables set by activation.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Variables cleared by activation.
const REMOVED_VARS: &[&str] = &["PYTHONHOME"];

/// Metadata file written by `python -m venv`.
const PYVENV_CFG: &str = "pyvenv.cfg";

/// A validated dependency environment, ready to scope a tool invocation.
#[derive(Debug, Clone)]
pub struct PreparedEnvironment {
    root: PathBuf,
    bin_dir: PathBuf,
    metadata: HashMap<String, String>,
}

impl PreparedEnvironment {
    /// Locate and validate the environment at `env_dir` (relative to
    /// `project_root` unless absolute).
    ///
    /// # Errors
    ///
    /// - `EnvironmentMissing` if the directory does not exist
    /// - `EnvironmentInvalid` if it is not a directory, has no executables
    ///   directory, or its `pyvenv.cfg` cannot be read
    pub fn prepare(project_root: &Path, env_dir: &Path) -> Result<Self> {
        let joined = project_root.join(env_dir);
        let root = std::path::absolute(&joined).unwrap_or(joined);

        if !root.exists() {
            return Err(LintgateError::EnvironmentMissing { path: root });
        }

        if !root.is_dir() {
            return Err(LintgateError::EnvironmentInvalid {
                path: root,
                reason: "not a directory".to_string(),
            });
        }

        let bin_dir = root.join(env_bin_dir_name());
        if !bin_dir.is_dir() {
            return Err(LintgateError::EnvironmentInvalid {
                reason: format!("missing {}/ directory", env_bin_dir_name()),
                path: root,
            });
        }

        let metadata = EnvFileParser::load_optional(&root.join(PYVENV_CFG)).map_err(|e| {
            LintgateError::EnvironmentInvalid {
                path: root.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(
            "Prepared environment at {} (python {})",
            root.display(),
            metadata.get("version").map(String::as_str).unwrap_or("unknown")
        );

        Ok(Self {
            root,
            bin_dir,
            metadata,
        })
    }

    /// Absolute environment root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Executables directory (`bin` or `Scripts`).
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Key/values from `pyvenv.cfg`, empty when the file is absent.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Interpreter version recorded by the environment, if any.
    pub fn python_version(&self) -> Option<&str> {
        self.metadata
            .get("version")
            .or_else(|| self.metadata.get("version_info"))
            .map(String::as_str)
    }

    /// Search path for the tool: executables directory first, then the
    /// inherited entries.
    pub fn search_path(&self, inherited: &[PathBuf]) -> Vec<PathBuf> {
        let mut entries = vec![self.bin_dir.clone()];
        entries.extend(inherited.iter().filter(|p| **p != self.bin_dir).cloned());
        entries
    }

    /// Variables activation sets for the child process.
    pub fn activation_vars(&self, inherited: &[PathBuf]) -> Result<HashMap<String, OsString>> {
        let path = std::env::join_paths(self.search_path(inherited)).map_err(|e| {
            LintgateError::EnvironmentInvalid {
                path: self.root.clone(),
                reason: format!("cannot be placed on PATH: {}", e),
            }
        })?;

        let mut vars = HashMap::new();
        vars.insert(
            VIRTUAL_ENV_VAR.to_string(),
            self.root.clone().into_os_string(),
        );
        vars.insert("PATH".to_string(), path);
        Ok(vars)
    }

    /// Variables activation clears in the child process.
    pub fn removed_vars(&self) -> &'static [&'static str] {
        REMOVED_VARS
    }

    /// Resolve the analysis tool.
    ///
    /// Path-like values are taken relative to `project_root`; bare names are
    /// looked up on [`search_path`](Self::search_path).
    pub fn resolve_tool(
        &self,
        tool: &str,
        project_root: &Path,
        inherited: &[PathBuf],
    ) -> Result<PathBuf> {
        let found = if is_path_like(tool) {
            let candidate = project_root.join(tool);
            (candidate.is_file() && is_executable(&candidate)).then_some(candidate)
        } else {
            resolve_tool_path(tool, &self.search_path(inherited))
        };

        match found {
            Some(path) => {
                tracing::debug!("Resolved {} to {}", tool, path.display());
                Ok(path)
            }
            None => Err(LintgateError::ToolNotFound {
                tool: tool.to_string(),
                env_bin: self.bin_dir.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_env(project: &Path, name: &str) -> PathBuf {
        let root = project.join(name);
        fs::create_dir_all(root.join(env_bin_dir_name())).unwrap();
        root
    }

    #[cfg(unix)]
    fn make_tool(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn missing_directory_is_environment_missing() {
        let temp = TempDir::new().unwrap();
        let err = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap_err();
        match err {
            LintgateError::EnvironmentMissing { path } => assert!(path.ends_with("venv")),
            other => panic!("Expected EnvironmentMissing, got {:?}", other),
        }
    }

    #[test]
    fn file_instead_of_directory_is_invalid() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("venv"), "").unwrap();

        let err = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap_err();
        assert!(matches!(err, LintgateError::EnvironmentInvalid { .. }));
    }

    #[test]
    fn missing_bin_dir_is_invalid() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("venv")).unwrap();

        let err = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap_err();
        match err {
            LintgateError::EnvironmentInvalid { reason, .. } => {
                assert!(reason.contains(env_bin_dir_name()))
            }
            other => panic!("Expected EnvironmentInvalid, got {:?}", other),
        }
    }

    #[test]
    fn prepares_valid_environment() {
        let temp = TempDir::new().unwrap();
        let root = make_env(temp.path(), ".venv");

        let env = PreparedEnvironment::prepare(temp.path(), Path::new(".venv")).unwrap();

        assert!(env.root().is_absolute());
        assert!(env.root().ends_with(".venv"));
        assert_eq!(env.bin_dir(), root.join(env_bin_dir_name()).as_path());
        assert!(env.metadata().is_empty());
        assert!(env.python_version().is_none());
    }

    #[test]
    fn absolute_env_dir_ignores_project_root() {
        let temp = TempDir::new().unwrap();
        let root = make_env(temp.path(), "shared-env");

        let env = PreparedEnvironment::prepare(Path::new("/nonexistent"), &root).unwrap();
        assert_eq!(env.root(), root.as_path());
    }

    #[test]
    fn reads_pyvenv_cfg() {
        let temp = TempDir::new().unwrap();
        let root = make_env(temp.path(), "venv");
        fs::write(
            root.join(PYVENV_CFG),
            "home = /usr/bin\ninclude-system-site-packages = false\nversion = 3.11.4\n",
        )
        .unwrap();

        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();

        assert_eq!(env.python_version(), Some("3.11.4"));
        assert_eq!(env.metadata().get("home"), Some(&"/usr/bin".to_string()));
    }

    #[test]
    fn search_path_puts_bin_dir_first_without_duplicates() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();

        let inherited = vec![
            PathBuf::from("/usr/bin"),
            env.bin_dir().to_path_buf(),
            PathBuf::from("/bin"),
        ];
        let path = env.search_path(&inherited);

        assert_eq!(path[0], env.bin_dir());
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn activation_vars_set_virtual_env_and_path() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();

        let vars = env.activation_vars(&[PathBuf::from("/usr/bin")]).unwrap();

        assert_eq!(
            vars.get(VIRTUAL_ENV_VAR),
            Some(&env.root().as_os_str().to_os_string())
        );
        let path: Vec<PathBuf> = std::env::split_paths(vars.get("PATH").unwrap()).collect();
        assert_eq!(path[0], env.bin_dir());
        assert_eq!(path[1], PathBuf::from("/usr/bin"));
    }

    #[test]
    fn activation_clears_pythonhome() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();
        assert!(env.removed_vars().contains(&"PYTHONHOME"));
    }

    #[test]
    #[cfg(unix)]
    fn resolve_tool_prefers_environment() {
        let temp = TempDir::new().unwrap();
        let root = make_env(temp.path(), "venv");
        let system = TempDir::new().unwrap();
        let in_env = make_tool(&root.join("bin"), "flake8");
        make_tool(system.path(), "flake8");

        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();
        let found = env
            .resolve_tool("flake8", temp.path(), &[system.path().to_path_buf()])
            .unwrap();

        assert_eq!(found, std::path::absolute(in_env).unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn resolve_tool_falls_back_to_inherited_path() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        let system = TempDir::new().unwrap();
        let on_path = make_tool(system.path(), "ruff");

        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();
        let found = env
            .resolve_tool("ruff", temp.path(), &[system.path().to_path_buf()])
            .unwrap();

        assert_eq!(found, on_path);
    }

    #[test]
    #[cfg(unix)]
    fn resolve_path_like_tool_relative_to_project() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        let script = make_tool(&temp.path().join("scripts"), "lint.sh");

        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();
        let found = env.resolve_tool("scripts/lint.sh", temp.path(), &[]).unwrap();

        assert_eq!(found, script);
    }

    #[test]
    fn unresolved_tool_is_tool_not_found() {
        let temp = TempDir::new().unwrap();
        make_env(temp.path(), "venv");
        let env = PreparedEnvironment::prepare(temp.path(), Path::new("venv")).unwrap();

        let err = env
            .resolve_tool("definitely-not-a-linter", temp.path(), &[])
            .unwrap_err();

        assert!(matches!(err, LintgateError::ToolNotFound { .. }));
    }
}

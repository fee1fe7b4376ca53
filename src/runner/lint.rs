//! Lint step execution.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{EnvFileParser, LintConfig};
use crate::environment::{parse_system_path, PreparedEnvironment};
use crate::error::{LintgateError, Result, EXIT_LINT_FAILED};
use crate::shell::{display_command, execute, CommandOptions};

/// Outcome of a lint run that reached the analysis tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The tool exited 0.
    Success,
    /// The tool exited non-zero, or was killed by a signal (`None`).
    Failure(Option<i32>),
}

impl ExitStatus {
    /// Map a raw process exit code.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Success,
            other => Self::Failure(other),
        }
    }

    /// Whether the lint step passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Exit code for the wrapper process: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure(_) => EXIT_LINT_FAILED,
        }
    }

    /// Raw code reported by the tool.
    pub fn tool_code(&self) -> Option<i32> {
        match self {
            Self::Success => Some(0),
            Self::Failure(code) => *code,
        }
    }
}

/// Everything known about a finished run.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// Mapped result.
    pub status: ExitStatus,
    /// Resolved tool invocation, for display.
    pub command: String,
    /// Wall time of the tool.
    pub duration: Duration,
    /// Tool stdout (empty unless captured).
    pub stdout: String,
    /// Tool stderr (empty unless captured).
    pub stderr: String,
}

/// Runs the configured analysis tool inside its dependency environment.
///
/// # Example
///
/// ```no_run
/// use lintgate::config::LintConfig;
/// use lintgate::runner::LintRunner;
/// use std::path::Path;
///
/// let runner = LintRunner::new(LintConfig::default());
/// let status = runner.run(Path::new(".")).unwrap();
/// std::process::exit(status.exit_code());
/// ```
#[derive(Debug, Clone)]
pub struct LintRunner {
    config: LintConfig,
    inherited_path: Option<Vec<PathBuf>>,
    capture_output: bool,
}

impl LintRunner {
    /// Create a runner that inherits the process PATH and streams tool output.
    pub fn new(config: LintConfig) -> Self {
        Self {
            config,
            inherited_path: None,
            capture_output: false,
        }
    }

    /// Use these entries instead of the process PATH behind the environment.
    pub fn with_inherited_path(mut self, entries: Vec<PathBuf>) -> Self {
        self.inherited_path = Some(entries);
        self
    }

    /// Capture tool output into the report instead of inheriting stdio.
    pub fn with_captured_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// The effective configuration.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint the tree at `root` and map the result.
    pub fn run(&self, root: &Path) -> Result<ExitStatus> {
        self.run_report(root).map(|report| report.status)
    }

    /// Lint the tree at `root`, keeping the full report.
    ///
    /// # Errors
    ///
    /// Fails before the tool runs if the project root or the dependency
    /// environment is unusable, or if the tool cannot be found.
    pub fn run_report(&self, root: &Path) -> Result<LintReport> {
        if !root.is_dir() {
            return Err(LintgateError::ProjectRootNotFound {
                path: root.to_path_buf(),
            });
        }
        // The tool runs with `root` as its cwd, so every path handed to it
        // must already be absolute.
        let root = std::path::absolute(root)?;
        let root = root.as_path();

        let env = PreparedEnvironment::prepare(root, &self.config.env_dir)?;
        let inherited = self
            .inherited_path
            .clone()
            .unwrap_or_else(parse_system_path);

        let tool = env.resolve_tool(&self.config.tool, root, &inherited)?;
        let options = CommandOptions {
            cwd: Some(root.to_path_buf()),
            env: self.tool_env(&env, root, &inherited)?,
            env_remove: env.removed_vars().iter().map(|v| v.to_string()).collect(),
            capture_stdout: self.capture_output,
            capture_stderr: self.capture_output,
        };

        let command = display_command(&tool, &self.config.args);
        tracing::info!("Running {} in {}", command, root.display());

        let result = execute(&tool, &self.config.args, &options)?;
        let status = ExitStatus::from_code(result.exit_code);

        if status.is_success() {
            tracing::info!("Lint passed in {:?}", result.duration);
        } else {
            tracing::info!(
                "Lint failed with tool exit code {:?} in {:?}",
                status.tool_code(),
                result.duration
            );
        }

        Ok(LintReport {
            status,
            command,
            duration: result.duration,
            stdout: result.stdout,
            stderr: result.stderr,
        })
    }

    /// Variables layered over the inherited environment, lowest first:
    /// activation, `env_file`, `env`.
    fn tool_env(
        &self,
        env: &PreparedEnvironment,
        root: &Path,
        inherited: &[PathBuf],
    ) -> Result<HashMap<String, OsString>> {
        let mut vars = env.activation_vars(inherited)?;

        if let Some(env_file) = &self.config.env_file {
            let path = root.join(env_file);
            if !path.is_file() {
                return Err(LintgateError::ConfigNotFound { path });
            }
            let parsed =
                EnvFileParser::load(&path).map_err(|e| LintgateError::ConfigParseError {
                    path: path.clone(),
                    message: format!("{:#}", e),
                })?;
            for (key, value) in parsed {
                vars.insert(key, OsString::from(value));
            }
        }

        for (key, value) in &self.config.env {
            vars.insert(key.clone(), OsString::from(value));
        }

        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success() {
        assert_eq!(ExitStatus::from_code(Some(0)), ExitStatus::Success);
        assert_eq!(ExitStatus::Success.exit_code(), 0);
        assert_eq!(ExitStatus::Success.tool_code(), Some(0));
    }

    #[test]
    fn any_non_zero_normalizes_to_one() {
        for code in [1, 2, 3, 127, 255] {
            let status = ExitStatus::from_code(Some(code));
            assert_eq!(status, ExitStatus::Failure(Some(code)));
            assert_eq!(status.exit_code(), 1);
            assert_eq!(status.tool_code(), Some(code));
        }
    }

    #[test]
    fn killed_by_signal_is_failure() {
        let status = ExitStatus::from_code(None);
        assert!(!status.is_success());
        assert_eq!(status.exit_code(), 1);
        assert_eq!(status.tool_code(), None);
    }

    #[test]
    fn missing_root_fails_before_environment() {
        let runner = LintRunner::new(LintConfig::default());
        let err = runner.run(Path::new("/nonexistent/project")).unwrap_err();
        assert!(matches!(err, LintgateError::ProjectRootNotFound { .. }));
    }

    #[test]
    fn missing_environment_is_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = LintRunner::new(LintConfig::default());
        let err = runner.run(temp.path()).unwrap_err();
        assert!(matches!(err, LintgateError::EnvironmentMissing { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_ENVIRONMENT);
    }

    #[test]
    #[cfg(unix)]
    fn unreadable_env_file_is_config_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("venv/bin");
        std::fs::create_dir_all(&bin).unwrap();
        let tool = bin.join("flake8");
        std::fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        // Not UTF-8, so it exists but cannot be read as text.
        std::fs::write(temp.path().join("lint.env"), [0xff, 0xfe, b'=', 0x80]).unwrap();
        let config = LintConfig {
            env_file: Some(PathBuf::from("lint.env")),
            ..Default::default()
        };

        let err = LintRunner::new(config)
            .with_inherited_path(Vec::new())
            .run(temp.path())
            .unwrap_err();

        assert!(matches!(err, LintgateError::ConfigParseError { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_ENVIRONMENT);
    }
}

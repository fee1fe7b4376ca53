//! External program execution.

use crate::error::{LintgateError, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for program execution.
///
/// The child's environment is the parent's environment, minus `env_remove`,
/// plus `env`. The parent process itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged over the inherited env).
    pub env: HashMap<String, OsString>,

    /// Inherited variables to clear in the child.
    pub env_remove: Vec<String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Render a program and its arguments for messages and logs.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Execute a program directly, without an intermediate shell, and wait for it.
pub fn execute(program: &Path, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for key in &options.env_remove {
        cmd.env_remove(key);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Spawning: {}", rendered);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Spawn of {} failed: {}", rendered, e);
        LintgateError::CommandFailed {
            command: rendered.clone(),
            code: None,
        }
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        rendered,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, validate, ConfigOverrides, LintConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Errors that abort the command are returned; the caller maps them to
    /// an exit code with [`LintgateError::exit_code`](crate::LintgateError::exit_code).
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its project and configuration.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root (analysis root and tool working directory).
    pub project_root: PathBuf,
    /// Explicit config file from `--config`.
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load, override, and validate the effective configuration.
    ///
    /// A config `output` setting applies only when no CLI verbosity flag
    /// changed the mode from `Normal`.
    pub fn load_config(
        &self,
        overrides: &ConfigOverrides,
        ui: &mut dyn UserInterface,
    ) -> Result<LintConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?
            .with_overrides(overrides);
        validate(&config)?;

        if let Some(mode) = config.output {
            if ui.output_mode() == OutputMode::Normal {
                ui.set_output_mode(mode.into());
            }
        }

        Ok(config)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            context: CommandContext {
                project_root,
                config_path,
            },
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Env(args)) => {
                let cmd = super::env::EnvCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::run::RunCommand::new(self.context.clone(), RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

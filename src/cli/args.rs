//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. No argument is required:
//! a bare `lintgate` lints the current directory with the defaults.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// lintgate - run a project's linter inside its virtual environment.
#[derive(Debug, Parser)]
#[command(name = "lintgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .lintgate.yml in the project root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "LINTGATE_PROJECT")]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the lint tool in the project environment (default)
    Run(RunArgs),

    /// Check the dependency environment without running the tool
    Env(EnvArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Overrides shared by `run` and `env`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Lint tool to run (name or path)
    #[arg(long)]
    pub tool: Option<String>,

    /// Dependency environment directory
    #[arg(long, value_name = "DIR")]
    pub env_dir: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Arguments passed to the tool, replacing the configured ones.
    /// With none given after `--`, the configured args are kept
    #[arg(last = true, value_name = "TOOL_ARGS")]
    pub tool_args: Vec<String>,
}

impl RunArgs {
    /// Config overrides carried by these arguments.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tool: self.target.tool.clone(),
            env_dir: self.target.env_dir.clone(),
            args: self.tool_args.clone(),
        }
    }
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl EnvArgs {
    /// Config overrides carried by these arguments.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tool: self.target.tool.clone(),
            env_dir: self.target.env_dir.clone(),
            args: Vec::new(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

//! Command-line interface for lintgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, EnvArgs, RunArgs, TargetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`]; running with no subcommand is `run`.

pub mod completions;
pub mod dispatcher;
pub mod env;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

//! lintgate - run a project's linter inside its prepared virtual environment.
//!
//! lintgate replaces the usual "activate the venv, run the linter, check
//! `$?`" CI script with a typed pipeline: the environment is validated and
//! turned into explicit child-process variables, the tool is resolved and
//! run with the project as its working directory, and the result is mapped
//! to a normalized exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.lintgate.yml` loading and validation
//! - [`environment`] - Dependency environment preparation and tool lookup
//! - [`error`] - Error types, result alias, exit codes
//! - [`runner`] - The lint run itself
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use lintgate::runner::ExitStatus;
//!
//! // Any non-zero tool code becomes exit code 1
//! assert_eq!(ExitStatus::from_code(Some(0)).exit_code(), 0);
//! assert_eq!(ExitStatus::from_code(Some(3)).exit_code(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LintgateError, Result};

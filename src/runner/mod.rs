//! Lint step orchestration.
//!
//! A run is a single linear sequence: check the project root, prepare the
//! dependency environment, resolve the tool, execute it, map its exit code.
//! Nothing is retried.

pub mod lint;

pub use lint::{ExitStatus, LintReport, LintRunner};

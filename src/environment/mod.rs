//! Dependency environment preparation.
//!
//! - [`PreparedEnvironment`] validates a virtual environment and describes
//!   its activation as explicit variables
//! - [`probe`] helpers find executables on a search path

pub mod probe;
pub mod virtualenv;

pub use probe::{is_executable, parse_system_path, resolve_tool_path, split_path};
pub use virtualenv::{PreparedEnvironment, VIRTUAL_ENV_VAR};

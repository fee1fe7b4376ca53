//! Process execution and platform helpers.

pub mod command;
pub mod platform;

pub use command::{display_command, execute, CommandOptions, CommandResult};
pub use platform::{env_bin_dir_name, is_ci, is_ci_with_env};

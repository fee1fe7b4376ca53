//! Run command implementation.
//!
//! `lintgate run` (or bare `lintgate`) lints the project inside its
//! dependency environment and exits 0 on a clean run, 1 on violations.

use crate::cli::args::RunArgs;
use crate::error::{LintgateError, Result};
use crate::runner::LintRunner;
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    context: CommandContext,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(context: CommandContext, args: RunArgs) -> Self {
        Self { context, args }
    }
}

/// Suggest a fix for errors that stop the run before the tool starts.
fn hint_for(err: &LintgateError, tool: &str) -> Option<String> {
    match err {
        LintgateError::EnvironmentMissing { path } => Some(format!(
            "Create it with: python3 -m venv {}",
            path.display()
        )),
        LintgateError::ToolNotFound { env_bin, .. } => Some(format!(
            "Install it with: {} install {}",
            env_bin.join("pip").display(),
            tool
        )),
        _ => None,
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self
            .context
            .load_config(&self.args.overrides(), ui)?;
        let tool = config.tool.clone();

        let mut title = tool.clone();
        for arg in &config.args {
            title.push(' ');
            title.push_str(arg);
        }
        ui.show_header(&title);

        let runner = LintRunner::new(config);
        let report = match runner.run_report(&self.context.project_root) {
            Ok(report) => report,
            Err(e) => {
                ui.error(&e.to_string());
                if let Some(hint) = hint_for(&e, &tool) {
                    ui.message(&hint);
                }
                return Ok(CommandResult::failure(e.exit_code()));
            }
        };

        if ui.output_mode().shows_details() {
            ui.message(&format!("Ran {}", report.command));
        }

        if report.status.is_success() {
            ui.success(&format!("Lint passed in {}", format_duration(report.duration)));
            Ok(CommandResult::success())
        } else {
            let code = report
                .status
                .tool_code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "a signal".to_string());
            ui.error(&format!("Lint failed ({} exited with {})", tool, code));
            Ok(CommandResult::failure(report.status.exit_code()))
        }
    }
}

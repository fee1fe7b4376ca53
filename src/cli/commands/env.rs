//! Env command implementation.
//!
//! `lintgate env` prepares the dependency environment and resolves the lint
//! tool without running it.

use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::EnvArgs;
use crate::environment::{parse_system_path, PreparedEnvironment};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The env command implementation.
pub struct EnvCommand {
    context: CommandContext,
    args: EnvArgs,
}

/// What `env` reports about a prepared environment.
#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub project_root: PathBuf,
    pub environment: PathBuf,
    pub bin_dir: PathBuf,
    pub python_version: Option<String>,
    pub tool: String,
    pub tool_path: PathBuf,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(context: CommandContext, args: EnvArgs) -> Self {
        Self { context, args }
    }

    /// Prepare the environment and resolve the tool.
    pub fn inspect(&self, ui: &mut dyn UserInterface) -> Result<EnvReport> {
        let config = self.context.load_config(&self.args.overrides(), ui)?;
        let root = &self.context.project_root;

        let env = PreparedEnvironment::prepare(root, &config.env_dir)?;
        let tool_path = env.resolve_tool(&config.tool, root, &parse_system_path())?;

        Ok(EnvReport {
            project_root: root.clone(),
            environment: env.root().to_path_buf(),
            bin_dir: env.bin_dir().to_path_buf(),
            python_version: env.python_version().map(str::to_string),
            tool: config.tool,
            tool_path,
        })
    }

    /// Write `report` as pretty JSON, bypassing the output mode.
    pub fn write_json(report: &EnvReport, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report).map_err(anyhow::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for EnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = match self.inspect(ui) {
            Ok(report) => report,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(e.exit_code()));
            }
        };

        if self.args.json {
            Self::write_json(&report, &mut std::io::stdout().lock())?;
            return Ok(CommandResult::success());
        }

        ui.show_header("Environment");
        ui.message(&format!("Project:     {}", report.project_root.display()));
        ui.message(&format!("Environment: {}", report.environment.display()));
        ui.message(&format!("Executables: {}", report.bin_dir.display()));
        ui.message(&format!(
            "Python:      {}",
            report.python_version.as_deref().unwrap_or("unknown")
        ));
        ui.message(&format!(
            "Tool:        {} ({})",
            report.tool,
            report.tool_path.display()
        ));
        if report.python_version.is_none() {
            ui.warning(&format!(
                "No Python version recorded in {}",
                report.environment.join("pyvenv.cfg").display()
            ));
        }
        ui.success("Environment is ready");

        Ok(CommandResult::success())
    }
}

//! lintgate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lintgate::cli::{Cli, CommandDispatcher};
use lintgate::shell::is_ci;
use lintgate::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN; the UI already reports progress
///
/// Logs go to stderr so they never mix with the lint tool's stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lintgate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintgate=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("lintgate starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let project_root = std::path::absolute(&project_root).unwrap_or(project_root);

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root, cli.config.clone());

    let code = match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => result.exit_code,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            e.exit_code()
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

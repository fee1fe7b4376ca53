//! Library integration tests.

use lintgate::LintgateError;

#[test]
fn error_types_are_public() {
    let err = LintgateError::ToolNotFound {
        tool: "pylint".into(),
        env_bin: "venv/bin".into(),
    };
    assert!(err.to_string().contains("pylint"));
    assert_eq!(err.exit_code(), lintgate::error::EXIT_TOOL_NOT_FOUND);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> lintgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use lintgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["lintgate", "env", "--json"]);

    if let Some(Commands::Env(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Env command");
    }
}

#[test]
fn config_api_round_trips_through_files() {
    use lintgate::config::{load_config, validate, ConfigOverrides};
    use std::fs;

    let temp = tempfile::TempDir::new().unwrap();
    fs::write(
        temp.path().join(".lintgate.yml"),
        "tool: pylint\nargs: [app]\nenv_dir: env\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        args: vec!["--errors-only".to_string(), "app".to_string()],
        ..Default::default()
    };
    let config = load_config(temp.path(), None)
        .unwrap()
        .with_overrides(&overrides);
    validate(&config).unwrap();

    assert_eq!(config.tool, "pylint");
    assert_eq!(config.env_dir, std::path::PathBuf::from("env"));
    assert_eq!(config.args, vec!["--errors-only", "app"]);
}

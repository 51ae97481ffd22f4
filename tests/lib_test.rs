//! Library integration tests.

use kompo::KompoError;

#[test]
fn error_types_are_public() {
    let err = KompoError::UnknownDescriptor {
        name: "App::Components::Button".into(),
    };
    assert!(err.to_string().contains("App::Components::Button"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> kompo::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use kompo::cli::{Cli, Commands};

    let cli = Cli::parse_from(["kompo", "fieldsets", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Fieldsets(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Fieldsets command");
    }
}

#[test]
fn dispatcher_runs_against_mock_ui() {
    use clap::Parser;
    use kompo::cli::{Cli, CommandContext, CommandDispatcher};
    use kompo::ui::MockUI;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("resources/components/quote")).unwrap();

    let cli = Cli::parse_from(["kompo", "exists", "quote"]);
    let mut ui = MockUI::new();
    let result = CommandDispatcher::new(CommandContext::new(temp.path()))
        .dispatch(&cli, &mut ui)
        .unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(ui.data_lines(), ["true"]);
}

//! kompo CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use kompo::cli::{Cli, CommandContext, CommandDispatcher};
use kompo::config::find_project_root;
use kompo::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so resolved identifiers on stdout stay pipeable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("kompo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kompo=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("kompo starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| find_project_root(&cwd).unwrap_or_else(|| cwd.clone()));

    // A components path given on the command line is relative to where kompo runs
    let components_path = cli.components_path.as_ref().map(|path| cwd.join(path));

    let mut ui = create_ui(output_mode);

    let dispatcher = CommandDispatcher::new(CommandContext {
        project_root,
        config: cli.config.clone(),
        components_path,
    });

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

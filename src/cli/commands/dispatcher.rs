//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for booting the project's components
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::{load_config, validate};
use crate::error::Result;
use crate::provider::{Components, Provider};
use crate::registry::DescriptorFactories;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Project location and overrides shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Project root.
    pub project_root: PathBuf,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Components root override. Relative paths resolve against the project root.
    pub components_path: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for a project root without overrides.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Default::default()
        }
    }

    /// Load and validate configuration, then boot the components.
    pub fn boot(&self) -> Result<Components> {
        let mut config = load_config(&self.project_root, self.config.as_deref())?;
        if let Some(path) = &self.components_path {
            config.settings.components_dir = path.clone();
        }
        validate(&config)?;

        Provider::boot(
            &self.project_root,
            config.settings,
            &DescriptorFactories::new(),
        )
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(&self.context, args.clone()).execute(ui)
            }
            Some(Commands::Resolve(args)) => {
                super::resolve::ResolveCommand::new(&self.context, args.clone()).execute(ui)
            }
            Some(Commands::Exists(args)) => {
                super::exists::ExistsCommand::new(&self.context, args.clone()).execute(ui)
            }
            Some(Commands::Fieldsets(args)) => {
                super::fieldsets::FieldsetsCommand::new(&self.context, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::list::ListCommand::new(&self.context, ListArgs::default()).execute(ui),
        }
    }
}

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// kompo - resolve component handles to template views.
#[derive(Debug, Parser)]
#[command(name = "kompo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .kompo/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Components root, relative to the current directory (overrides the configured components_path)
    #[arg(long, global = true, env = "KOMPO_COMPONENTS_PATH")]
    pub components_path: Option<PathBuf>,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List components and their types (default if no command specified)
    List(ListArgs),

    /// Resolve handles to template identifiers
    Resolve(ResolveArgs),

    /// Check whether a component or type exists
    Exists(ExistsArgs),

    /// Show fieldset namespaces provided by components
    Fieldsets(FieldsetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Handles to resolve (e.g. `button`, `button.icon`, `cta`)
    #[arg(required = true)]
    pub handles: Vec<String>,

    /// Print the template file path instead of the identifier
    #[arg(long)]
    pub path: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `exists` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExistsArgs {
    /// Component name or type
    pub handle: String,
}

/// Arguments for the `fieldsets` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FieldsetsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

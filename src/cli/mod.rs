//! Command-line interface for kompo.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ExistsArgs, FieldsetsArgs, ListArgs, ResolveArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};

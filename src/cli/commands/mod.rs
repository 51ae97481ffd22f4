//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that needs the
//! component registry boots it through [`CommandContext::boot`], so config
//! loading, overrides and validation behave the same everywhere.

pub mod completions;
pub mod dispatcher;
pub mod exists;
pub mod fieldsets;
pub mod list;
pub mod resolve;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};

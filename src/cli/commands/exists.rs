//! Exists command implementation.
//!
//! The `kompo exists` command answers `component:exists` from the shell:
//! prints `true` or `false` and exits non-zero when the handle is unknown.

use crate::cli::args::ExistsArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::views::{TagParams, SRC_PARAM};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The exists command implementation.
pub struct ExistsCommand<'a> {
    context: &'a CommandContext,
    args: ExistsArgs,
}

impl<'a> ExistsCommand<'a> {
    /// Create a new exists command.
    pub fn new(context: &'a CommandContext, args: ExistsArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ExistsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let components = self.context.boot()?;

        let mut params = TagParams::new();
        params.insert(SRC_PARAM.to_string(), self.args.handle.clone());
        let exists = components.tag().exists(None, &params);

        ui.data(if exists { "true" } else { "false" });

        if exists {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

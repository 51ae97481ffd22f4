//! Resolve command implementation.
//!
//! The `kompo resolve` command prints the template identifier each handle
//! renders, one line per handle.

use std::collections::BTreeMap;

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    context: &'a CommandContext,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(context: &'a CommandContext, args: ResolveArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let components = self.context.boot()?;
        let resolver = components.resolver();

        let mut resolved = BTreeMap::new();
        let mut missing = 0;

        for handle in &self.args.handles {
            let identifier = resolver.resolve(handle);
            let location = components.views().locate(&identifier);

            let output = match (&location, self.args.path) {
                (Some(path), true) => path.display().to_string(),
                (None, true) => {
                    ui.error(&format!(
                        "No template for [{}] ({} not found)",
                        handle, identifier
                    ));
                    missing += 1;
                    continue;
                }
                (None, false) => {
                    ui.warning(&format!("{} has no template file", identifier));
                    identifier
                }
                (Some(_), false) => identifier,
            };

            if !self.args.json {
                ui.data(&output);
            }
            resolved.insert(handle.as_str(), output);
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            ui.data(&json);
        }

        if missing > 0 {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

//! Fieldsets command implementation.
//!
//! The `kompo fieldsets` command shows the fieldset namespaces components
//! contribute, as `namespace  path` pairs.

use std::collections::BTreeMap;

use crate::cli::args::FieldsetsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The fieldsets command implementation.
pub struct FieldsetsCommand<'a> {
    context: &'a CommandContext,
    args: FieldsetsArgs,
}

impl<'a> FieldsetsCommand<'a> {
    /// Create a new fieldsets command.
    pub fn new(context: &'a CommandContext, args: FieldsetsArgs) -> Self {
        Self { context, args }
    }
}

impl Command for FieldsetsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let components = self.context.boot()?;
        let namespaces = components.fieldsets();

        if self.args.json {
            let map: BTreeMap<&str, String> = namespaces
                .iter()
                .map(|(name, path)| (name, path.display().to_string()))
                .collect();
            let json = serde_json::to_string_pretty(&map).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if namespaces.is_empty() {
            ui.message("No fieldset namespaces");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme();
        let width = namespaces.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, path) in namespaces.iter() {
            ui.data(&format!(
                "{}  {}",
                theme.highlight.apply_to(format!("{:width$}", name, width = width)),
                theme.dim.apply_to(path.display())
            ));
        }

        Ok(CommandResult::success())
    }
}

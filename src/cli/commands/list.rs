//! List command implementation.
//!
//! The `kompo list` command prints every registered component with the
//! types it supports.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::fieldsets::FIELDSETS_DIR;
use crate::provider::Components;
use crate::registry::{canonicalize, definition_path, SupportedTypes};
use crate::storage::{ComponentStorage, LocalDisk};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// One row of `kompo list --json`.
#[derive(Debug, Serialize)]
struct ComponentEntry<'a> {
    name: &'a str,
    types: &'a SupportedTypes,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<PathBuf>,
    fieldsets: bool,
}

/// What a component folder carries besides its views.
#[derive(Debug, Default)]
struct FolderInfo {
    definition: Option<PathBuf>,
    fieldsets: bool,
}

/// The list command implementation.
pub struct ListCommand<'a> {
    context: &'a CommandContext,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(context: &'a CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

/// Folder details per canonical name, first directory wins.
fn folders(components: &Components) -> Result<HashMap<String, FolderInfo>> {
    let storage = LocalDisk::new(components.settings().components_path(""));
    let options = components.settings().build_options();

    let mut found = HashMap::new();
    for directory in storage.directories()? {
        let info = FolderInfo {
            definition: definition_path(&storage, &directory, &options),
            fieldsets: storage.exists(&format!("{}/{}", directory, FIELDSETS_DIR)),
        };
        found.entry(canonicalize(&directory)).or_insert(info);
    }
    Ok(found)
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let components = self.context.boot()?;
        let registry = components.registry();
        let mut folders = folders(&components)?;

        if self.args.json {
            let entries: Vec<ComponentEntry<'_>> = registry
                .iter()
                .map(|(name, descriptor)| {
                    let info = folders.remove(name).unwrap_or_default();
                    ComponentEntry {
                        name,
                        types: descriptor.supported_types(),
                        definition: info.definition,
                        fieldsets: info.fieldsets,
                    }
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.warning(&format!(
                "No components found in {}",
                components.settings().components_path("").display()
            ));
            return Ok(CommandResult::success());
        }

        let theme = ui.theme();
        for (name, descriptor) in registry.iter() {
            let types = descriptor.supported_types();
            let detail = match types {
                _ if types.is_empty() => String::new(),
                SupportedTypes::List(list) => format!(" {}", theme.dim.apply_to(list.join(", "))),
                SupportedTypes::Aliased(map) => {
                    let pairs: Vec<String> =
                        map.iter().map(|(ty, view)| format!("{} → {}", ty, view)).collect();
                    format!(" {}", theme.dim.apply_to(pairs.join(", ")))
                }
            };
            let fieldsets = match folders.get(name) {
                Some(info) if info.fieldsets => format!(" {}", theme.dim.apply_to("[fieldsets]")),
                _ => String::new(),
            };
            ui.data(&format!(
                "{}{}{}",
                theme.highlight.apply_to(name),
                detail,
                fieldsets
            ));
        }

        ui.message(&format!(
            "{} {}",
            registry.len(),
            if registry.len() == 1 {
                "component"
            } else {
                "components"
            }
        ));

        Ok(CommandResult::success())
    }
}

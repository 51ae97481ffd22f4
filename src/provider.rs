//! Boot sequence.
//!
//! [`Provider::boot`] scans the components root once and returns a frozen
//! [`Components`] bundle. Everything that needs the registry borrows it from
//! the bundle; nothing mutates it afterwards.

use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::fieldsets::{register_fieldsets, FieldsetNamespaces, FieldsetRegistrar};
use crate::registry::{DescriptorFactories, Registry};
use crate::storage::LocalDisk;
use crate::views::{ComponentTag, FileViewFinder, Resolver};

/// Registry, view finder and fieldset namespaces for one project.
#[derive(Debug)]
pub struct Components {
    settings: Settings,
    registry: Registry,
    views: FileViewFinder,
    fieldsets: FieldsetNamespaces,
}

impl Components {
    /// Resolved settings the bundle was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The component registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The filesystem view finder.
    pub fn views(&self) -> &FileViewFinder {
        &self.views
    }

    /// Fieldset namespaces discovered during boot.
    pub fn fieldsets(&self) -> &FieldsetNamespaces {
        &self.fieldsets
    }

    /// A resolver over this bundle.
    pub fn resolver(&self) -> Resolver<'_, FileViewFinder> {
        Resolver::new(&self.registry, &self.views)
    }

    /// The `component` tag over this bundle.
    pub fn tag(&self) -> ComponentTag<'_, FileViewFinder> {
        ComponentTag::new(&self.registry, &self.views)
    }

    /// Hand the discovered fieldset namespaces to a host registrar.
    pub fn register_fieldsets_with(&self, registrar: &mut dyn FieldsetRegistrar) {
        for (name, path) in self.fieldsets.iter() {
            registrar.add_namespace(name, path);
        }
    }
}

/// Builds [`Components`] from settings.
pub struct Provider;

impl Provider {
    /// Scan the components root and build the bundle.
    ///
    /// `settings` may be relative; they are resolved against `project_root`.
    ///
    /// # Errors
    ///
    /// Fails on unreadable directories and malformed definition files.
    pub fn boot(
        project_root: &Path,
        settings: Settings,
        factories: &DescriptorFactories,
    ) -> Result<Components> {
        let settings = settings.resolved(project_root);
        let storage = LocalDisk::new(settings.components_path(""));

        let registry = Registry::scan(&storage, &settings.build_options(), factories)?;

        let mut fieldsets = FieldsetNamespaces::new();
        register_fieldsets(&storage, &mut fieldsets)?;

        let views = FileViewFinder::new(settings.view_roots(), settings.view_extensions.clone());

        tracing::debug!(
            "Booted {} components and {} fieldset namespaces from {}",
            registry.len(),
            fieldsets.len(),
            storage.root().display()
        );

        Ok(Components {
            settings,
            registry,
            views,
            fieldsets,
        })
    }
}

//! The component registry.
//!
//! Maps canonical component names to descriptors. Built once from a scan of
//! the components root; afterwards it only answers lookups.
//!
//! Iteration order is registration order. Directory scans register in
//! lexicographic order, which makes [`Registry::find_by_type`] deterministic
//! when several components declare the same type: the first registered wins.

use std::collections::HashMap;
use std::path::PathBuf;

use super::definition::ComponentDefinition;
use super::descriptor::{ComponentDescriptor, SupportedTypes};
use super::factory::{qualified_name, DescriptorFactories};
use super::naming::canonicalize;
use crate::error::{KompoError, Result};
use crate::storage::ComponentStorage;

/// Options for building a registry from a directory listing.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Namespace prefix for descriptor factory lookups.
    pub namespace: String,
    /// Extensions tried, in order, for `<Name>/<Name>.<ext>` definition files.
    pub definition_extensions: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            namespace: "App::Components".to_string(),
            definition_extensions: vec!["yml".to_string(), "yaml".to_string()],
        }
    }
}

/// In-memory component registry.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<(String, Box<dyn ComponentDescriptor>)>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the directories of a components root.
    ///
    /// For each directory the canonical component name is derived and a
    /// definition file `<Name>/<Name>.<ext>` is looked up. Without one, the
    /// default descriptor is used (or a factory registered under the
    /// component's qualified name).
    ///
    /// # Errors
    ///
    /// Returns `DescriptorParseError` for a malformed definition file and
    /// `UnknownDescriptor` when a definition names a factory that is not
    /// registered.
    pub fn build_from_directories(
        names: &[String],
        storage: &dyn ComponentStorage,
        options: &BuildOptions,
        factories: &DescriptorFactories,
    ) -> Result<Self> {
        let mut registry = Self::new();

        for directory in names {
            let name = canonicalize(directory);
            let qualified = qualified_name(&options.namespace, &name);

            let definition = match find_definition(storage, directory, &name, options) {
                Some(relative) => {
                    let content = storage.read_to_string(&relative)?;
                    let path = storage.path(&relative);
                    tracing::debug!("Loading component definition {}", path.display());
                    Some(ComponentDefinition::parse(&content, &path)?)
                }
                None => None,
            };

            let descriptor = match definition {
                Some(ComponentDefinition {
                    supported_types,
                    descriptor: Some(explicit),
                }) => factories
                    .create(&explicit, &name, supported_types)
                    .ok_or(KompoError::UnknownDescriptor { name: explicit })?,
                Some(ComponentDefinition {
                    supported_types,
                    descriptor: None,
                }) => create_descriptor(factories, &qualified, &name, supported_types),
                None => create_descriptor(factories, &qualified, &name, SupportedTypes::default()),
            };

            tracing::debug!(
                "Registered component {} (from {}, types: {:?})",
                name,
                directory,
                descriptor.supported_types().keys()
            );
            registry.register(name, descriptor);
        }

        Ok(registry)
    }

    /// Build a registry by scanning `storage`.
    pub fn scan(
        storage: &dyn ComponentStorage,
        options: &BuildOptions,
        factories: &DescriptorFactories,
    ) -> Result<Self> {
        let directories = storage.directories()?;
        Self::build_from_directories(&directories, storage, options, factories)
    }

    /// Insert or replace a component. A replaced entry keeps its position.
    pub fn register(&mut self, name: impl Into<String>, descriptor: Box<dyn ComponentDescriptor>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = descriptor,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, descriptor));
            }
        }
    }

    /// Find a component by canonical name.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if no component has this exact name. Use
    /// [`Registry::exists`] to check first.
    pub fn find(&self, name: &str) -> Result<&dyn ComponentDescriptor> {
        self.index
            .get(name)
            .map(|&position| &*self.entries[position].1)
            .ok_or_else(|| KompoError::ComponentNotFound {
                name: name.to_string(),
            })
    }

    /// Check whether a handle names a component or a declared type.
    pub fn exists(&self, handle: &str) -> bool {
        self.index.contains_key(&canonicalize(handle)) || self.find_by_type(handle).is_some()
    }

    /// First component, in registration order, declaring support for `ty`.
    pub fn find_by_type(&self, ty: &str) -> Option<&dyn ComponentDescriptor> {
        self.entries
            .iter()
            .map(|(_, descriptor)| &**descriptor)
            .find(|descriptor| descriptor.supported_types().contains(ty))
    }

    /// Declared types of a component, or an empty list if it does not exist.
    ///
    /// `name` may also be a type; the owning component's types are returned.
    pub fn types(&self, name: &str) -> Vec<String> {
        let descriptor = match self.find(&canonicalize(name)) {
            Ok(descriptor) => Some(descriptor),
            Err(_) => self.find_by_type(name),
        };

        descriptor
            .map(|d| {
                d.supported_types()
                    .keys()
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Registered component names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate `(name, descriptor)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ComponentDescriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), &**descriptor))
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn create_descriptor(
    factories: &DescriptorFactories,
    qualified: &str,
    name: &str,
    types: SupportedTypes,
) -> Box<dyn ComponentDescriptor> {
    match factories.create(qualified, name, types.clone()) {
        Some(descriptor) => descriptor,
        None => DescriptorFactories::default_descriptor(name, types),
    }
}

/// Relative path of the definition file, if any.
///
/// The canonical folder name is tried before the directory as written, so
/// `button/Button.yml` is found on case-sensitive filesystems too. Extensions
/// may be configured with or without a leading dot.
fn find_definition(
    storage: &dyn ComponentStorage,
    directory: &str,
    name: &str,
    options: &BuildOptions,
) -> Option<String> {
    let mut folders = vec![name];
    if directory != name {
        folders.push(directory);
    }

    folders.into_iter().find_map(|folder| {
        options
            .definition_extensions
            .iter()
            .map(|ext| format!("{}/{}.{}", folder, name, ext.trim_start_matches('.')))
            .find(|relative| storage.exists(relative))
    })
}

/// Definition file path for a component, for display purposes.
pub fn definition_path(
    storage: &dyn ComponentStorage,
    directory: &str,
    options: &BuildOptions,
) -> Option<PathBuf> {
    let name = canonicalize(directory);
    find_definition(storage, directory, &name, options).map(|relative| storage.path(&relative))
}

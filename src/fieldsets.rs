//! Fieldset namespace registration.
//!
//! A component folder may ship its own fieldsets (`button/fieldsets/`). Each
//! such folder is registered with the host under a lowercase namespace equal
//! to the directory name, so `button::cta` refers to
//! `button/fieldsets/cta.yaml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::fieldset_namespace;
use crate::storage::ComponentStorage;

/// Name of the fieldsets subfolder inside a component.
pub const FIELDSETS_DIR: &str = "fieldsets";

/// Receives fieldset namespaces.
pub trait FieldsetRegistrar {
    /// Register `path` under namespace `name`.
    fn add_namespace(&mut self, name: &str, path: &Path);
}

/// Collected fieldset namespaces, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsetNamespaces {
    namespaces: BTreeMap<String, PathBuf>,
}

impl FieldsetNamespaces {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path registered for a namespace.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.namespaces.get(name).map(|p| p.as_path())
    }

    /// Iterate `(namespace, path)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.namespaces
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl FieldsetRegistrar for FieldsetNamespaces {
    fn add_namespace(&mut self, name: &str, path: &Path) {
        self.namespaces.insert(name.to_string(), path.to_path_buf());
    }
}

/// Register every component folder that has a `fieldsets` subfolder.
///
/// Returns the number of namespaces registered.
pub fn register_fieldsets(
    storage: &dyn ComponentStorage,
    registrar: &mut dyn FieldsetRegistrar,
) -> Result<usize> {
    let mut count = 0;

    for directory in storage.directories()? {
        let relative = format!("{}/{}", directory, FIELDSETS_DIR);
        if !storage.exists(&relative) {
            continue;
        }

        let namespace = fieldset_namespace(&directory);
        let path = storage.path(&relative);
        tracing::debug!("Registering fieldset namespace {} -> {}", namespace, path.display());
        registrar.add_namespace(&namespace, &path);
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalDisk;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn registers_only_components_with_fieldsets() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Button/fieldsets")).unwrap();
        fs::create_dir_all(temp.path().join("Card/views")).unwrap();

        let disk = LocalDisk::new(temp.path());
        let mut namespaces = FieldsetNamespaces::new();
        let count = register_fieldsets(&disk, &mut namespaces).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            namespaces.get("button"),
            Some(temp.path().join("Button/fieldsets").as_path())
        );
        assert!(namespaces.get("card").is_none());
    }

    #[test]
    fn namespace_keeps_directory_spelling_lowercased() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("hero-banner/fieldsets")).unwrap();

        let disk = LocalDisk::new(temp.path());
        let mut namespaces = FieldsetNamespaces::new();
        register_fieldsets(&disk, &mut namespaces).unwrap();

        let names: Vec<&str> = namespaces.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["hero-banner"]);
    }

    #[test]
    fn missing_root_registers_nothing() {
        let temp = TempDir::new().unwrap();
        let disk = LocalDisk::new(temp.path().join("nope"));
        let mut namespaces = FieldsetNamespaces::new();
        assert_eq!(register_fieldsets(&disk, &mut namespaces).unwrap(), 0);
        assert!(namespaces.is_empty());
    }
}

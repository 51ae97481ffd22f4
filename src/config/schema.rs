//! Configuration schema definitions for kompo.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.
//!
//! ```yaml
//! # .kompo/config.yml
//! settings:
//!   components_path: resources/components
//!   components_namespace: App::Components
//!   view_paths: [resources/views]
//!   view_extensions: [antlers.html, blade.php, html]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::registry::BuildOptions;

/// Root configuration structure for `.kompo/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KompoConfig {
    /// Global settings
    pub settings: Settings,
}

/// Component and view settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Components root (relative to the project root unless absolute)
    #[serde(rename = "components_path")]
    pub components_dir: PathBuf,

    /// Namespace prefix for custom descriptor factories
    pub components_namespace: String,

    /// Additional view roots searched after the components root
    pub view_paths: Vec<PathBuf>,

    /// Template file extensions, in lookup order
    pub view_extensions: Vec<String>,

    /// Extensions tried for `<Name>/<Name>.<ext>` definition files
    pub definition_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from("resources/components"),
            components_namespace: "App::Components".to_string(),
            view_paths: vec![PathBuf::from("resources/views")],
            view_extensions: vec![
                "antlers.html".to_string(),
                "blade.php".to_string(),
                "html".to_string(),
            ],
            definition_extensions: vec!["yml".to_string(), "yaml".to_string()],
        }
    }
}

impl Settings {
    /// Make relative paths absolute against `project_root`.
    pub fn resolved(mut self, project_root: &Path) -> Self {
        self.components_dir = join_root(project_root, &self.components_dir);
        self.view_paths = self
            .view_paths
            .iter()
            .map(|p| join_root(project_root, p))
            .collect();
        self
    }

    /// Join a path below the components root.
    ///
    /// ```
    /// use kompo::config::Settings;
    /// use std::path::PathBuf;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(
    ///     settings.components_path("/button/fieldsets"),
    ///     PathBuf::from("resources/components/button/fieldsets")
    /// );
    /// ```
    pub fn components_path(&self, sub_path: &str) -> PathBuf {
        let sub_path = sub_path.trim_start_matches('/');
        if sub_path.is_empty() {
            self.components_dir.clone()
        } else {
            self.components_dir.join(sub_path)
        }
    }

    /// Alias of [`Settings::components_path`].
    pub fn component_path(&self, sub_path: &str) -> PathBuf {
        self.components_path(sub_path)
    }

    /// View roots in search order: the components root first.
    pub fn view_roots(&self) -> Vec<PathBuf> {
        let mut roots = vec![self.components_dir.clone()];
        for path in &self.view_paths {
            if !roots.contains(path) {
                roots.push(path.clone());
            }
        }
        roots
    }

    /// Registry build options derived from these settings.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            namespace: self.components_namespace.clone(),
            definition_extensions: self.definition_extensions.clone(),
        }
    }
}

fn join_root(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

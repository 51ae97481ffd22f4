//! Configuration loading, parsing, and validation for kompo.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use kompo::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let kompo_dir = temp.path().join(".kompo");
//! fs::create_dir_all(&kompo_dir).unwrap();
//! fs::write(
//!     kompo_dir.join("config.yml"),
//!     "settings:\n  components_namespace: Site::Components\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.components_namespace, "Site::Components");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.kompo/config.yml`)
//! 2. Local overrides (`.kompo/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{KompoConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};

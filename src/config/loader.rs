//! Configuration file discovery and loading.
//!
//! Both configuration files are optional; a project without them uses the
//! default settings.

use crate::config::merger::merge_configs;
use crate::config::schema::KompoConfig;
use crate::error::{KompoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the configuration files.
pub const CONFIG_DIR: &str = ".kompo";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.kompo/config.yml`)
/// 2. Local overrides (`.kompo/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .kompo/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .kompo/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.kompo` directory first, then `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<KompoConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into KompoConfig. `source_path` is used for errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<KompoConfig> {
    if content.trim().is_empty() {
        return Ok(KompoConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| KompoError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KompoError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            KompoError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| KompoError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<KompoConfig> {
    serde_yaml::from_value(value).map_err(|e| KompoError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project and local config files.
///
/// Missing files are skipped; with neither present the defaults are used.
pub fn load_merged_config(project_root: &Path) -> Result<KompoConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    if configs.is_empty() {
        tracing::debug!("No config found in {}, using defaults", project_root.display());
        return Ok(KompoConfig::default());
    }

    let merged = merge_configs(&configs);
    from_value(merged, &project_root.join(CONFIG_DIR).join("config.yml"))
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<KompoConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discover_finds_nothing_in_empty_project() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, KompoConfig::default());
    }

    #[test]
    fn local_config_overrides_project_config() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "settings:\n  components_path: resources/components\n  components_namespace: Site\n",
        );
        write_config(
            temp.path(),
            "config.local.yml",
            "settings:\n  components_path: local/components\n",
        );

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(
            config.settings.components_dir,
            PathBuf::from("local/components")
        );
        assert_eq!(config.settings.components_namespace, "Site");
    }

    #[test]
    fn empty_config_file_is_default() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, KompoConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "settings: [unclosed");

        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(KompoError::ConfigParseError { .. })));
    }

    #[test]
    fn override_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("custom.yml")));
        assert!(matches!(result, Err(KompoError::ConfigNotFound { .. })));
    }

    #[test]
    fn override_skips_merge() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "settings:\n  components_namespace: Merged\n");
        let override_path = temp.path().join("custom.yml");
        fs::write(&override_path, "settings:\n  components_namespace: Custom\n").unwrap();

        let config = load_config(temp.path(), Some(&override_path)).unwrap();
        assert_eq!(config.settings.components_namespace, "Custom");
    }

    #[test]
    fn parse_config_reports_source_path() {
        let err = parse_config("settings: 3", Path::new("/tmp/x.yml")).unwrap_err();
        assert!(err.to_string().contains("/tmp/x.yml"));
    }

    #[test]
    fn find_project_root_walks_up_to_config_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
        let nested = temp.path().join("resources").join("components");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }
}

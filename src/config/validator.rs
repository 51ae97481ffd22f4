//! Configuration validation rules.
//!
//! - `components_path` must not be empty
//! - At least one view extension is required
//! - At least one definition extension is required
//! - Extensions must not contain path separators

use crate::config::schema::KompoConfig;
use crate::error::{KompoError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &KompoConfig) -> Vec<ValidationError> {
    let settings = &config.settings;
    let mut errors = Vec::new();

    if settings.components_dir.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-components-path",
            "'components_path' must not be empty",
        ));
    }

    if settings.view_extensions.is_empty() {
        errors.push(ValidationError::new(
            "no-view-extensions",
            "'view_extensions' must list at least one extension",
        ));
    }

    if settings.definition_extensions.is_empty() {
        errors.push(ValidationError::new(
            "no-definition-extensions",
            "'definition_extensions' must list at least one extension",
        ));
    }

    for ext in settings
        .view_extensions
        .iter()
        .chain(settings.definition_extensions.iter())
    {
        if ext.trim_start_matches('.').is_empty() || ext.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "invalid-extension",
                format!("Invalid extension '{}'", ext),
            ));
        }
    }

    errors
}

/// Validate and return Result.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &KompoConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(KompoError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&KompoConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_components_path() {
        let mut config = KompoConfig::default();
        config.settings.components_dir = PathBuf::new();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "empty-components-path"));
    }

    #[test]
    fn rejects_missing_view_extensions() {
        let mut config = KompoConfig::default();
        config.settings.view_extensions.clear();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "no-view-extensions"));
    }

    #[test]
    fn rejects_extensions_with_separators() {
        let mut config = KompoConfig::default();
        config.settings.definition_extensions = vec!["../yml".to_string(), ".".to_string()];

        let errors = validate_config(&config);
        assert_eq!(
            errors.iter().filter(|e| e.rule == "invalid-extension").count(),
            2
        );
    }

    #[test]
    fn validate_joins_messages() {
        let mut config = KompoConfig::default();
        config.settings.view_extensions.clear();
        config.settings.definition_extensions.clear();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("view_extensions"));
        assert!(msg.contains("definition_extensions"));
    }
}

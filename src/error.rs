//! Error types for kompo operations.
//!
//! This module defines [`KompoError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration and definition-file problems fail fast while the registry
//!   is being built
//! - View resolution never fails; unresolved partials fall back to a
//!   best-guess identifier and the renderer reports the miss
//! - Use `anyhow::Error` (via `KompoError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kompo operations.
#[derive(Debug, Error)]
pub enum KompoError {
    /// Component lookup by exact name failed.
    #[error("Component [{name}] not found.")]
    ComponentNotFound { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A component definition file exists but could not be parsed.
    #[error("Failed to parse component definition at {path}: {message}")]
    DescriptorParseError { path: PathBuf, message: String },

    /// A component definition names a descriptor nobody registered.
    #[error("Unknown component descriptor: {name}")]
    UnknownDescriptor { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kompo operations.
pub type Result<T> = std::result::Result<T, KompoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_not_found_displays_name() {
        let err = KompoError::ComponentNotFound {
            name: "Button".into(),
        };
        assert_eq!(err.to_string(), "Component [Button] not found.");
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = KompoError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn descriptor_parse_error_displays_path() {
        let err = KompoError::DescriptorParseError {
            path: PathBuf::from("Button/Button.yml"),
            message: "expected a mapping".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Button/Button.yml"));
        assert!(msg.contains("expected a mapping"));
    }

    #[test]
    fn unknown_descriptor_displays_name() {
        let err = KompoError::UnknownDescriptor {
            name: "App::Components::Card".into(),
        };
        assert!(err.to_string().contains("App::Components::Card"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KompoError = io_err.into();
        assert!(matches!(err, KompoError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(KompoError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}

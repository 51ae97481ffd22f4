//! Component definition files.
//!
//! A component folder may contain a definition file named after the
//! component (`Button/Button.yml`). It declares the supported types and,
//! optionally, which registered descriptor implementation to use.
//!
//! ```yaml
//! # Button/Button.yml
//! supported_types:
//!   cta: callToAction
//!   link: link
//! descriptor: App::Components::Button
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::descriptor::SupportedTypes;
use crate::error::{KompoError, Result};

/// Parsed contents of a component definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDefinition {
    /// Types the component supports. Defaults to none.
    #[serde(default)]
    pub supported_types: SupportedTypes,

    /// Qualified name of a registered descriptor factory.
    #[serde(default)]
    pub descriptor: Option<String>,
}

impl ComponentDefinition {
    /// Parse definition YAML. `path` is only used for error reporting.
    ///
    /// An empty file is a valid definition with no types.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| KompoError::DescriptorParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<ComponentDefinition> {
        ComponentDefinition::parse(yaml, Path::new("Button/Button.yml"))
    }

    #[test]
    fn empty_file_is_default_definition() {
        let def = parse("  \n").unwrap();
        assert_eq!(def, ComponentDefinition::default());
    }

    #[test]
    fn parses_list_types() {
        let def = parse("supported_types: [primary, ghost]").unwrap();
        assert_eq!(def.supported_types.keys(), vec!["primary", "ghost"]);
        assert!(def.descriptor.is_none());
    }

    #[test]
    fn parses_aliased_types_and_descriptor() {
        let def = parse(
            r#"
supported_types:
  cta: callToAction
descriptor: App::Components::Button
"#,
        )
        .unwrap();
        assert_eq!(def.supported_types.view_for("cta"), "callToAction");
        assert_eq!(def.descriptor.as_deref(), Some("App::Components::Button"));
    }

    #[test]
    fn unknown_keys_fail_fast() {
        let result = parse("supported_type: [primary]");
        assert!(matches!(
            result,
            Err(KompoError::DescriptorParseError { .. })
        ));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let err = parse("supported_types: [unclosed").unwrap_err();
        assert!(err.to_string().contains("Button/Button.yml"));
    }
}

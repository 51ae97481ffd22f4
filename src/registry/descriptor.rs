//! Component descriptors.
//!
//! A descriptor is the in-memory record of one component: its canonical name
//! and the types (fieldset names) it declares support for. Types come in two
//! shapes, see [`SupportedTypes`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types a component declares support for.
///
/// In the list form every entry is both the fieldset name and the view name.
/// In the aliased form the key is the fieldset name and the value is the view
/// to render for it. Both forms keep the order the author declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupportedTypes {
    /// Plain list: type name == view name.
    List(Vec<String>),
    /// Type name -> view name.
    Aliased(IndexMap<String, String>),
}

impl Default for SupportedTypes {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl SupportedTypes {
    /// Declared type names (alias keys for the aliased form).
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::List(types) => types.iter().map(|s| s.as_str()).collect(),
            Self::Aliased(map) => map.keys().map(|s| s.as_str()).collect(),
        }
    }

    /// Check whether `ty` is one of the declared type names.
    pub fn contains(&self, ty: &str) -> bool {
        match self {
            Self::List(types) => types.iter().any(|t| t == ty),
            Self::Aliased(map) => map.contains_key(ty),
        }
    }

    /// View name for a type. Undeclared types map to themselves.
    pub fn view_for<'a>(&'a self, ty: &'a str) -> &'a str {
        match self {
            Self::Aliased(map) => map.get(ty).map(|s| s.as_str()).unwrap_or(ty),
            Self::List(_) => ty,
        }
    }

    /// Returns true if no types are declared.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(types) => types.is_empty(),
            Self::Aliased(map) => map.is_empty(),
        }
    }
}

/// Capability interface every component descriptor implements.
///
/// The default implementation is [`Component`]. Projects that need custom
/// behaviour register their own implementation through
/// [`DescriptorFactories`](super::DescriptorFactories).
pub trait ComponentDescriptor: fmt::Debug + Send + Sync {
    /// Canonical component name (e.g. `CallToAction`).
    fn name(&self) -> &str;

    /// Types this component declares support for.
    fn supported_types(&self) -> &SupportedTypes;

    /// Handle to resolve when `ty` is rendered through this component.
    ///
    /// The result is `<Name>.<view>`, which the resolver treats like any
    /// dotted handle.
    fn view_name(&self, ty: &str) -> String {
        format!("{}.{}", self.name(), self.supported_types().view_for(ty))
    }
}

/// Default component descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    supported_types: SupportedTypes,
}

impl Component {
    /// Create a descriptor without declared types.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_types(name, SupportedTypes::default())
    }

    /// Create a descriptor with declared types.
    pub fn with_types(name: impl Into<String>, supported_types: SupportedTypes) -> Self {
        Self {
            name: name.into(),
            supported_types,
        }
    }
}

impl ComponentDescriptor for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_types(&self) -> &SupportedTypes {
        &self.supported_types
    }
}

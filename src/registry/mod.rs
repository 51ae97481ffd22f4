//! Component registry for kompo.
//!
//! Every top-level folder of the components root is one component. This
//! module discovers them, loads their definition files and answers identity
//! and membership queries:
//! - [`naming`] canonicalizes directory names and handles
//! - [`descriptor`] defines [`ComponentDescriptor`] and [`SupportedTypes`]
//! - [`definition`] parses `<Name>/<Name>.yml` definition files
//! - [`factory`] holds custom descriptor factories
//! - [`components`] is the [`Registry`] itself
//!
//! # Example
//!
//! ```
//! use kompo::registry::{Component, Registry, SupportedTypes};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     "Button",
//!     Box::new(Component::with_types(
//!         "Button",
//!         SupportedTypes::List(vec!["cta".to_string()]),
//!     )),
//! );
//!
//! assert!(registry.exists("button"));
//! assert!(registry.exists("cta"));
//! assert_eq!(registry.find_by_type("cta").unwrap().name(), "Button");
//! ```

pub mod components;
pub mod definition;
pub mod descriptor;
pub mod factory;
pub mod naming;

// Re-exports
pub use components::{definition_path, BuildOptions, Registry};
pub use definition::ComponentDefinition;
pub use descriptor::{Component, ComponentDescriptor, SupportedTypes};
pub use factory::{qualified_name, DescriptorFactories, DescriptorFactory};
pub use naming::{canonicalize, fieldset_namespace};

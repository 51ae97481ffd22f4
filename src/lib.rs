//! kompo - component-scoped template resolution for Statamic-style sites.
//!
//! Components live in folders under a components root. Each folder may carry
//! a definition file listing the types (fieldset handles) it supports, a
//! `views` folder with its templates and a `fieldsets` folder. kompo scans the
//! root once, builds a [`registry::Registry`] and resolves dotted handles such
//! as `button.icon` or a bare type name to template identifiers.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`fieldsets`] - Fieldset namespace registration
//! - [`provider`] - Boot sequence wiring everything together
//! - [`registry`] - Component descriptors and the registry
//! - [`storage`] - Filesystem access to the components root
//! - [`ui`] - Terminal output
//! - [`views`] - View finding, handle resolution and the `component` tag
//!
//! # Example
//!
//! ```
//! use kompo::registry::{Component, Registry, SupportedTypes};
//! use kompo::views::{Resolver, StaticViews};
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
//! let views: StaticViews = ["Button.views._icon"].into_iter().collect();
//! let resolver = Resolver::new(&registry, &views);
//!
//! assert_eq!(resolver.resolve("button.icon"), "Button.views._icon");
//! assert_eq!(resolver.resolve("cta"), "Button.views.cta");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fieldsets;
pub mod provider;
pub mod registry;
pub mod storage;
pub mod ui;
pub mod views;

pub use error::{KompoError, Result};

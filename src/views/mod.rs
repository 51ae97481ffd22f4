//! View resolution for kompo.
//!
//! - [`finder`] answers whether a template exists for an identifier
//! - [`resolver`] turns handles into template identifiers
//! - [`tag`] is the `component` tag surface template engines call
//!
//! # Example
//!
//! ```
//! use kompo::registry::Registry;
//! use kompo::views::{Resolver, StaticViews};
//!
//! let registry = Registry::new();
//! let views: StaticViews = ["partials.Button.views.icon"].into_iter().collect();
//! let resolver = Resolver::new(&registry, &views);
//!
//! assert_eq!(resolver.resolve("button.icon"), "partials.Button.views.icon");
//! assert_eq!(resolver.resolve("card"), "Card.views.template");
//! ```

pub mod finder;
pub mod resolver;
pub mod tag;

pub use finder::{FileViewFinder, StaticViews, ViewFinder};
pub use resolver::{
    candidate_name, underscored_name, Resolver, DEFAULT_PARTIAL, PARTIALS_PREFIX, VIEWS_SEGMENT,
};
pub use tag::{ComponentTag, TagParams, SRC_PARAM, TAG_HANDLE};

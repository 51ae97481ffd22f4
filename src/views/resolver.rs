//! Partial view-name resolution.
//!
//! Resolution order for a handle (first existing view wins):
//! 1. Underscored: `Button.views._icon`
//! 2. Partials subdirectory: `partials.Button.views.icon`
//! 3. Partials subdirectory, underscored: `partials.Button.views._icon`
//! 4. Type alias: the component declaring the handle as a type, resolved
//!    through its view name
//!
//! If nothing matches, the plain identifier (`Button.views.icon`) is
//! returned and the renderer reports the missing template.

use crate::registry::{canonicalize, Registry};

use super::finder::ViewFinder;

/// Sub-path used when a handle names only a component.
pub const DEFAULT_PARTIAL: &str = "template";

/// Segment between the component name and the partial path.
pub const VIEWS_SEGMENT: &str = "views";

/// Prefix of the shared partials tree.
pub const PARTIALS_PREFIX: &str = "partials";

/// Resolves handles to template identifiers.
#[derive(Debug)]
pub struct Resolver<'a, V: ?Sized> {
    registry: &'a Registry,
    views: &'a V,
}

impl<'a, V: ViewFinder + ?Sized> Resolver<'a, V> {
    /// Create a resolver over a registry and a view oracle.
    pub fn new(registry: &'a Registry, views: &'a V) -> Self {
        Self { registry, views }
    }

    /// Resolve a dotted handle such as `button` or `button.icon.small`.
    pub fn resolve(&self, partial: &str) -> String {
        let mut seen = Vec::new();
        self.resolve_inner(partial, &mut seen)
    }

    fn resolve_inner(&self, partial: &str, seen: &mut Vec<String>) -> String {
        let candidate = candidate_name(partial);

        let underscored = underscored_name(&candidate);
        if self.views.exists(&underscored) {
            tracing::debug!("Resolved {} to {}", partial, underscored);
            return underscored;
        }

        let subdirectoried = format!("{}.{}", PARTIALS_PREFIX, candidate);
        if self.views.exists(&subdirectoried) {
            tracing::debug!("Resolved {} to {}", partial, subdirectoried);
            return subdirectoried;
        }

        let underscored_subdirectoried = format!("{}.{}", PARTIALS_PREFIX, underscored);
        if self.views.exists(&underscored_subdirectoried) {
            tracing::debug!("Resolved {} to {}", partial, underscored_subdirectoried);
            return underscored_subdirectoried;
        }

        if let Some(component) = self.registry.find_by_type(partial) {
            seen.push(partial.to_string());
            let aliased = component.view_name(partial);
            if seen.contains(&aliased) {
                tracing::warn!(
                    "Type alias cycle for {} via {}; using {}",
                    partial,
                    component.name(),
                    candidate
                );
                return candidate;
            }
            tracing::debug!("Type {} belongs to {}, resolving {}", partial, component.name(), aliased);
            return self.resolve_inner(&aliased, seen);
        }

        tracing::debug!("No view found for {}, falling back to {}", partial, candidate);
        candidate
    }
}

/// Plain identifier for a handle: `<Component>.views.<subPath>`.
///
/// ```
/// use kompo::views::candidate_name;
///
/// assert_eq!(candidate_name("button"), "Button.views.template");
/// assert_eq!(candidate_name("hero-banner.media.image"), "HeroBanner.views.media.image");
/// ```
pub fn candidate_name(partial: &str) -> String {
    let (component, sub_path) = match partial.split_once('.') {
        Some((component, rest)) => (component, rest),
        None => (partial, DEFAULT_PARTIAL),
    };

    format!("{}.{}.{}", canonicalize(component), VIEWS_SEGMENT, sub_path)
}

/// Prefix the last segment of an identifier with `_`.
///
/// ```
/// use kompo::views::underscored_name;
///
/// assert_eq!(underscored_name("Button.views.icon"), "Button.views._icon");
/// ```
pub fn underscored_name(identifier: &str) -> String {
    match identifier.rsplit_once('.') {
        Some((head, last)) => format!("{}._{}", head, last),
        None => format!("_{}", identifier),
    }
}

//! The `component` template tag.
//!
//! Template engines call into this surface:
//! - `{{ component:button.icon }}` renders the view named by [`ComponentTag::view_name`]
//! - `{{ component:exists src="button" }}` uses [`ComponentTag::exists`]

use std::collections::HashMap;

use crate::registry::Registry;

use super::finder::ViewFinder;
use super::resolver::Resolver;

/// Handle the tag is registered under.
pub const TAG_HANDLE: &str = "component";

/// Parameter read by `component:exists` when no handle is given.
pub const SRC_PARAM: &str = "src";

/// Tag parameters as passed by the template engine.
pub type TagParams = HashMap<String, String>;

/// Tag surface over a registry and a view oracle.
#[derive(Debug)]
pub struct ComponentTag<'a, V: ?Sized> {
    registry: &'a Registry,
    resolver: Resolver<'a, V>,
}

impl<'a, V: ViewFinder + ?Sized> ComponentTag<'a, V> {
    /// Create the tag.
    pub fn new(registry: &'a Registry, views: &'a V) -> Self {
        Self {
            registry,
            resolver: Resolver::new(registry, views),
        }
    }

    /// The tag handle.
    pub fn handle(&self) -> &'static str {
        TAG_HANDLE
    }

    /// Template identifier to render for a handle.
    pub fn view_name(&self, handle: &str) -> String {
        self.resolver.resolve(handle)
    }

    /// `component:exists`. Uses `handle` if given, otherwise the `src`
    /// parameter. With neither, nothing exists.
    pub fn exists(&self, handle: Option<&str>, params: &TagParams) -> bool {
        match handle.or_else(|| params.get(SRC_PARAM).map(|s| s.as_str())) {
            Some(handle) => self.registry.exists(handle),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Component, SupportedTypes};
    use crate::views::StaticViews;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(
            "Button",
            Box::new(Component::with_types(
                "Button",
                SupportedTypes::List(vec!["cta".to_string()]),
            )),
        );
        registry
    }

    #[test]
    fn view_name_delegates_to_resolver() {
        let registry = registry();
        let views: StaticViews = ["partials.Button.views.template"].into_iter().collect();
        let tag = ComponentTag::new(&registry, &views);
        assert_eq!(tag.view_name("button"), "partials.Button.views.template");
        assert_eq!(tag.handle(), "component");
    }

    #[test]
    fn exists_uses_positional_handle() {
        let registry = registry();
        let views = StaticViews::new();
        let tag = ComponentTag::new(&registry, &views);
        assert!(tag.exists(Some("button"), &TagParams::new()));
        assert!(tag.exists(Some("cta"), &TagParams::new()));
        assert!(!tag.exists(Some("slider"), &TagParams::new()));
    }

    #[test]
    fn exists_falls_back_to_src_param() {
        let registry = registry();
        let views = StaticViews::new();
        let tag = ComponentTag::new(&registry, &views);

        let mut params = TagParams::new();
        params.insert("src".to_string(), "button".to_string());
        assert!(tag.exists(None, &params));

        // Positional handle takes precedence over src.
        assert!(!tag.exists(Some("slider"), &params));
    }

    #[test]
    fn exists_without_handle_or_src_is_false() {
        let registry = registry();
        let views = StaticViews::new();
        let tag = ComponentTag::new(&registry, &views);
        assert!(!tag.exists(None, &TagParams::new()));
    }
}

//! Custom descriptor factories.
//!
//! Components that need behaviour beyond [`Component`] register a factory
//! under a qualified name (`<namespace>::<Name>`). When the registry is built
//! the factory is picked either because the definition file names it
//! explicitly (`descriptor:`) or because one is registered under the
//! component's qualified name.

use std::collections::HashMap;
use std::fmt;

use super::descriptor::{Component, ComponentDescriptor, SupportedTypes};

/// Constructor for a custom descriptor: `(name, supported_types) -> descriptor`.
pub type DescriptorFactory =
    Box<dyn Fn(&str, SupportedTypes) -> Box<dyn ComponentDescriptor> + Send + Sync>;

/// Factories keyed by qualified descriptor name.
#[derive(Default)]
pub struct DescriptorFactories {
    factories: HashMap<String, DescriptorFactory>,
}

impl fmt::Debug for DescriptorFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names();
        names.sort_unstable();
        f.debug_struct("DescriptorFactories")
            .field("factories", &names)
            .finish()
    }
}

impl DescriptorFactories {
    /// Create an empty factory set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a qualified name, replacing any previous one.
    pub fn register<F>(&mut self, qualified_name: impl Into<String>, factory: F)
    where
        F: Fn(&str, SupportedTypes) -> Box<dyn ComponentDescriptor> + Send + Sync + 'static,
    {
        self.factories
            .insert(qualified_name.into(), Box::new(factory));
    }

    /// Check whether a factory is registered under `qualified_name`.
    pub fn has(&self, qualified_name: &str) -> bool {
        self.factories.contains_key(qualified_name)
    }

    /// Build a descriptor with the named factory, if registered.
    pub fn create(
        &self,
        qualified_name: &str,
        name: &str,
        types: SupportedTypes,
    ) -> Option<Box<dyn ComponentDescriptor>> {
        self.factories
            .get(qualified_name)
            .map(|factory| factory(name, types))
    }

    /// Registered qualified names.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }

    /// Build the default descriptor.
    pub fn default_descriptor(name: &str, types: SupportedTypes) -> Box<dyn ComponentDescriptor> {
        Box::new(Component::with_types(name, types))
    }
}

/// Join a namespace and a component name into a qualified descriptor name.
///
/// Trailing `::` on the namespace is tolerated; an empty namespace yields the
/// bare name.
pub fn qualified_name(namespace: &str, name: &str) -> String {
    let namespace = namespace.trim_end_matches("::");
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed {
        name: String,
        types: SupportedTypes,
    }

    impl ComponentDescriptor for Fixed {
        fn name(&self) -> &str {
            &self.name
        }

        fn supported_types(&self) -> &SupportedTypes {
            &self.types
        }

        fn view_name(&self, _ty: &str) -> String {
            format!("{}.fixed", self.name)
        }
    }

    #[test]
    fn qualified_name_joins_with_double_colon() {
        assert_eq!(qualified_name("App::Components", "Button"), "App::Components::Button");
        assert_eq!(qualified_name("App::Components::", "Button"), "App::Components::Button");
        assert_eq!(qualified_name("", "Button"), "Button");
    }

    #[test]
    fn create_uses_registered_factory() {
        let mut factories = DescriptorFactories::new();
        factories.register("App::Components::Button", |name, types| {
            Box::new(Fixed {
                name: name.to_string(),
                types,
            }) as Box<dyn ComponentDescriptor>
        });

        assert!(factories.has("App::Components::Button"));
        let descriptor = factories
            .create("App::Components::Button", "Button", SupportedTypes::default())
            .unwrap();
        assert_eq!(descriptor.name(), "Button");
        assert_eq!(descriptor.view_name("anything"), "Button.fixed");
    }

    #[test]
    fn create_returns_none_for_unknown_name() {
        let factories = DescriptorFactories::new();
        assert!(factories
            .create("App::Components::Card", "Card", SupportedTypes::default())
            .is_none());
    }

    #[test]
    fn default_descriptor_keeps_types() {
        let types = SupportedTypes::List(vec!["icon".to_string()]);
        let descriptor = DescriptorFactories::default_descriptor("Button", types.clone());
        assert_eq!(descriptor.supported_types(), &types);
    }
}

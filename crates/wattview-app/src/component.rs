//! Page component trait and registry.
//!
//! The routing core treats a page as an opaque renderable unit: something
//! that takes props and produces markup. Concrete pages live with the
//! application; the registry decouples route configuration from them by
//! keying on a component name.

use std::collections::HashMap;
use std::sync::Arc;

/// A renderable page component.
pub trait PageComponent: Send + Sync {
    /// The registry key this component is looked up by.
    fn name(&self) -> &'static str;

    /// Render the component with the given props.
    ///
    /// Props are a JSON object: captured route parameters when the matched
    /// route has props passthrough enabled, an empty object otherwise.
    fn render(&self, props: serde_json::Value) -> anyhow::Result<String>;
}

/// Lookup table from component names to renderables.
///
/// Constructed explicitly and handed to [`crate::bootstrap`]; there is no
/// process-global registry.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<dyn PageComponent>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component under its own name. A later registration with
    /// the same name replaces the earlier one.
    pub fn register(&mut self, component: Arc<dyn PageComponent>) {
        self.components
            .insert(component.name().to_string(), component);
    }

    /// Registers a component, chaining style.
    pub fn with(mut self, component: Arc<dyn PageComponent>) -> Self {
        self.register(component);
        self
    }

    /// Looks up a component by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn PageComponent>> {
        self.components.get(name).cloned()
    }

    /// All registered component names, sorted for stable output.
    pub fn list_all(&self) -> Vec<String> {
        let mut names: Vec<String> = self.components.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.list_all())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPage;

    impl PageComponent for TestPage {
        fn name(&self) -> &'static str {
            "test-page"
        }

        fn render(&self, _props: serde_json::Value) -> anyhow::Result<String> {
            Ok("<div>Test</div>".to_string())
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ComponentRegistry::new();
        registry.register(Arc::new(TestPage));

        assert!(registry.get("test-page").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.list_all(), vec!["test-page".to_string()]);
    }

    #[test]
    fn test_chaining_registration() {
        let registry = ComponentRegistry::new().with(Arc::new(TestPage));
        assert_eq!(registry.len(), 1);
    }
}

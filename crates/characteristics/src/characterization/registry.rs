//! Ordered registry of declared characteristics.

use std::sync::Arc;

use indexmap::IndexMap;

use super::descriptor::CharacteristicDescriptor;

/// The characteristics a subject type declares, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Characterization {
    descriptors: IndexMap<String, Arc<CharacteristicDescriptor>>,
}

impl Characterization {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: declare a characteristic.
    pub fn with(mut self, descriptor: CharacteristicDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Declare a characteristic.
    ///
    /// Re-declaring a name replaces its descriptor but keeps its position.
    pub fn register(&mut self, descriptor: CharacteristicDescriptor) {
        self.descriptors
            .insert(descriptor.name.clone(), Arc::new(descriptor));
    }

    /// Declared names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.descriptors.keys().map(String::as_str)
    }

    /// Descriptor for `name`, if declared.
    pub fn descriptor(&self, name: &str) -> Option<Arc<CharacteristicDescriptor>> {
        self.descriptors.get(name).cloned()
    }

    /// Whether `name` is declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Number of declared characteristics.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl FromIterator<CharacteristicDescriptor> for Characterization {
    fn from_iter<I: IntoIterator<Item = CharacteristicDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry
    }
}

//! Source backed by a property set

use crate::types::PropertySet;

use super::traits::ConfigSource;

/// Configuration source wrapping an immutable `PropertySet`
///
/// Used for overrides, process properties and loaded resource files alike.
#[derive(Debug, Clone)]
pub struct PropertySetSource {
    name: String,
    priority: i32,
    properties: PropertySet,
}

impl PropertySetSource {
    pub fn new(name: impl Into<String>, priority: i32, properties: PropertySet) -> Self {
        Self {
            name: name.into(),
            priority,
            properties,
        }
    }

    /// Source that defines nothing (e.g. a resource that was not found)
    pub fn empty(name: impl Into<String>, priority: i32) -> Self {
        Self::new(name, priority, PropertySet::new())
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }
}

impl ConfigSource for PropertySetSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        self.properties.keys().map(str::to_string).collect()
    }
}

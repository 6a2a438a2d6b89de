//! In-memory resource namespace

use std::collections::HashMap;

use super::traits::{ResourceNamespace, LoadError, LoadResult};

/// Resource namespace backed by a map of name to file text
///
/// # Example
///
/// ```
/// use layerconf_core::resources::{MemoryNamespace, ResourceNamespace};
///
/// let ns = MemoryNamespace::new()
///     .with_resource("application", "app.name=demo");
/// assert!(ns.exists("application"));
/// assert!(!ns.exists("environments/local"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryNamespace {
    resources: HashMap<String, String>,
}

impl MemoryNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource (builder style)
    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(name.into(), text.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(name.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceNamespace for MemoryNamespace {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self, name: &str) -> LoadResult<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::not_found(name))
    }

    fn exists(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

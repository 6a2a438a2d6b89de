//! Host-declared capability availability

use std::collections::BTreeMap;

/// Statically declared capabilities and whether the host provides them
///
/// The host fills this in at startup; nothing is probed at runtime.
///
/// # Example
///
/// ```
/// use layerconf_core::CapabilityRegistry;
///
/// let caps = CapabilityRegistry::new()
///     .declare("json", true)
///     .declare("http-client", false);
/// assert!(caps.is_available("json"));
/// assert!(!caps.is_available("http-client"));
/// assert!(!caps.is_available("never-declared"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, bool>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a capability (builder style); redeclaring replaces the flag
    pub fn declare(mut self, name: impl Into<String>, available: bool) -> Self {
        self.capabilities.insert(name.into(), available);
        self
    }

    /// Availability of `name`; undeclared capabilities are unavailable
    pub fn is_available(&self, name: &str) -> bool {
        self.capabilities.get(name).copied().unwrap_or(false)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Names of available capabilities, ascending
    pub fn available(&self) -> Vec<&str> {
        self.capabilities
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All declarations, ascending by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.capabilities.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

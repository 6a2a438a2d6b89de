//! Explicit snapshot of process-level configuration inputs

use crate::types::PropertySet;

/// Overrides, process properties and environment variables captured once
///
/// Resolution reads only from this snapshot, never from the live process
/// environment, so the same context always resolves the same way.
///
/// # Example
///
/// ```
/// use layerconf_core::ConfigContext;
///
/// let ctx = ConfigContext::new()
///     .with_override("db.host", "override-host")
///     .with_property("log.level", "DEBUG");
/// assert_eq!(ctx.overrides().get("db.host"), Some("override-host"));
/// assert!(ctx.env().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigContext {
    overrides: PropertySet,
    properties: PropertySet,
    env: PropertySet,
}

impl ConfigContext {
    /// Empty context: no overrides, properties or environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Context holding the current process environment (sorted by name)
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        let env: PropertySet = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::new().with_env(env.sorted())
    }

    pub fn with_overrides(mut self, overrides: PropertySet) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_properties(mut self, properties: PropertySet) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_env(mut self, env: PropertySet) -> Self {
        self.env = env;
        self
    }

    /// Add a single override
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key, value);
        self
    }

    /// Add a single process property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Add a single environment variable
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name, value);
        self
    }

    pub fn overrides(&self) -> &PropertySet {
        &self.overrides
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn env(&self) -> &PropertySet {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = ConfigContext::new()
            .with_override("a", "1")
            .with_property("b", "2")
            .with_env_var("C", "3");

        assert_eq!(ctx.overrides().get("a"), Some("1"));
        assert_eq!(ctx.properties().get("b"), Some("2"));
        assert_eq!(ctx.env().get("C"), Some("3"));
    }

    #[test]
    fn test_from_process_captures_env() {
        // PATH is set in every environment the tests run in
        let ctx = ConfigContext::from_process();
        assert!(ctx.env().contains_key("PATH"));
        assert!(ctx.overrides().is_empty());
        assert!(ctx.properties().is_empty());
    }
}

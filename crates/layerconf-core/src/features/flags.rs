//! `FEATURE_*` environment flags and `feature.*` configuration keys

use crate::resolver::{parse_bool, ConfigResolver};
use crate::sources::{env_var_name, ConfigContext};
use crate::types::PropertySet;

/// Prefix of feature-flag environment variables
pub const FEATURE_ENV_PREFIX: &str = "FEATURE_";

/// Prefix of feature-flag configuration keys
pub const FEATURE_KEY_PREFIX: &str = "feature.";

/// Feature flags taken from `FEATURE_*` environment variables
///
/// # Example
///
/// ```
/// use layerconf_core::{ConfigContext, FeatureFlags};
///
/// let ctx = ConfigContext::new()
///     .with_env_var("FEATURE_NEW_UI", "true")
///     .with_env_var("HOME", "/root");
/// let flags = FeatureFlags::from_context(&ctx);
///
/// assert_eq!(flags.len(), 1);
/// assert!(flags.is_enabled("new.ui"));
/// assert!(flags.is_enabled("FEATURE_NEW_UI"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    vars: PropertySet,
}

impl FeatureFlags {
    /// Collect every `FEATURE_*` variable, ordered by name
    pub fn from_context(ctx: &ConfigContext) -> Self {
        let vars = ctx
            .env()
            .iter()
            .filter(|(name, _)| name.starts_with(FEATURE_ENV_PREFIX))
            .collect::<PropertySet>()
            .sorted();
        Self { vars }
    }

    /// Raw flag variables, ordered by name
    pub fn vars(&self) -> &PropertySet {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Flag state: `Some` for `true`/`false` (any case), `None` when the flag
    /// is unset or holds anything else
    ///
    /// `name` is the variable name (`FEATURE_NEW_UI`), a configuration key
    /// (`feature.new.ui`) or a bare dotted name (`new.ui`).
    pub fn flag(&self, name: &str) -> Option<bool> {
        let var = if name.starts_with(FEATURE_ENV_PREFIX) {
            name.to_string()
        } else {
            let bare = name.strip_prefix(FEATURE_KEY_PREFIX).unwrap_or(name);
            format!("{}{}", FEATURE_ENV_PREFIX, env_var_name(bare))
        };

        parse_bool(self.vars.get(&var)?)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.flag(name).unwrap_or(false)
    }

    /// Resolved `feature.*` keys, ascending, masked for display
    pub fn feature_properties(resolver: &ConfigResolver) -> PropertySet {
        resolver.display_properties(Some(FEATURE_KEY_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{ConfigSource, PropertySetSource, SourceRegistry};
    use std::sync::Arc;

    fn ctx() -> ConfigContext {
        ConfigContext::new()
            .with_env_var("FEATURE_Z_LAST", "TRUE")
            .with_env_var("PATH", "/usr/bin")
            .with_env_var("FEATURE_CACHE_ENABLED", "false")
            .with_env_var("FEATURE_BETA", "maybe")
    }

    #[test]
    fn test_collects_prefixed_vars_sorted() {
        let flags = FeatureFlags::from_context(&ctx());
        let names: Vec<_> = flags.vars().keys().collect();
        assert_eq!(names, vec!["FEATURE_BETA", "FEATURE_CACHE_ENABLED", "FEATURE_Z_LAST"]);
    }

    #[test]
    fn test_flag_values() {
        let flags = FeatureFlags::from_context(&ctx());
        assert_eq!(flags.flag("z.last"), Some(true));
        assert_eq!(flags.flag("cache-enabled"), Some(false));
        assert_eq!(flags.flag("FEATURE_BETA"), None);
        assert_eq!(flags.flag("unknown"), None);
        assert!(flags.is_enabled("FEATURE_Z_LAST"));
        assert!(!flags.is_enabled("beta"));
    }

    #[test]
    fn test_flag_accepts_config_key_form() {
        let flags = FeatureFlags::from_context(&ctx());
        assert_eq!(flags.flag("feature.z.last"), Some(true));
        assert_eq!(flags.flag("feature.cache.enabled"), Some(false));
        assert!(flags.is_enabled("feature.z.last"));

        let ui = FeatureFlags::from_context(&ConfigContext::new().with_env_var("FEATURE_NEW_UI", "true"));
        assert_eq!(ui.flag("feature.new.ui"), Some(true));
        assert_eq!(ui.flag("new.ui"), Some(true));
    }

    #[test]
    fn test_empty_context() {
        assert!(FeatureFlags::from_context(&ConfigContext::new()).is_empty());
    }

    #[test]
    fn test_feature_properties() {
        let props: PropertySet = vec![
            ("feature.metrics.enabled", "true"),
            ("db.host", "localhost"),
            ("feature.debug.enabled", "false"),
        ]
        .into_iter()
        .collect();
        let sources: Vec<Arc<dyn ConfigSource>> = vec![Arc::new(PropertySetSource::new("defaults", 40, props))];
        let resolver = ConfigResolver::new(SourceRegistry::from_sources(sources));

        let features = FeatureFlags::feature_properties(&resolver);
        let keys: Vec<_> = features.keys().collect();
        assert_eq!(keys, vec!["feature.debug.enabled", "feature.metrics.enabled"]);
    }
}

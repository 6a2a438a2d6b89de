//! Typed lookups over a source registry

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::sources::SourceRegistry;
use crate::types::{Coerced, FallbackReason, PropertySet, Resolution, ResolvedValue};
use crate::log_debug;

use super::masking::SensitivePatterns;

/// Resolves keys against a registry, first source in precedence order wins
///
/// Typed getters never fail: a missing key or a value that does not parse
/// yields the caller's default. The `*_checked` variants report whether that
/// happened.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use layerconf_core::{ConfigContext, ConfigResolver, SourceRegistry};
/// use layerconf_core::resources::{MemoryNamespace, ResourceLoader};
///
/// let ns = MemoryNamespace::new()
///     .with_resource("application", "db.host=localhost\ndb.password=s3cr3t\ndb.pool=8");
/// let loader = ResourceLoader::new(Arc::new(ns));
/// let ctx = ConfigContext::new().with_override("db.pool", "16");
/// let registry = SourceRegistry::build("local", &loader, &ctx).unwrap();
///
/// let config = ConfigResolver::new(registry);
/// assert_eq!(config.get_int("db.pool", 1), 16);
/// assert_eq!(config.get_string("db.host", "unset"), "localhost");
/// assert_eq!(config.get_display_value("db.password").as_deref(), Some("***MASKED***"));
/// ```
#[derive(Clone)]
pub struct ConfigResolver {
    registry: Arc<SourceRegistry>,
    patterns: SensitivePatterns,
    logger: SharedLogger,
}

impl ConfigResolver {
    pub fn new(registry: SourceRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Resolver over a registry shared with other resolvers
    pub fn from_shared(registry: Arc<SourceRegistry>) -> Self {
        Self {
            registry,
            patterns: SensitivePatterns::default(),
            logger: Arc::new(NoOpLogger),
        }
    }

    pub fn with_patterns(mut self, patterns: SensitivePatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    pub fn patterns(&self) -> &SensitivePatterns {
        &self.patterns
    }

    /// Resolve `key` in `registry` without a resolver
    pub fn lookup(registry: &SourceRegistry, key: &str) -> Resolution {
        registry
            .sources()
            .iter()
            .find_map(|source| {
                source
                    .lookup(key)
                    .map(|raw| ResolvedValue::new(key, raw, source.name()))
            })
            .map(Resolution::Found)
            .unwrap_or_else(|| Resolution::missing(key))
    }

    /// Resolve `key`; `Missing` when no source defines it
    pub fn get(&self, key: &str) -> Resolution {
        Self::lookup(&self.registry, key)
    }

    /// Raw value, or `default` when missing
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Resolution::Found(v) => v.raw,
            Resolution::Missing { .. } => default.to_string(),
        }
    }

    /// `true`/`false` (any case), otherwise `default`
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_bool_checked(key, default).value
    }

    pub fn get_bool_checked(&self, key: &str, default: bool) -> Coerced<bool> {
        self.coerce(key, default, parse_bool)
    }

    /// Base-10 integer, otherwise `default`
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_int_checked(key, default).value
    }

    pub fn get_int_checked(&self, key: &str, default: i64) -> Coerced<i64> {
        self.coerce(key, default, |raw| raw.parse::<i64>().ok())
    }

    /// Resolved value for display: masked when the key is sensitive
    pub fn get_display_value(&self, key: &str) -> Option<String> {
        self.get(key)
            .raw()
            .map(|raw| self.patterns.display(key, raw).to_string())
    }

    pub fn is_sensitive(&self, key: &str) -> bool {
        self.patterns.is_sensitive(key)
    }

    /// Every key defined by any source, ascending
    pub fn keys(&self) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .registry
            .sources()
            .iter()
            .flat_map(|s| s.keys())
            .collect();
        keys.into_iter().collect()
    }

    /// Effective value of every key, ascending by key (unmasked)
    pub fn effective_properties(&self) -> PropertySet {
        self.keys()
            .into_iter()
            .filter_map(|key| {
                let raw = self.get(&key).into_value()?.raw;
                Some((key, raw))
            })
            .collect()
    }

    /// Effective values for display, masked, optionally limited to a key prefix
    pub fn display_properties(&self, prefix: Option<&str>) -> PropertySet {
        self.effective_properties()
            .into_iter()
            .filter(|(k, _)| prefix.map_or(true, |p| k.starts_with(p)))
            .map(|(k, v)| {
                let shown = self.patterns.display(&k, &v).to_string();
                (k, shown)
            })
            .collect()
    }

    /// Masked effective configuration as pretty JSON
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.display_properties(None))
    }

    fn coerce<T: Copy + std::fmt::Debug>(
        &self,
        key: &str,
        default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Coerced<T> {
        let raw = match self.get(key) {
            Resolution::Found(v) => v.raw,
            Resolution::Missing { .. } => return Coerced::defaulted(default, FallbackReason::Missing),
        };

        match parse(&raw) {
            Some(value) => Coerced::parsed(value),
            None => {
                let shown = self.patterns.display(key, &raw);
                log_debug!(self.logger, "value {:?} for '{}' not usable, using default {:?}", shown, key, default);
                Coerced::defaulted(default, FallbackReason::Unparseable { raw })
            }
        }
    }
}

/// `true`/`false` in any case; anything else is `None`
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("registry", &self.registry)
            .field("patterns", &self.patterns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::RecordingLogger;
    use crate::resources::{MemoryNamespace, ResourceLoader};
    use crate::sources::{ConfigContext, ConfigSource, PropertySetSource};

    fn resolver_with(defaults: &str, ctx: ConfigContext) -> ConfigResolver {
        let ns = MemoryNamespace::new()
            .with_resource("application", defaults)
            .with_resource("environments/production", "log.level=WARN\ncache.size=512\n");
        let loader = ResourceLoader::new(Arc::new(ns));
        let registry = SourceRegistry::build("production", &loader, &ctx).unwrap();
        ConfigResolver::new(registry)
    }

    fn props(entries: &[(&str, &str)]) -> PropertySet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_override_beats_property() {
        let sources: Vec<Arc<dyn ConfigSource>> = vec![
            Arc::new(PropertySetSource::new("properties", 10, props(&[("x", "prop")]))),
            Arc::new(PropertySetSource::new("override", 0, props(&[("x", "override")]))),
        ];
        let config = ConfigResolver::new(SourceRegistry::from_sources(sources));

        assert_eq!(config.get_string("x", "d"), "override");
        assert_eq!(config.get("x").source(), Some("override"));
    }

    #[test]
    fn test_full_precedence_chain() {
        let ctx = ConfigContext::new()
            .with_override("a", "override")
            .with_property("a", "prop")
            .with_property("svc.b", "prop")
            .with_env_var("SVC_B", "env")
            .with_env_var("SVC_C", "env");
        let config = resolver_with("a=def\nsvc.b=def\nsvc.c=def\nd=def\nlog.level=INFO\n", ctx);

        assert_eq!(config.get("a").source(), Some("override"));
        assert_eq!(config.get("svc.b").source(), Some("properties"));
        assert_eq!(config.get("svc.c").raw(), Some("env"));
        assert_eq!(config.get("svc.c").source(), Some("environment"));
        assert_eq!(config.get("log.level").raw(), Some("WARN"));
        assert_eq!(config.get("log.level").source(), Some("profile:production"));
        assert_eq!(config.get("d").source(), Some("defaults"));
    }

    #[test]
    fn test_ambient_env_does_not_shadow_plain_file_keys() {
        let ctx = ConfigContext::new()
            .with_env_var("USER", "root")
            .with_env_var("PATH", "/usr/bin");
        let config = resolver_with("user=app_svc\npath=/api\n", ctx);

        assert_eq!(config.get("user").raw(), Some("app_svc"));
        assert_eq!(config.get("user").source(), Some("defaults"));
        assert_eq!(config.get_string("path", ""), "/api");
    }

    #[test]
    fn test_missing_key() {
        let config = resolver_with("", ConfigContext::new());
        assert_eq!(config.get_string("missing.key", "fallback"), "fallback");
        assert_eq!(config.get("missing.key"), Resolution::missing("missing.key"));
        assert_eq!(config.get_display_value("missing.key"), None);
    }

    #[test]
    fn test_empty_value_is_not_missing() {
        let ctx = ConfigContext::new().with_override("name", "");
        let config = resolver_with("name=default\n", ctx);
        assert_eq!(config.get_string("name", "fallback"), "");
        assert_eq!(config.get("name").source(), Some("override"));
    }

    #[test]
    fn test_get_bool() {
        let config = resolver_with("a=TRUE\nb=False\nc=yes\nd=\n", ConfigContext::new());
        assert!(config.get_bool("a", false));
        assert!(!config.get_bool("b", true));
        assert!(!config.get_bool("c", false));
        assert!(config.get_bool("c", true));
        assert!(config.get_bool("d", true));
        assert!(config.get_bool("missing", true));

        let checked = config.get_bool_checked("c", false);
        assert_eq!(checked.fallback, Some(FallbackReason::Unparseable { raw: "yes".to_string() }));
        assert_eq!(config.get_bool_checked("missing", false).fallback, Some(FallbackReason::Missing));
        assert!(!config.get_bool_checked("a", false).used_fallback());
    }

    #[test]
    fn test_get_int() {
        let config = resolver_with("n=17\nbad=abc\nneg=-3\nspaced= 4\n", ConfigContext::new());
        assert_eq!(config.get_int("n", 0), 17);
        assert_eq!(config.get_int("bad", 42), 42);
        assert_eq!(config.get_int("neg", 0), -3);
        assert_eq!(config.get_int("missing", 7), 7);
        assert_eq!(config.get_int("cache.size", 0), 512);

        let bad = config.get_int_checked("bad", 42);
        assert_eq!(bad.value, 42);
        assert!(bad.used_fallback());
        assert!(!config.get_int_checked("n", 0).used_fallback());
    }

    #[test]
    fn test_fallback_is_logged_masked() {
        let logger = Arc::new(RecordingLogger::new());
        let ctx = ConfigContext::new().with_override("db.password.length", "long");
        let config = resolver_with("", ctx).with_logger(logger.clone());

        assert_eq!(config.get_int("db.password.length", 8), 8);
        assert!(logger.contains("db.password.length"));
        assert!(logger.contains("***MASKED***"));
        assert!(!logger.contains("\"long\""));
    }

    #[test]
    fn test_display_value_masks_sensitive() {
        let config = resolver_with("db.password=s3cr3t\ndb.host=localhost\n", ConfigContext::new());
        assert_eq!(config.get_display_value("db.password").as_deref(), Some("***MASKED***"));
        assert_eq!(config.get_display_value("db.host").as_deref(), Some("localhost"));
        // stored value is untouched
        assert_eq!(config.get_string("db.password", ""), "s3cr3t");
    }

    #[test]
    fn test_custom_patterns() {
        let config = resolver_with("api.token=abc\n", ConfigContext::new())
            .with_patterns(SensitivePatterns::default().with_pattern("token"));
        assert!(config.is_sensitive("API.TOKEN"));
        assert_eq!(config.get_display_value("api.token").as_deref(), Some("***MASKED***"));
    }

    #[test]
    fn test_get_is_idempotent() {
        let config = resolver_with("a=1\n", ConfigContext::new().with_property("b", "2"));
        assert_eq!(config.get("a"), config.get("a"));
        assert_eq!(config.get("b"), config.get("b"));
        assert_eq!(config.get("zzz"), config.get("zzz"));
    }

    #[test]
    fn test_effective_and_display_properties() {
        let ctx = ConfigContext::new().with_override("db.host", "primary");
        let config = resolver_with("db.password=s3cr3t\ndb.host=localhost\napp.name=demo\n", ctx);

        let effective = config.effective_properties();
        let keys: Vec<_> = effective.keys().collect();
        assert_eq!(keys, vec!["app.name", "cache.size", "db.host", "db.password", "log.level"]);
        assert_eq!(effective.get("db.host"), Some("primary"));
        assert_eq!(effective.get("db.password"), Some("s3cr3t"));

        let db = config.display_properties(Some("db."));
        let entries: Vec<_> = db.iter().collect();
        assert_eq!(entries, vec![("db.host", "primary"), ("db.password", "***MASKED***")]);
    }

    #[test]
    fn test_export_json_is_masked() {
        let config = resolver_with("db.password=s3cr3t\n", ConfigContext::new());
        let json: serde_json::Value = serde_json::from_str(&config.export_json().unwrap()).unwrap();
        assert_eq!(json["db.password"], "***MASKED***");
        assert_eq!(json["log.level"], "WARN");
    }
}

//! Fixed-precedence source registry

use std::sync::Arc;

use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::resources::{LoadResult, ResourceLoader};
use crate::types::PropertySet;
use crate::{log_debug, log_info, log_warn};

use super::context::ConfigContext;
use super::env_source::EnvSource;
use super::property_source::PropertySetSource;
use super::traits::ConfigSource;

pub const OVERRIDE_PRIORITY: i32 = 0;
pub const PROPERTIES_PRIORITY: i32 = 10;
pub const ENVIRONMENT_PRIORITY: i32 = 20;
pub const PROFILE_PRIORITY: i32 = 30;
pub const DEFAULTS_PRIORITY: i32 = 40;

/// Resource holding global defaults
pub const DEFAULTS_RESOURCE: &str = "application";

/// Prefix of per-profile resources (`environments/<profile>`)
pub const ENVIRONMENTS_PREFIX: &str = "environments/";

/// Ordered, immutable list of configuration sources
///
/// The order is fixed when the registry is created: ascending priority,
/// ties kept in the order the sources were supplied.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use layerconf_core::{ConfigContext, SourceRegistry};
/// use layerconf_core::resources::{MemoryNamespace, ResourceLoader};
///
/// let ns = MemoryNamespace::new()
///     .with_resource("application", "log.level=INFO")
///     .with_resource("environments/production", "log.level=WARN");
/// let loader = ResourceLoader::new(Arc::new(ns));
///
/// let registry = SourceRegistry::build("production", &loader, &ConfigContext::new()).unwrap();
/// assert_eq!(
///     registry.source_names(),
///     vec!["override", "properties", "environment", "profile:production", "defaults"]
/// );
/// ```
#[derive(Clone)]
pub struct SourceRegistry {
    sources: Vec<Arc<dyn ConfigSource>>,
    profile: Option<String>,
}

impl SourceRegistry {
    /// Assemble the standard five sources for `profile`
    pub fn build(profile: &str, loader: &ResourceLoader, ctx: &ConfigContext) -> LoadResult<Self> {
        RegistryBuilder::new().build(profile, loader, ctx)
    }

    /// Registry over arbitrary sources, ordered by priority
    pub fn from_sources(mut sources: Vec<Arc<dyn ConfigSource>>) -> Self {
        // stable: equal priorities keep their supplied order
        sources.sort_by_key(|s| s.priority());
        Self {
            sources,
            profile: None,
        }
    }

    /// Sources in lookup order
    pub fn sources(&self) -> &[Arc<dyn ConfigSource>] {
        &self.sources
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Find a source by name
    pub fn source(&self, name: &str) -> Option<&Arc<dyn ConfigSource>> {
        self.sources.iter().find(|s| s.name() == name)
    }

    /// Profile the registry was built for, if built with `build`
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("sources", &self.source_names())
            .field("profile", &self.profile)
            .finish()
    }
}

/// Builder for the standard registry, with configurable resource names
pub struct RegistryBuilder {
    defaults_resource: String,
    environments_prefix: String,
    logger: SharedLogger,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            defaults_resource: DEFAULTS_RESOURCE.to_string(),
            environments_prefix: ENVIRONMENTS_PREFIX.to_string(),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Resource name for global defaults (default `application`)
    pub fn defaults_resource(mut self, name: impl Into<String>) -> Self {
        self.defaults_resource = name.into();
        self
    }

    /// Prefix for per-profile resources (default `environments/`)
    pub fn environments_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.environments_prefix = prefix.into();
        self
    }

    pub fn logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Resource name consulted for `profile`
    pub fn profile_resource(&self, profile: &str) -> String {
        format!("{}{}", self.environments_prefix, profile)
    }

    /// Build the registry
    ///
    /// Missing profile or defaults resources contribute empty sources.
    /// Malformed resources and read failures are returned as errors.
    pub fn build(&self, profile: &str, loader: &ResourceLoader, ctx: &ConfigContext) -> LoadResult<SourceRegistry> {
        let profile_props = self.load_optional(loader, &self.profile_resource(profile))?;
        let default_props = self.load_optional(loader, &self.defaults_resource)?;

        let sources: Vec<Arc<dyn ConfigSource>> = vec![
            Arc::new(PropertySetSource::new("override", OVERRIDE_PRIORITY, ctx.overrides().clone())),
            Arc::new(PropertySetSource::new("properties", PROPERTIES_PRIORITY, ctx.properties().clone())),
            Arc::new(EnvSource::new(ctx.env().clone(), ENVIRONMENT_PRIORITY)),
            Arc::new(PropertySetSource::new(format!("profile:{}", profile), PROFILE_PRIORITY, profile_props)),
            Arc::new(PropertySetSource::new("defaults", DEFAULTS_PRIORITY, default_props)),
        ];

        let mut registry = SourceRegistry::from_sources(sources);
        registry.profile = Some(profile.to_string());
        log_info!(self.logger, "built registry for profile '{}': {}", profile, registry.source_names().join(" > "));
        Ok(registry)
    }

    fn load_optional(&self, loader: &ResourceLoader, name: &str) -> LoadResult<PropertySet> {
        match loader.load(name) {
            Ok(props) => {
                log_debug!(self.logger, "loaded {} entries from '{}'", props.len(), name);
                Ok(props)
            }
            Err(e) if e.is_not_found() => {
                log_warn!(self.logger, "resource '{}' not found, using no values from it", name);
                Ok(PropertySet::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("defaults_resource", &self.defaults_resource)
            .field("environments_prefix", &self.environments_prefix)
            .finish()
    }
}

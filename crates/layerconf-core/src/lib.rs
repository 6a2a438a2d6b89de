//! layerconf core
//!
//! Layered configuration resolution. Several ordered sources (explicit
//! overrides, process properties, environment variables, a profile-specific
//! resource and global defaults) are combined into one deterministic value
//! per key, with typed coercion, profile aliasing and masked display.
//!
//! ## Resolution pipeline
//!
//! ```rust
//! use std::sync::Arc;
//! use layerconf_core::{ConfigContext, ConfigResolver, ProfileResolver, SourceRegistry};
//! use layerconf_core::resources::{MemoryNamespace, ResourceLoader};
//!
//! let ns = MemoryNamespace::new()
//!     .with_resource("application", "log.level=INFO\ndb.password=s3cr3t")
//!     .with_resource("environments/production", "log.level=WARN");
//! let loader = ResourceLoader::cached(Arc::new(ns));
//!
//! let ctx = ConfigContext::new().with_env_var("ENVIRONMENT", "prod");
//! let profile = ProfileResolver::resolve_from_context(&ctx);
//! let registry = SourceRegistry::build(&profile, &loader, &ctx).unwrap();
//! let config = ConfigResolver::new(registry);
//!
//! assert_eq!(profile, "production");
//! assert_eq!(config.get_string("log.level", "INFO"), "WARN");
//! assert_eq!(config.get_display_value("db.password").as_deref(), Some("***MASKED***"));
//! ```

pub mod types;
pub mod logging;
pub mod resources;
pub mod profile;
pub mod sources;
pub mod resolver;
pub mod overlay;
pub mod features;

// Re-export commonly used types
pub use types::{PropertySet, ResolvedValue, Resolution, Coerced, FallbackReason, Profile};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, RecordingLogger};

pub use resources::{
    ResourceNamespace, ResourceLoader, LoadError, LoadResult,
    MemoryNamespace, DirNamespace,
};

pub use profile::ProfileResolver;

pub use sources::{ConfigSource, ConfigContext, SourceRegistry, RegistryBuilder};

pub use resolver::{ConfigResolver, SensitivePatterns, MASK};

pub use overlay::{OverlayMerger, MergeReport};

pub use features::{FeatureFlags, CapabilityRegistry, ProfileSettings};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_end_to_end_from_disk() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("environments")).unwrap();
        fs::write(
            dir.path().join("application.properties"),
            "# defaults\napp.name = demo\nlog.level = INFO\ndb.password = s3cr3t\npool.size = 4\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("environments/production.properties"),
            "log.level = WARN\npool.size = 32\nfeature.metrics.enabled = true\n",
        )
        .unwrap();

        let loader = ResourceLoader::cached(Arc::new(DirNamespace::new(dir.path())));
        let ctx = ConfigContext::new()
            .with_env_var("ENVIRONMENT", "prod")
            .with_env_var("POOL_SIZE", "not-a-number")
            .with_override("app.name", "demo-override");

        let profile = ProfileResolver::resolve_from_context(&ctx);
        let registry = SourceRegistry::build(&profile, &loader, &ctx).unwrap();
        let config = ConfigResolver::new(registry);

        assert_eq!(config.get_string("app.name", ""), "demo-override");
        assert_eq!(config.get_string("log.level", ""), "WARN");

        // environment beats the profile file, then fails to parse
        let pool = config.get_int_checked("pool.size", 1);
        assert_eq!(pool.value, 1);
        assert_eq!(pool.fallback, Some(FallbackReason::Unparseable { raw: "not-a-number".to_string() }));

        let settings = ProfileSettings::from_resolver(&config);
        assert_eq!(settings.environment, "production");
        assert!(settings.metrics_enabled);

        let shown = config.display_properties(Some("db."));
        assert_eq!(shown.get("db.password"), Some(MASK));
        assert!(loader.is_cached("environments/production"));
        assert!(loader.is_cached("application"));
    }

    #[test]
    fn test_malformed_defaults_surface_to_caller() {
        let ns = MemoryNamespace::new().with_resource("application", "ok=1\nbroken line\n");
        let loader = ResourceLoader::new(Arc::new(ns));

        let err = SourceRegistry::build("local", &loader, &ConfigContext::new()).unwrap_err();
        assert!(!err.is_not_found());
        assert_eq!(err.resource_name(), "application");
    }
}

//! Typed snapshot of the settings every profile carries

use serde::Serialize;

use crate::profile::{ProfileResolver, DEFAULT_PROFILE, PROFILE_KEY};
use crate::resolver::ConfigResolver;

/// Environment, log level and the standard feature toggles, resolved once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSettings {
    pub environment: String,
    pub log_level: String,
    pub debug_enabled: bool,
    pub metrics_enabled: bool,
    pub cache_enabled: bool,
    pub security_strict: bool,
}

impl ProfileSettings {
    pub const LOG_LEVEL_KEY: &'static str = "log.level";
    pub const DEBUG_KEY: &'static str = "feature.debug.enabled";
    pub const METRICS_KEY: &'static str = "feature.metrics.enabled";
    pub const CACHE_KEY: &'static str = "feature.cache.enabled";
    pub const SECURITY_STRICT_KEY: &'static str = "feature.security.strict";

    /// Read the snapshot from `resolver`
    ///
    /// The environment is the registry's profile when it has one, otherwise
    /// the canonicalized `environment` key (default `local`).
    pub fn from_resolver(resolver: &ConfigResolver) -> Self {
        let environment = match resolver.registry().profile() {
            Some(profile) => profile.to_string(),
            None => ProfileResolver::canonical(&resolver.get_string(PROFILE_KEY, DEFAULT_PROFILE)),
        };

        Self {
            environment,
            log_level: resolver.get_string(Self::LOG_LEVEL_KEY, "INFO"),
            debug_enabled: resolver.get_bool(Self::DEBUG_KEY, false),
            metrics_enabled: resolver.get_bool(Self::METRICS_KEY, false),
            cache_enabled: resolver.get_bool(Self::CACHE_KEY, true),
            security_strict: resolver.get_bool(Self::SECURITY_STRICT_KEY, false),
        }
    }

    /// Whether `profile_id` (alias or canonical) is this snapshot's environment
    pub fn is_profile_active(&self, profile_id: &str) -> bool {
        ProfileResolver::is_active(profile_id, &self.environment)
    }
}

//! Profile resolver and alias table

use crate::sources::ConfigContext;
use crate::types::Profile;

/// Profile used when no candidate supplies one
pub const DEFAULT_PROFILE: &str = "local";

/// Override/property key naming the active profile
pub const PROFILE_KEY: &str = "environment";

/// Environment variable naming the active profile
pub const PROFILE_ENV_VAR: &str = "ENVIRONMENT";

/// Alias → canonical name
const ALIASES: &[(&str, &str)] = &[("dev", "development"), ("prod", "production")];

/// Resolves the canonical active profile name
///
/// Never fails: unknown names are accepted as their own canonical profile.
///
/// # Example
///
/// ```
/// use layerconf_core::ProfileResolver;
///
/// assert_eq!(ProfileResolver::resolve(&[None, Some("prod")]), "production");
/// assert_eq!(ProfileResolver::resolve(&[Some("qa")]), "qa");
/// assert_eq!(ProfileResolver::resolve(&[]), "local");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileResolver;

impl ProfileResolver {
    /// Take the first present, non-blank candidate and canonicalize it
    ///
    /// Candidates are trimmed; a blank candidate counts as absent.
    pub fn resolve(candidates: &[Option<&str>]) -> String {
        candidates
            .iter()
            .flatten()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
            .map(Self::canonical)
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// Resolve from a context: override `environment`, then the
    /// `ENVIRONMENT` variable, then the `environment` property
    pub fn resolve_from_context(ctx: &ConfigContext) -> String {
        Self::resolve(&[
            ctx.overrides().get(PROFILE_KEY),
            ctx.env().get(PROFILE_ENV_VAR),
            ctx.properties().get(PROFILE_KEY),
        ])
    }

    /// Canonical form of a single profile name
    pub fn canonical(name: &str) -> String {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or_else(|| name.to_string())
    }

    /// Full profile description for `name` (alias or canonical)
    pub fn profile(name: &str) -> Profile {
        let canonical = Self::canonical(name);
        let aliases = ALIASES
            .iter()
            .filter(|(_, c)| *c == canonical)
            .map(|(alias, _)| alias.to_string())
            .collect();
        Profile::new(canonical, aliases)
    }

    /// Whether `profile_id` names the same profile as `active`
    ///
    /// Both sides are canonicalized, so `dev` is active when the active
    /// profile is `development` and vice versa.
    pub fn is_active(profile_id: &str, active: &str) -> bool {
        Self::canonical(profile_id) == Self::canonical(active)
    }

    /// Every name under which `active` is known: canonical first, then aliases
    pub fn active_profiles(active: &str) -> Vec<String> {
        let profile = Self::profile(active);
        std::iter::once(profile.canonical_name)
            .chain(profile.aliases)
            .collect()
    }
}

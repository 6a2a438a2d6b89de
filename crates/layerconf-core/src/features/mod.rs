//! Feature flags, host capabilities and the typed profile settings snapshot

mod flags;
mod capabilities;
mod settings;

pub use flags::{FeatureFlags, FEATURE_ENV_PREFIX, FEATURE_KEY_PREFIX};
pub use capabilities::CapabilityRegistry;
pub use settings::ProfileSettings;

//! Configuration sources and the fixed-precedence registry
//!
//! Sources, highest precedence first:
//! 1. `override`: explicit in-process overrides
//! 2. `properties`: process-wide configuration properties
//! 3. `environment`: environment variables
//! 4. `profile:<name>`: `environments/<name>` resource
//! 5. `defaults`: global default resource

mod traits;
mod context;
mod property_source;
mod env_source;
mod registry;

pub use traits::ConfigSource;
pub use context::ConfigContext;
pub use property_source::PropertySetSource;
pub use env_source::{EnvSource, env_var_name};
pub use registry::{
    SourceRegistry, RegistryBuilder,
    OVERRIDE_PRIORITY, PROPERTIES_PRIORITY, ENVIRONMENT_PRIORITY, PROFILE_PRIORITY, DEFAULTS_PRIORITY,
    DEFAULTS_RESOURCE, ENVIRONMENTS_PREFIX,
};

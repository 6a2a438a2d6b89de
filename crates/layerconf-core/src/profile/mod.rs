//! Active profile resolution
//!
//! Picks the active environment name from ordered candidates and maps
//! short aliases (`dev`, `prod`) to canonical names.

mod resolver;

pub use resolver::{ProfileResolver, DEFAULT_PROFILE, PROFILE_KEY, PROFILE_ENV_VAR};

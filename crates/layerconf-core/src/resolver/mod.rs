//! Value resolution across a source registry
//!
//! Lookups walk the registry in precedence order; typed getters fall back
//! to caller defaults instead of failing, and display helpers mask
//! sensitive keys.

mod masking;
mod config_resolver;

pub use masking::{SensitivePatterns, MASK};
pub use config_resolver::ConfigResolver;
pub(crate) use config_resolver::parse_bool;

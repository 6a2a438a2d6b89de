//! Core data types shared by every resolution stage

mod property_set;
mod resolved;
mod profile;

pub use property_set::PropertySet;
pub use resolved::{ResolvedValue, Resolution, Coerced, FallbackReason};
pub use profile::Profile;

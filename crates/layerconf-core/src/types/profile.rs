//! Profile identity

use serde::Serialize;

/// A canonical profile name together with the aliases that map to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub canonical_name: String,
    pub aliases: Vec<String>,
}

impl Profile {
    pub fn new(canonical_name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases,
        }
    }

    /// Whether `name` is this profile's canonical name or one of its aliases
    pub fn matches(&self, name: &str) -> bool {
        self.canonical_name == name || self.aliases.iter().any(|a| a == name)
    }
}

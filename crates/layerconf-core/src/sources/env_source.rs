//! Environment variable source

use crate::types::PropertySet;

use super::traits::ConfigSource;

/// Environment-style name for a dotted key: `db.host` → `DB_HOST`
pub fn env_var_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Source over a snapshot of environment variables
///
/// A key is looked up as-is first. Dotted or dashed keys are then tried
/// under their environment-style name, so both `DB_HOST` and `db.host` find
/// the `DB_HOST` variable, while `user` never picks up `USER`.
///
/// # Example
///
/// ```
/// use layerconf_core::sources::{ConfigSource, EnvSource};
/// use layerconf_core::PropertySet;
///
/// let vars: PropertySet = vec![("DB_HOST", "db.internal")].into_iter().collect();
/// let env = EnvSource::new(vars, 20);
/// assert_eq!(env.lookup("db.host"), Some("db.internal".to_string()));
/// assert_eq!(env.lookup("DB_HOST"), Some("db.internal".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct EnvSource {
    vars: PropertySet,
    priority: i32,
}

impl EnvSource {
    pub fn new(vars: PropertySet, priority: i32) -> Self {
        Self { vars, priority }
    }

    pub fn vars(&self) -> &PropertySet {
        &self.vars
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "environment"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn lookup(&self, key: &str) -> Option<String> {
        if let Some(value) = self.vars.get(key) {
            return Some(value.to_string());
        }
        // plain keys (`user`, `path`) only match their exact variable
        if !key.contains(['.', '-']) {
            return None;
        }
        self.vars.get(&env_var_name(key)).map(str::to_string)
    }

    fn keys(&self) -> Vec<String> {
        self.vars.keys().map(str::to_string).collect()
    }
}

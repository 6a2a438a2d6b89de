//! Configuration source trait

/// A read-only source of configuration values
///
/// Implementations:
/// - `PropertySetSource`: Wraps a loaded or supplied `PropertySet`
/// - `EnvSource`: Snapshot of environment variables
///
/// Sources are immutable once constructed; `lookup` must return the same
/// answer for the same key for the source's whole lifetime.
pub trait ConfigSource: Send + Sync {
    /// Name reported in `ResolvedValue::source`
    fn name(&self) -> &str;

    /// Precedence; lower is checked first
    fn priority(&self) -> i32;

    /// Value for `key`
    ///
    /// Returns `None` only when the key is not configured here at all; a key
    /// configured as empty yields `Some("")`.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Keys this source defines, in the source's own order
    fn keys(&self) -> Vec<String>;

    /// Check if this source defines `key`
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

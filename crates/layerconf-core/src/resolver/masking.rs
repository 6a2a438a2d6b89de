//! Sensitive-key detection for display masking

/// Replacement shown instead of a sensitive value
pub const MASK: &str = "***MASKED***";

/// Case-insensitive substrings marking a key as sensitive
///
/// Only affects how values are displayed; stored values are never changed.
///
/// # Example
///
/// ```
/// use layerconf_core::SensitivePatterns;
///
/// let patterns = SensitivePatterns::default().with_pattern("token");
/// assert!(patterns.is_sensitive("db.PASSWORD"));
/// assert!(patterns.is_sensitive("api.token"));
/// assert!(!patterns.is_sensitive("db.host"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitivePatterns {
    patterns: Vec<String>,
}

impl Default for SensitivePatterns {
    fn default() -> Self {
        Self::new(["password", "secret"])
    }
}

impl SensitivePatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self { patterns: Vec::new() };
        for p in patterns {
            set = set.with_pattern(p.as_ref());
        }
        set
    }

    /// No patterns: nothing is masked
    pub fn none() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Add a pattern (stored lowercased; blanks and duplicates ignored)
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let pattern = pattern.trim().to_lowercase();
        if !pattern.is_empty() && !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_sensitive(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.patterns.iter().any(|p| key.contains(p.as_str()))
    }

    /// `value` unchanged, or `MASK` when `key` is sensitive
    pub fn display<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_sensitive(key) {
            MASK
        } else {
            value
        }
    }
}

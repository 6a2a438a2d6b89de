//! Lookup results and typed-coercion diagnostics

use serde::Serialize;

/// A value found in one of the configuration sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    /// The key that was looked up
    pub key: String,
    /// The stored value, unmodified
    pub raw: String,
    /// Name of the source that produced the value
    pub source: String,
}

impl ResolvedValue {
    pub fn new(key: impl Into<String>, raw: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw: raw.into(),
            source: source.into(),
        }
    }
}

/// Outcome of resolving a key across all sources
///
/// `Missing` is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedValue),
    Missing { key: String },
}

impl Resolution {
    pub fn missing(key: impl Into<String>) -> Self {
        Resolution::Missing { key: key.into() }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing { .. })
    }

    pub fn key(&self) -> &str {
        match self {
            Resolution::Found(v) => &v.key,
            Resolution::Missing { key } => key,
        }
    }

    /// The raw value, if found
    pub fn raw(&self) -> Option<&str> {
        match self {
            Resolution::Found(v) => Some(&v.raw),
            Resolution::Missing { .. } => None,
        }
    }

    /// Name of the producing source, if found
    pub fn source(&self) -> Option<&str> {
        match self {
            Resolution::Found(v) => Some(&v.source),
            Resolution::Missing { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<ResolvedValue> {
        match self {
            Resolution::Found(v) => Some(v),
            Resolution::Missing { .. } => None,
        }
    }
}

/// Why a typed getter returned the caller's default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    /// No source defines the key
    Missing,
    /// A value exists but does not parse as the requested type
    Unparseable { raw: String },
}

/// Typed value plus a record of whether the default was used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coerced<T> {
    pub value: T,
    pub fallback: Option<FallbackReason>,
}

impl<T> Coerced<T> {
    pub fn parsed(value: T) -> Self {
        Self { value, fallback: None }
    }

    pub fn defaulted(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            fallback: Some(reason),
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_accessors() {
        let found = Resolution::Found(ResolvedValue::new("db.host", "localhost", "defaults"));
        assert!(!found.is_missing());
        assert_eq!(found.key(), "db.host");
        assert_eq!(found.raw(), Some("localhost"));
        assert_eq!(found.source(), Some("defaults"));

        let missing = Resolution::missing("db.port");
        assert!(missing.is_missing());
        assert_eq!(missing.key(), "db.port");
        assert_eq!(missing.raw(), None);
        assert!(missing.into_value().is_none());
    }

    #[test]
    fn test_coerced() {
        let ok = Coerced::parsed(17);
        assert!(!ok.used_fallback());
        assert_eq!(ok.into_inner(), 17);

        let fallback = Coerced::defaulted(42, FallbackReason::Unparseable { raw: "abc".to_string() });
        assert!(fallback.used_fallback());
        let json = serde_json::to_value(&fallback).unwrap();
        assert_eq!(json["fallback"]["reason"], "unparseable");
        assert_eq!(json["fallback"]["raw"], "abc");
    }
}

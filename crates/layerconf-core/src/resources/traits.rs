//! Resource namespace trait and load errors

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while loading a property resource
///
/// Results are cloneable so a cached load can be shared between callers.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Resource not found: {name}")]
    NotFound { name: String },

    #[error("Malformed resource {name} at line {line}: missing '=' in {content:?}")]
    Malformed {
        name: String,
        line: usize,
        content: String,
    },

    #[error("Failed to read resource {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl LoadError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            source: Arc::new(source),
        }
    }

    /// Whether the resource simply does not exist (recoverable)
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    /// Name of the resource the error refers to
    pub fn resource_name(&self) -> &str {
        match self {
            LoadError::NotFound { name }
            | LoadError::Malformed { name, .. }
            | LoadError::Io { name, .. } => name,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A source of raw property-file text addressed by logical name
///
/// Implementations must return `LoadError::NotFound` when the name has no
/// entry, so callers can tell absence apart from a failed read.
pub trait ResourceNamespace: Send + Sync {
    /// Human-readable name of this namespace
    fn name(&self) -> &str;

    /// Read the full text of the resource `name`
    fn read(&self, name: &str) -> LoadResult<String>;

    /// Check if a resource exists
    fn exists(&self, name: &str) -> bool {
        self.read(name).is_ok()
    }
}

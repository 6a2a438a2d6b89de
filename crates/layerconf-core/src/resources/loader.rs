//! Property loader with optional single-flight caching

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::types::PropertySet;
use crate::log_debug;

use super::parser::parse_properties;
use super::traits::{ResourceNamespace, LoadResult};

type CacheSlot = Arc<OnceCell<LoadResult<PropertySet>>>;

/// Loads named property sets from a resource namespace
///
/// A plain loader reads and parses on every call. A cached loader performs
/// at most one load per distinct name: the first caller reads, concurrent
/// callers for the same name block until that read finishes and then share
/// its result (errors included).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use layerconf_core::resources::{MemoryNamespace, ResourceLoader};
///
/// let ns = MemoryNamespace::new().with_resource("application", "app.name = demo");
/// let loader = ResourceLoader::cached(Arc::new(ns));
///
/// let props = loader.load("application").unwrap();
/// assert_eq!(props.get("app.name"), Some("demo"));
/// assert!(loader.is_cached("application"));
/// assert!(loader.load("environments/qa").unwrap_err().is_not_found());
/// ```
pub struct ResourceLoader {
    namespace: Arc<dyn ResourceNamespace>,
    cache: Option<Mutex<HashMap<String, CacheSlot>>>,
    logger: SharedLogger,
}

impl ResourceLoader {
    /// Create a loader that reads on every call
    pub fn new(namespace: Arc<dyn ResourceNamespace>) -> Self {
        Self {
            namespace,
            cache: None,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Create a loader that memoizes each name's result
    pub fn cached(namespace: Arc<dyn ResourceNamespace>) -> Self {
        Self {
            namespace,
            cache: Some(Mutex::new(HashMap::new())),
            logger: Arc::new(NoOpLogger),
        }
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn namespace(&self) -> &Arc<dyn ResourceNamespace> {
        &self.namespace
    }

    /// Load and parse the resource `name`
    pub fn load(&self, name: &str) -> LoadResult<PropertySet> {
        let Some(cache) = &self.cache else {
            return self.read_and_parse(name);
        };

        // Take the slot under the map lock, then initialize outside it so
        // loads of different names never wait on each other.
        let slot = {
            let mut guard = cache.lock();
            guard
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let mut loaded_here = false;
        let result = slot.get_or_init(|| {
            loaded_here = true;
            self.read_and_parse(name)
        });
        if !loaded_here {
            log_debug!(self.logger, "resource '{}' served from cache", name);
        }
        result.clone()
    }

    /// Whether a result for `name` is already cached
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|c| c.lock().get(name).is_some_and(|slot| slot.get().is_some()))
    }

    /// Drop all cached results; later loads read again
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().clear();
        }
    }

    fn read_and_parse(&self, name: &str) -> LoadResult<PropertySet> {
        log_debug!(self.logger, "loading resource '{}' from {}", name, self.namespace.name());
        let text = self.namespace.read(name)?;
        parse_properties(name, &text)
    }
}

impl std::fmt::Debug for ResourceLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceLoader")
            .field("namespace", &self.namespace.name())
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

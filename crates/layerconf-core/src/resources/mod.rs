//! Resource loading
//!
//! Property files are addressed by slash-separated logical names
//! (`"environments/production"`) and read from an injected namespace:
//! - `MemoryNamespace`: In-memory map, for tests and embedded bundles
//! - `DirNamespace`: `.properties` files under a root directory
//!
//! `ResourceLoader` parses what the namespace returns and can memoize
//! results per name.

mod traits;
mod parser;
mod memory;
mod dir;
mod loader;

pub use traits::{ResourceNamespace, LoadError, LoadResult};
pub use parser::parse_properties;
pub use memory::MemoryNamespace;
pub use dir::DirNamespace;
pub use loader::ResourceLoader;

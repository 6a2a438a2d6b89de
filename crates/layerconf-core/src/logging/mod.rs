//! Logging abstractions for runtime-agnostic logging
//!
//! The resolution engine never prints; it reports through an injected
//! [`Logger`] and the host decides where messages go.

mod traits;
mod noop;
mod console;
mod recording;

pub use traits::{Logger, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use recording::{RecordingLogger, LogEntry};

//! In-memory logger that keeps every entry

use parking_lot::Mutex;

use super::traits::{Logger, LogLevel};

/// One captured log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that records entries instead of writing them
///
/// Useful in tests and for hosts that want to forward diagnostics after
/// resolution has finished.
///
/// # Example
///
/// ```
/// use layerconf_core::logging::{Logger, LogLevel, RecordingLogger};
///
/// let logger = RecordingLogger::new();
/// logger.warn("defaults file not found");
/// assert_eq!(logger.count(LogLevel::Warn), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Number of entries recorded at `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.lock().iter().filter(|e| e.level == level).count()
    }

    /// Whether any entry contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.lock().iter().any(|e| e.message.contains(needle))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

//! Shared helpers for unit tests.
//!
//! The logger is process-global: tests installing `CaptureLogger` must be
//! `#[serial]`, and should filter captured entries by source since
//! non-serial tests may log concurrently.

use std::sync::{Arc, Mutex};
use crate::log::{LogEntry, Logger};

/// Logger that records every entry it receives
pub(crate) struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    pub(crate) fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Entries emitted by `source`
pub(crate) fn entries_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

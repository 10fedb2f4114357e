//! Shared test support utilities

use crate::domain::Severity;
use crate::port::LogBackend;
use std::sync::Mutex;

/// Backend that keeps every emitted record in memory.
#[derive(Default)]
pub struct RecordingBackend {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl LogBackend for RecordingBackend {
    fn emit(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

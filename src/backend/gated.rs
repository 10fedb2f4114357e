use crate::domain::Severity;
use crate::gate::SeverityGate;
use crate::port::LogBackend;
use std::sync::Arc;

/// Checks the shared gate on every call and only then hands the record to
/// the backend.
#[derive(Debug, Clone)]
pub struct GatedLogger<B> {
    gate: Arc<SeverityGate>,
    backend: B,
}

impl<B: LogBackend> GatedLogger<B> {
    pub fn new(gate: Arc<SeverityGate>, backend: B) -> Self {
        Self { gate, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns whether the record was passed to the backend.
    pub fn log(&self, severity: Severity, message: &str) -> bool {
        if !self.gate.allows(severity) {
            return false;
        }
        self.backend.emit(severity, message);
        true
    }

    pub fn debug(&self, message: &str) -> bool {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: &str) -> bool {
        self.log(Severity::Info, message)
    }

    pub fn warn(&self, message: &str) -> bool {
        self.log(Severity::Warn, message)
    }

    pub fn error(&self, message: &str) -> bool {
        self.log(Severity::Error, message)
    }
}

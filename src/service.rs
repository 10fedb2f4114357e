use crate::domain::Severity;
use crate::error::LevelError;
use crate::gate::SeverityGate;
use std::sync::Arc;
use tracing::warn;

/// Reads and changes the shared [`SeverityGate`] on behalf of an operator.
///
/// Holds no state of its own; cloning shares the same gate.
#[derive(Debug, Clone)]
pub struct LevelControlService {
    gate: Arc<SeverityGate>,
}

impl LevelControlService {
    pub fn new(gate: Arc<SeverityGate>) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &Arc<SeverityGate> {
        &self.gate
    }

    /// Validate a level name. Case-insensitive, no whitespace trimming.
    pub fn parse_level(text: &str) -> Result<Severity, LevelError> {
        text.parse()
    }

    pub fn get_level(&self) -> Result<Severity, LevelError> {
        self.gate.get()
    }

    /// Parse `text` and, only if it names a level, store it in the gate.
    /// On failure the gate is left untouched.
    pub fn set_level(&self, text: &str) -> Result<Severity, LevelError> {
        let severity = match Self::parse_level(text) {
            Ok(severity) => severity,
            Err(e) => {
                warn!(rejected = %text, "Rejected log level change");
                return Err(e);
            }
        };

        // Logged after the store so the record is filtered by the new threshold.
        match self.gate.replace(severity) {
            Some(previous) => warn!(from = %previous, to = %severity, "Log level changed"),
            None => warn!(to = %severity, "Log level armed"),
        }

        Ok(severity)
    }
}

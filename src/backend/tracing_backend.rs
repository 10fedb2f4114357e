use crate::domain::Severity;
use crate::port::LogBackend;

/// Forwards records to the `tracing` dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl LogBackend for TracingBackend {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!("{message}"),
            Severity::Info => tracing::info!("{message}"),
            Severity::Warn => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

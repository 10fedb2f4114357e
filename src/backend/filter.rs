//! Per-layer `tracing_subscriber` filter backed by the shared gate.

use crate::domain::Severity;
use crate::gate::SeverityGate;
use std::sync::Arc;
use tracing::Metadata;
use tracing::subscriber::Interest;
use tracing_subscriber::layer::{Context, Filter};

/// Checks every `tracing` event against the current threshold.
///
/// Spans always pass so that events keep their span context. `TRACE` events
/// rank below [`Severity::Debug`] and are dropped once the gate is armed.
#[derive(Debug, Clone)]
pub struct GateFilter {
    gate: Arc<SeverityGate>,
}

impl GateFilter {
    pub fn new(gate: Arc<SeverityGate>) -> Self {
        Self { gate }
    }

    fn is_enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.is_span() {
            return true;
        }
        match Severity::from_tracing(metadata.level()) {
            Some(severity) => self.gate.allows(severity),
            None => !self.gate.is_initialized(),
        }
    }
}

impl<S> Filter<S> for GateFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.is_enabled(metadata)
    }

    // The threshold moves at runtime, so callsites must never cache a verdict.
    fn callsite_enabled(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }
}

use crate::backend::GateFilter;
use crate::gate::SeverityGate;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the tracing subscriber.
/// Uses JSON format when `RUST_LOG_FORMAT=json` (default for production).
///
/// The output layer is filtered by `gate`, so the threshold can be moved at
/// runtime. `RUST_LOG` directives still apply on top, e.g. `hyper=warn`;
/// without them the gate alone decides.
pub fn init_tracing(gate: Arc<SeverityGate>) {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(true); // Default to JSON for production

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::TRACE.into())
        .from_env_lossy();

    if use_json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_filter(GateFilter::new(gate)),
            )
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_filter(GateFilter::new(gate)))
            .with(env_filter)
            .init();
    }
}

pub mod filter;
pub mod gated;
pub mod tracing_backend;

pub use filter::GateFilter;
pub use gated::GatedLogger;
pub use tracing_backend::TracingBackend;

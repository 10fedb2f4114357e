use crate::domain::Severity;

/// Sink for formatted log records.
///
/// Implementations do not filter; threshold checks happen before `emit`
/// is called (see [`GatedLogger`](crate::backend::GatedLogger)).
pub trait LogBackend: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);
}

impl<B: LogBackend + ?Sized> LogBackend for std::sync::Arc<B> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

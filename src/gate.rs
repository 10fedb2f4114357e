//! Process-wide holder of the current severity threshold.
//!
//! Every log call site reads the gate, so both [`SeverityGate::get`] and
//! [`SeverityGate::set`] are a single atomic operation on one byte. A read
//! that starts after a `set` has returned observes the new value; a read that
//! races a `set` observes either the old or the new value.

use crate::domain::Severity;
use crate::error::LevelError;
use std::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;

#[derive(Debug)]
pub struct SeverityGate {
    current: AtomicU8,
}

impl SeverityGate {
    /// Create an armed gate holding `initial`.
    #[must_use]
    pub const fn new(initial: Severity) -> Self {
        Self {
            current: AtomicU8::new(initial.as_repr()),
        }
    }

    /// Create a gate that has not been armed yet. Reads fail with
    /// [`LevelError::Uninitialized`] until [`SeverityGate::initialize`] runs.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            current: AtomicU8::new(UNSET),
        }
    }

    /// Arm the gate with `initial`. Calling this again is a full reset.
    pub fn initialize(&self, initial: Severity) {
        self.current.store(initial.as_repr(), Ordering::SeqCst);
    }

    pub fn is_initialized(&self) -> bool {
        self.current.load(Ordering::SeqCst) != UNSET
    }

    pub fn get(&self) -> Result<Severity, LevelError> {
        Severity::from_repr(self.current.load(Ordering::SeqCst)).ok_or(LevelError::Uninitialized)
    }

    /// Unconditionally replace the threshold. Concurrent writers: last one wins.
    pub fn set(&self, severity: Severity) {
        self.current.store(severity.as_repr(), Ordering::SeqCst);
    }

    /// Like [`SeverityGate::set`], returning the value it overwrote
    /// (`None` if the gate was unarmed).
    pub(crate) fn replace(&self, severity: Severity) -> Option<Severity> {
        Severity::from_repr(self.current.swap(severity.as_repr(), Ordering::SeqCst))
    }

    /// Whether a record at `severity` passes the current threshold.
    ///
    /// An unarmed gate lets everything through, so nothing logged during
    /// startup is lost before configuration has been read.
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        match self.get() {
            Ok(threshold) => severity >= threshold,
            Err(_) => true,
        }
    }
}

impl Default for SeverityGate {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::thread;

    #[test]
    fn test_default_gate_is_info() {
        let gate = SeverityGate::default();
        assert_eq!(gate.get().unwrap(), Severity::Info);
        assert!(gate.is_initialized());
    }

    #[test]
    fn test_set_then_get() {
        let gate = SeverityGate::new(Severity::Error);
        gate.set(Severity::Debug);
        assert_eq!(gate.get().unwrap(), Severity::Debug);
    }

    #[test]
    fn test_unset_gate_reports_uninitialized() {
        let gate = SeverityGate::unset();
        assert!(!gate.is_initialized());
        assert_eq!(gate.get().unwrap_err(), LevelError::Uninitialized);
    }

    #[test]
    fn test_initialize_arms_and_resets() {
        let gate = SeverityGate::unset();
        gate.initialize(Severity::Warn);
        assert_eq!(gate.get().unwrap(), Severity::Warn);

        gate.set(Severity::Debug);
        gate.initialize(Severity::Error);
        assert_eq!(gate.get().unwrap(), Severity::Error);
    }

    #[test]
    fn test_replace_returns_previous() {
        let gate = SeverityGate::unset();
        assert_eq!(gate.replace(Severity::Info), None);
        assert_eq!(gate.replace(Severity::Error), Some(Severity::Info));
        assert_eq!(gate.get().unwrap(), Severity::Error);
    }

    #[test]
    fn test_allows_compares_against_threshold() {
        let gate = SeverityGate::new(Severity::Warn);
        assert!(!gate.allows(Severity::Debug));
        assert!(!gate.allows(Severity::Info));
        assert!(gate.allows(Severity::Warn));
        assert!(gate.allows(Severity::Error));
    }

    #[test]
    fn test_unset_gate_allows_everything() {
        let gate = SeverityGate::unset();
        for severity in Severity::ALL {
            assert!(gate.allows(severity));
        }
    }

    #[test]
    fn test_concurrent_readers_never_see_torn_value() {
        let gate = Arc::new(SeverityGate::new(Severity::Info));
        let stop = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                let stop = stop.clone();
                thread::spawn(move || {
                    while !stop.load(Ordering::Relaxed) {
                        let seen = gate.get().unwrap();
                        assert!(seen == Severity::Info || seen == Severity::Error);
                    }
                })
            })
            .collect();

        for i in 0..10_000 {
            gate.set(if i % 2 == 0 { Severity::Error } else { Severity::Info });
        }
        stop.store(true, Ordering::Relaxed);

        for reader in readers {
            assert!(reader.join().is_ok());
        }
    }
}

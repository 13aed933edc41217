//! Cooperative stop signal shared between the simulator and its workers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot stop broadcast.
///
/// Clones share the same flag. Once fired the signal stays fired; the simulator replaces
/// it with a fresh one on reset.
///
/// # Examples
///
/// ```
/// use mpsim_core::sim::StopSignal;
///
/// let signal = StopSignal::new();
/// let worker_view = signal.clone();
/// assert!(!worker_view.is_fired());
/// signal.fire();
/// assert!(worker_view.is_fired());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    /// Creates an unfired signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal. Idempotent.
    pub fn fire(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// True once `fire` has been called on this signal or any clone of it.
    pub fn is_fired(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

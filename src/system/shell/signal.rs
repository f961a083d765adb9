//! Line-ready handoff between the intake and dispatch contexts.

use core::sync::atomic::{AtomicBool, Ordering};

/// One-slot "a completed line is waiting" signal.
///
/// The intake context is the only caller of [`raise`](Self::raise) and the
/// dispatch context the only caller of [`take`](Self::take). With a single
/// consumer, `take` can be a load followed by a store, so no compare-and-swap
/// support is required from the target.
#[derive(Debug)]
pub struct LineSignal {
    ready: AtomicBool,
}

impl LineSignal {
    /// Create a lowered signal.
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Mark a completed line as available. Writes to the line buffer made
    /// before this call are visible to the context that observes it in `take`.
    pub fn raise(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Consume the signal. Returns `true` once per `raise`.
    pub fn take(&self) -> bool {
        if !self.ready.load(Ordering::Acquire) {
            return false;
        }
        self.ready.store(false, Ordering::Release);
        true
    }

    /// Lower the signal without consuming a line.
    pub fn clear(&self) {
        self.ready.store(false, Ordering::Release);
    }

    /// Whether a line is waiting.
    pub fn is_raised(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl Default for LineSignal {
    fn default() -> Self {
        Self::new()
    }
}

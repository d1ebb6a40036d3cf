//! Tick flag shared between the timer context and the polling loop

use portable_atomic::{AtomicBool, Ordering};

/// Single-slot tick signal
///
/// Signals that arrive while a tick is already pending coalesce into one;
/// ticks are never queued.
pub struct TickFlag {
    pending: AtomicBool,
}

impl Default for TickFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl TickFlag {
    /// Create a cleared flag
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Raise the flag (timer context)
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Read and clear the flag in one step (polling loop)
    ///
    /// A tick raised between a separate check and clear would be lost, so
    /// this is a single atomic swap.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Peek without clearing
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears() {
        let flag = TickFlag::new();
        assert!(!flag.take());

        flag.signal();
        assert!(flag.is_pending());
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_signals_coalesce() {
        let flag = TickFlag::new();
        flag.signal();
        flag.signal();
        flag.signal();

        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn test_static_flag() {
        static FLAG: TickFlag = TickFlag::new();
        FLAG.signal();
        assert!(FLAG.take());
    }
}

//! Sample cycle state machine
//!
//! ```text
//!   Idle ──(interval elapsed)──▶ ReadRequested ──(start)──▶ Converting
//!    ▲                                                          │
//!    └────────────────────────(result or error)─────────────────┘
//! ```

/// Phase of the current sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplePhase {
    /// Waiting for the next sample interval
    #[default]
    Idle,
    /// Interval elapsed, conversion not started yet
    ReadRequested,
    /// Conversion in progress
    Converting,
}

/// Tick-counting sample scheduler
#[derive(Debug, Clone)]
pub struct SampleCycle {
    phase: SamplePhase,
    ticks: u16,
    every_ticks: u16,
}

impl SampleCycle {
    /// Create a scheduler that samples once every `every_ticks` ticks
    pub fn new(every_ticks: u16) -> Self {
        Self {
            phase: SamplePhase::Idle,
            ticks: 0,
            every_ticks: every_ticks.max(1),
        }
    }

    /// Current phase
    pub fn phase(&self) -> SamplePhase {
        self.phase
    }

    /// Count one tick
    ///
    /// Returns `true` when this tick completes a sample interval. A new
    /// read is only requested from `Idle`; an interval that elapses while
    /// a sample is still in flight is dropped.
    pub fn on_tick(&mut self) -> bool {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks < self.every_ticks {
            return false;
        }

        self.ticks = 0;
        if self.phase == SamplePhase::Idle {
            self.phase = SamplePhase::ReadRequested;
        }
        true
    }

    /// Move from `ReadRequested` to `Converting`
    ///
    /// Returns `false` (and changes nothing) from any other phase.
    pub fn begin_conversion(&mut self) -> bool {
        if self.phase == SamplePhase::ReadRequested {
            self.phase = SamplePhase::Converting;
            true
        } else {
            false
        }
    }

    /// Return to `Idle` after a result or an error
    pub fn finish_conversion(&mut self) {
        self.phase = SamplePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let mut cycle = SampleCycle::new(20);

        for _ in 0..19 {
            assert!(!cycle.on_tick());
            assert_eq!(cycle.phase(), SamplePhase::Idle);
        }

        assert!(cycle.on_tick());
        assert_eq!(cycle.phase(), SamplePhase::ReadRequested);
    }

    #[test]
    fn test_full_cycle() {
        let mut cycle = SampleCycle::new(2);
        cycle.on_tick();
        cycle.on_tick();

        assert!(cycle.begin_conversion());
        assert_eq!(cycle.phase(), SamplePhase::Converting);

        // Can't start twice
        assert!(!cycle.begin_conversion());

        cycle.finish_conversion();
        assert_eq!(cycle.phase(), SamplePhase::Idle);

        // Next interval starts counting from zero
        assert!(!cycle.on_tick());
        assert!(cycle.on_tick());
        assert_eq!(cycle.phase(), SamplePhase::ReadRequested);
    }

    #[test]
    fn test_interval_while_busy_is_dropped() {
        let mut cycle = SampleCycle::new(1);
        assert!(cycle.on_tick());
        assert!(cycle.begin_conversion());

        // Interval elapses during conversion: reported, but no new request
        assert!(cycle.on_tick());
        assert_eq!(cycle.phase(), SamplePhase::Converting);
    }

    #[test]
    fn test_begin_from_idle_ignored() {
        let mut cycle = SampleCycle::new(5);
        assert!(!cycle.begin_conversion());
        assert_eq!(cycle.phase(), SamplePhase::Idle);
    }

    #[test]
    fn test_zero_interval_samples_every_tick() {
        let mut cycle = SampleCycle::new(0);
        assert!(cycle.on_tick());
    }
}

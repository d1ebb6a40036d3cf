//! Status LED flash timing

/// Tick-based one-shot LED flash
///
/// After [`restart`](LedFlash::restart) the LED is lit until more than
/// `on_ticks` ticks have passed.
#[derive(Debug, Clone)]
pub struct LedFlash {
    on_ticks: u16,
    elapsed: u16,
    active: bool,
}

impl LedFlash {
    /// Create an idle flash; `on_ticks == 0` disables flashing
    pub fn new(on_ticks: u16) -> Self {
        Self {
            on_ticks,
            elapsed: 0,
            active: false,
        }
    }

    /// Start a new flash
    pub fn restart(&mut self) {
        if self.on_ticks == 0 {
            return;
        }
        self.elapsed = 0;
        self.active = true;
    }

    /// Count one tick
    pub fn on_tick(&mut self) {
        if !self.active {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed > self.on_ticks {
            self.active = false;
        }
    }

    /// Whether the LED should be on
    pub fn is_lit(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_duration() {
        let mut flash = LedFlash::new(1);
        assert!(!flash.is_lit());

        flash.restart();
        assert!(flash.is_lit());

        flash.on_tick();
        assert!(flash.is_lit());

        flash.on_tick();
        assert!(!flash.is_lit());

        // Stays dark
        flash.on_tick();
        assert!(!flash.is_lit());
    }

    #[test]
    fn test_restart_extends() {
        let mut flash = LedFlash::new(2);
        flash.restart();
        flash.on_tick();
        flash.on_tick();
        flash.restart();
        flash.on_tick();
        flash.on_tick();
        assert!(flash.is_lit());
        flash.on_tick();
        assert!(!flash.is_lit());
    }

    #[test]
    fn test_disabled() {
        let mut flash = LedFlash::new(0);
        flash.restart();
        assert!(!flash.is_lit());
    }
}

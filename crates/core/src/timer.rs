//! Countdown timers driving gravity and input debounce.
//!
//! Timers are polled, not callback-driven: the owner calls [`Timer::advance`]
//! once per tick and dispatches on the returned fired flag itself.

/// A millisecond countdown that can optionally re-arm itself on expiry.
#[derive(Debug, Clone)]
pub struct Timer {
    duration_ms: f64,
    repeat: bool,
    /// Timestamp of the last arm. `None` means inactive; a timer that was
    /// never armed can never fire, however large the polled timestamp is.
    armed_at: Option<u64>,
}

impl Timer {
    pub fn new(duration_ms: f64, repeat: bool) -> Self {
        Self {
            duration_ms,
            repeat,
            armed_at: None,
        }
    }

    /// Start (or restart) the countdown from `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.armed_at = Some(now_ms);
    }

    /// Stop the countdown without firing.
    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    pub fn is_active(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Change the duration. Applies to the in-flight cycle as well; soft
    /// drop retunes the gravity timer mid-countdown this way.
    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }

    /// Poll the timer. Returns `true` at most once per arm/expire cycle;
    /// a repeating timer re-arms itself from `now_ms` after firing.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let Some(start) = self.armed_at else {
            return false;
        };

        if (now_ms.saturating_sub(start)) as f64 >= self.duration_ms {
            self.armed_at = if self.repeat { Some(now_ms) } else { None };
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = Timer::new(100.0, false);
        assert!(!timer.advance(0));
        assert!(!timer.advance(u64::MAX));
        assert!(!timer.is_active());
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let mut timer = Timer::new(100.0, false);
        timer.arm(1000);

        assert!(!timer.advance(1050));
        assert!(timer.is_active());

        assert!(timer.advance(1100));
        assert!(!timer.is_active());

        // Expired and disarmed: further polls do nothing.
        assert!(!timer.advance(2000));
    }

    #[test]
    fn repeating_timer_rearms_from_fire_time() {
        let mut timer = Timer::new(100.0, true);
        timer.arm(0);

        assert!(timer.advance(100));
        assert!(timer.is_active());
        assert!(!timer.advance(150));
        assert!(timer.advance(200));
    }

    #[test]
    fn disarm_suppresses_firing() {
        let mut timer = Timer::new(100.0, false);
        timer.arm(0);
        timer.disarm();
        assert!(!timer.advance(500));
    }

    #[test]
    fn duration_change_applies_to_inflight_cycle() {
        let mut timer = Timer::new(400.0, true);
        timer.arm(0);
        assert!(!timer.advance(200));

        timer.set_duration(120.0);
        assert!(timer.advance(201));
    }

    #[test]
    fn arming_at_epoch_zero_does_not_misfire() {
        let mut timer = Timer::new(100.0, false);
        timer.arm(0);
        assert!(!timer.advance(0));
        assert!(!timer.advance(99));
        assert!(timer.advance(100));
    }
}

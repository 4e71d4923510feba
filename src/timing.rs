//! Helper types around controlling the timing of frames and deadlines.

use std::time::Duration;

/// The clock every deadline in the game is measured against. Swapped for a mock in tests so the
/// countdown and the scheduled transitions can be driven by hand.
#[cfg(test)]
pub use mock_instant::Instant;
#[cfg(not(test))]
pub use std::time::Instant;

/// Keeps track of time between relatively steady pulses; used to pace the frame loop.
///
/// Ticks try to stay lined up with the original tick, but if [`Self::tick`] is called more than
/// half a period late, the next tick is reset relative to the current time instead.
pub struct Timer {
    next: std::time::Instant,
    period: Duration,
}

impl Timer {
    /// Create a new timer with the given period in seconds. The first tick is right now.
    pub fn new(period: f32) -> Self {
        Self {
            next: std::time::Instant::now(),
            period: Duration::from_secs_f32(period),
        }
    }

    /// How much time is left before the timer ticks over. Minimum 0.
    pub fn remaining(&self) -> Duration {
        self.next
            .checked_duration_since(std::time::Instant::now())
            .unwrap_or(Duration::ZERO)
    }

    /// Advance to the next tick.
    pub fn tick(&mut self) {
        let now = std::time::Instant::now();
        if now < self.next + self.period / 2 {
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }

    /// Check whether we've ticked over yet; if so, reset the timer.
    pub fn tick_ready(&mut self) -> bool {
        if std::time::Instant::now() > self.next {
            self.tick();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;
    use std::time::Duration;

    #[test]
    fn fresh_timer_is_ready() {
        let mut t = Timer::new(0.0);
        std::thread::sleep(Duration::from_millis(1));
        assert!(t.tick_ready());
    }

    #[test]
    fn long_period_not_ready_once_ticked() {
        let mut t = Timer::new(1000.0);
        // the first tick lands immediately; the next one is a full period out
        t.tick();
        assert!(!t.tick_ready());
        assert!(t.remaining() > Duration::from_secs(900));
    }
}

//! Polled debounce timer.
//!
//! The timer is not scheduled. The owner feeds it frame deltas with
//! [`DebounceTimer::advance`] and asks whether enough time has passed.

/// Enforces a minimum elapsed time between consecutive firings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTimer {
    wait_time: f32,
    elapsed: f32,
}

impl DebounceTimer {
    /// Creates a primed timer: the first [`try_fire`](Self::try_fire) succeeds.
    pub fn new(wait_time: f32) -> Self {
        Self {
            wait_time,
            elapsed: wait_time,
        }
    }

    /// Marks the full wait time as elapsed.
    pub fn prime(&mut self) {
        self.elapsed = self.wait_time;
    }

    /// Returns true once at least `wait_time` has elapsed since the last firing.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.wait_time
    }

    /// Fires the timer if it is ready, resetting elapsed time to zero.
    ///
    /// Returns `false` without side effects while the wait time is still running.
    pub fn try_fire(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.elapsed = 0.0;
        true
    }

    /// Adds a frame delta in seconds.
    ///
    /// Negative and non-finite deltas are rejected and leave the timer unchanged.
    /// Returns whether the delta was accepted.
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return false;
        }
        self.elapsed += delta_seconds;
        true
    }

    /// Seconds since the last firing (or since priming).
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Minimum seconds between firings.
    #[inline]
    pub fn wait_time(&self) -> f32 {
        self.wait_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_primed() {
        let mut timer = DebounceTimer::new(1.0);
        assert!(timer.is_ready());
        assert!(timer.try_fire());
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn firing_blocks_until_wait_time_elapses() {
        let mut timer = DebounceTimer::new(1.0);
        assert!(timer.try_fire());

        timer.advance(0.5);
        assert!(!timer.try_fire());
        assert_eq!(timer.elapsed(), 0.5);

        timer.advance(0.5);
        assert!(timer.try_fire());
    }

    #[test]
    fn zero_wait_time_always_fires() {
        let mut timer = DebounceTimer::new(0.0);
        assert!(timer.try_fire());
        assert!(timer.try_fire());
    }

    #[test]
    fn invalid_deltas_are_rejected() {
        let mut timer = DebounceTimer::new(1.0);
        timer.try_fire();

        assert!(!timer.advance(-0.25));
        assert!(!timer.advance(f32::NAN));
        assert!(!timer.advance(f32::INFINITY));
        assert_eq!(timer.elapsed(), 0.0);

        assert!(timer.advance(0.25));
        assert_eq!(timer.elapsed(), 0.25);
    }

    #[test]
    fn prime_makes_timer_ready_again() {
        let mut timer = DebounceTimer::new(2.0);
        timer.try_fire();
        assert!(!timer.is_ready());

        timer.prime();
        assert!(timer.is_ready());
    }
}

//! Interval timer driven by frame deltas

use serde::{Deserialize, Serialize};

/// Accumulates elapsed time and reports ready once it passes `interval`.
///
/// Readiness latches: the timer keeps reporting ready until `reset` is
/// called, and keeps accumulating if the caller keeps calling `add`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    counter: f32,
    interval: f32,
}

impl Timer {
    pub fn new(interval: f32) -> Self {
        Self {
            counter: 0.0,
            interval,
        }
    }

    /// Strictly past the interval
    #[inline]
    pub fn ready(&self) -> bool {
        self.counter > self.interval
    }

    #[inline]
    pub fn add(&mut self, delta_time: f32) {
        self.counter += delta_time;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.counter = 0.0;
    }

    pub fn counter(&self) -> f32 {
        self.counter
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ready_is_strict() {
        let mut timer = Timer::new(1000.0);
        assert!(!timer.ready());
        timer.add(1000.0);
        assert!(!timer.ready());
        timer.add(0.5);
        assert!(timer.ready());
    }

    #[test]
    fn test_ready_latches_until_reset() {
        let mut timer = Timer::new(10.0);
        timer.add(11.0);
        assert!(timer.ready());
        timer.add(5.0);
        assert!(timer.ready());
        assert_eq!(timer.counter(), 16.0);
        timer.reset();
        assert!(!timer.ready());
        assert_eq!(timer.counter(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_ready_matches_sum(
            interval in 0.1f32..5000.0,
            deltas in prop::collection::vec(0.0f32..100.0, 0..64),
        ) {
            let mut timer = Timer::new(interval);
            let mut sum = 0.0f32;
            for &dt in &deltas {
                timer.add(dt);
                sum += dt;
            }
            prop_assert_eq!(timer.ready(), sum > interval);

            // Restarting and replaying gives the same answer
            let first = timer.ready();
            timer.reset();
            prop_assert!(!timer.ready());
            for &dt in &deltas {
                timer.add(dt);
            }
            prop_assert_eq!(timer.ready(), first);
        }
    }
}

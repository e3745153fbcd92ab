//! Wall-clock time source for host runs.

use std::time::Instant;

use quadbot_core::traits::TimeSource;

/// Monotonic millisecond clock anchored at construction.
///
/// Copies share the anchor, so every component of a host run reads the
/// same timeline.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    epoch: Instant,
}

impl WallClock {
    /// Create a clock whose zero point is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_starts_near_zero() {
        let clock = WallClock::new();
        assert!(clock.now_ms() < 100);
    }

    #[test]
    fn test_never_runs_backwards() {
        let clock = WallClock::new();
        let first = clock.now_ms();
        std::thread::sleep(Duration::from_millis(5));
        let second = clock.now_ms();
        assert!(second >= first);
        assert!(second >= 5);
    }

    #[test]
    fn test_copies_share_the_anchor() {
        let clock = WallClock::new();
        let copy = clock;
        std::thread::sleep(Duration::from_millis(5));
        assert!(copy.now_ms() >= 5);
        assert!(copy.now_ms().abs_diff(clock.now_ms()) < 5);
    }

    #[test]
    fn test_elapsed_uses_clock_time() {
        let clock = WallClock::new();
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.elapsed_ms(0) >= 5);
        // A reference in the future saturates to zero
        assert_eq!(clock.elapsed_ms(u64::MAX), 0);
    }
}

//! Time abstraction trait for platform-agnostic timing.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! monotonic clock providers (hardware millis counters, wall clock, mock) to
//! enable host testing without embedded dependencies.

use core::cell::Cell;

/// Platform-agnostic monotonic clock for gait timing and link supervision.
///
/// This trait abstracts over different time providers:
/// - `WallClock` (in the simulator crate) for host runs
/// - `MockTime` for deterministic tests with controllable time
///
/// # Example
///
/// ```
/// use quadbot_core::traits::{MockTime, TimeSource};
///
/// fn poll_due<T: TimeSource>(time: &T, last_poll_ms: &mut u64) -> bool {
///     if time.elapsed_ms(*last_poll_ms) >= 20 {
///         *last_poll_ms = time.now_ms();
///         return true;
///     }
///     false
/// }
///
/// let time = MockTime::new();
/// let mut last = 0;
/// poll_due(&time, &mut last);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns elapsed time in milliseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle potential overflow.
    fn elapsed_ms(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// This implementation allows tests to control time progression,
/// enabling deterministic testing of timing-dependent code.
///
/// # Example
///
/// ```
/// use quadbot_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_ms(), 0);
///
/// time.advance(1000); // Advance 1s
/// assert_eq!(time.now_ms(), 1000);
/// ```
#[derive(Clone, Default)]
pub struct MockTime {
    current_ms: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts
// where Cell is safe. The Send+Sync bounds on TimeSource trait
// are required for firmware contexts, but MockTime is not used there.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(ms: u64) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get() + ms);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

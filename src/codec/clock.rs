use std::time::{Duration, Instant};

/// Time source for the cycle processor. Swapped for a virtual clock in tests
/// so full runs cost no wall-clock time.
pub trait Clock: Send + Sync {
    /// Monotonic time since the clock's origin.
    fn now(&self) -> Duration;
    /// Blocks the caller (or advances virtual time) for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real monotonic clock backed by `Instant` and `thread::sleep`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
pub use manual::ManualClock;

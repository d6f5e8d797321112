use std::time::{Duration, Instant};

/// Monotonic time source for the performance tracker.
///
/// `Manual` only moves when [`advance`](Clock::advance) is called, which lets
/// tests pin response times to exact values.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Monotonic,
    Manual(Instant),
}

impl Clock {
    /// A clock that follows real elapsed time.
    #[must_use]
    pub fn monotonic() -> Self {
        Self::Monotonic
    }

    /// A clock frozen at the moment of the call.
    #[must_use]
    pub fn manual() -> Self {
        Self::Manual(Instant::now())
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        match self {
            Clock::Monotonic => Instant::now(),
            Clock::Manual(t) => *t,
        }
    }

    /// Move a manual clock forward. No effect on `Clock::Monotonic`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual(t) = self {
            *t += delta;
        }
    }

    /// Convenience for `advance(Duration::from_secs_f64(secs))`.
    ///
    /// # Panics
    ///
    /// Panics if `secs` is negative, NaN, or too large for a `Duration`.
    pub fn advance_secs(&mut self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Clock::Manual(_))
    }
}

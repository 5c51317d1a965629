//! Time sources for the search deadline.
//!
//! The search polls its clock before every candidate attempt and stops once
//! the elapsed time reaches the budget. [`SystemClock`] measures wall-clock
//! time; [`StepClock`] advances by a fixed amount per poll, which makes the
//! stopping point independent of machine speed.

use std::time::{Duration, Instant};

/// A source of elapsed time.
pub trait Clock {
    /// Returns the time elapsed since the clock was started.
    fn elapsed(&mut self) -> Duration;
}

impl<C> Clock for &mut C
where
    C: Clock + ?Sized,
{
    fn elapsed(&mut self) -> Duration {
        (**self).elapsed()
    }
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        self.start.elapsed()
    }
}

/// A deterministic clock that advances by `tick` every time it is polled.
///
/// The first poll reports zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use xwordgen_generator::{Clock, StepClock};
///
/// let mut clock = StepClock::new(Duration::from_millis(1));
/// assert_eq!(clock.elapsed(), Duration::ZERO);
/// assert_eq!(clock.elapsed(), Duration::from_millis(1));
/// assert_eq!(clock.polls(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StepClock {
    tick: Duration,
    now: Duration,
    polls: u64,
}

impl StepClock {
    /// Creates a clock advancing by `tick` per poll.
    #[must_use]
    pub const fn new(tick: Duration) -> Self {
        Self {
            tick,
            now: Duration::ZERO,
            polls: 0,
        }
    }

    /// Returns how many times the clock has been polled.
    #[must_use]
    pub const fn polls(&self) -> u64 {
        self.polls
    }
}

impl Clock for StepClock {
    fn elapsed(&mut self) -> Duration {
        let now = self.now;
        self.now = self.now.saturating_add(self.tick);
        self.polls += 1;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_advances_per_poll() {
        fn poll<C: Clock>(mut clock: C) -> Duration {
            clock.elapsed()
        }

        let mut clock = StepClock::new(Duration::from_secs(2));
        assert_eq!(poll(&mut clock), Duration::ZERO);
        assert_eq!(poll(&mut clock), Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(4));
        assert_eq!(clock.polls(), 3);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}

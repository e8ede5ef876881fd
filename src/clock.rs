//! Monotonic time source
//!
//! The harness reads time through the [`Clock`] trait so tests can script the
//! timestamps it sees.

use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Trait for reading a monotonic timestamp
pub trait Clock {
    /// Current timestamp
    fn now(&self) -> Instant;

    /// Elapsed time between two timestamps read from this clock
    ///
    /// An `end` earlier than `start` is reported as a clock fault instead of
    /// being clamped to zero.
    fn elapsed_between(&self, start: Instant, end: Instant) -> Result<Duration> {
        end.checked_duration_since(start)
            .ok_or_else(|| Error::ClockWentBackwards {
                behind_ns: start.duration_since(end).as_nanos(),
            })
    }
}

/// System monotonic clock backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock replaying a fixed sequence of offsets from a base instant
#[cfg(test)]
pub struct ScriptedClock {
    base: Instant,
    offsets: std::cell::RefCell<std::collections::VecDeque<Duration>>,
}

#[cfg(test)]
impl ScriptedClock {
    /// Create a clock that returns `base + offset` for each offset in turn
    pub fn new<I: IntoIterator<Item = Duration>>(offsets: I) -> Self {
        Self {
            base: Instant::now(),
            offsets: std::cell::RefCell::new(offsets.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl Clock for ScriptedClock {
    fn now(&self) -> Instant {
        let offset = self
            .offsets
            .borrow_mut()
            .pop_front()
            .expect("ScriptedClock ran out of timestamps");
        self.base + offset
    }
}

// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked input coalescing.
//!
//! Continuous slider drags produce a value per pointer event. [`Debounce`]
//! keeps only the latest value and releases it once input has been quiet for
//! a short interval, so the host relayouts and redraws once per pause instead
//! of once per event.
//!
//! The host owns the clock: timestamps are plain [`Duration`]s measured from
//! any fixed origin (a frame clock, `Instant` deltas, `performance.now()`).
//!
//! ```
//! use core::time::Duration;
//! use viewfinder_session::Debounce;
//!
//! let mut focal = Debounce::default();
//! focal.push(35.0, Duration::from_millis(0));
//! focal.push(40.0, Duration::from_millis(5));
//!
//! assert_eq!(focal.poll(Duration::from_millis(10)), None);
//! assert_eq!(focal.poll(Duration::from_millis(20)), Some(40.0));
//! assert_eq!(focal.poll(Duration::from_millis(40)), None);
//! ```

use core::time::Duration;

/// Quiet interval used by [`Debounce::default`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(15);

/// Trailing-edge debouncer for a single value.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debounce<T> {
    /// Creates a debouncer that waits `delay` after the last push.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the quiet interval.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records `value` at time `now`, replacing any pending value and
    /// restarting the quiet interval.
    pub fn push(&mut self, value: T, now: Duration) {
        self.pending = Some((value, now.saturating_add(self.delay)));
    }

    /// Releases the pending value if its quiet interval has elapsed by `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Releases the pending value immediately, for example on pointer up.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Returns when the pending value becomes due, if any.
    ///
    /// Hosts with a timer queue can schedule a wake-up for this instant.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Returns `true` while a value is waiting to be released.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

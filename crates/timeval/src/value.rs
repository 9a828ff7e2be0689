//! crates/timeval/src/value.rs
//! Wall-clock value types with microsecond and nanosecond fractions.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of microseconds in one second.
pub const MICROS_PER_SECOND: i64 = 1_000_000;
/// Number of nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Number of microseconds in one millisecond.
pub const MICROS_PER_MILLI: i64 = 1_000;
/// Number of nanoseconds in one microsecond.
pub const NANOS_PER_MICRO: i64 = 1_000;

/// A point in wall-clock time with microsecond resolution.
///
/// Mirrors the `timeval` layout used by POSIX clocks: `sec` counts whole
/// seconds since the Unix epoch and `usec` holds the sub-second fraction.
/// Values produced by [`TimeVal::now`] or converted from [`SystemTime`] keep
/// `usec` within `0..1_000_000`; values built by hand are expected to do the
/// same.
///
/// Equality is exact and component-wise, so two values that describe the
/// same instant with different normalisation compare unequal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimeVal {
    /// Whole seconds since the Unix epoch.
    pub sec: i64,
    /// Microsecond fraction.
    pub usec: i64,
}

impl TimeVal {
    /// The Unix epoch.
    pub const EPOCH: Self = Self { sec: 0, usec: 0 };

    /// Creates a value from its components.
    #[must_use]
    pub const fn new(sec: i64, usec: i64) -> Self {
        Self { sec, usec }
    }

    /// Reads the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// Returns the value as a signed count of microseconds since the epoch.
    ///
    /// The computation is carried out in `i128`, so it cannot overflow for
    /// any pair of `i64` components.
    #[must_use]
    pub const fn as_micros(&self) -> i128 {
        self.sec as i128 * MICROS_PER_SECOND as i128 + self.usec as i128
    }

    /// Returns the sub-second fraction truncated to whole milliseconds.
    #[must_use]
    pub const fn subsec_millis(&self) -> i64 {
        self.usec / MICROS_PER_MILLI
    }
}

impl From<SystemTime> for TimeVal {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self {
                sec: after.as_secs() as i64,
                usec: i64::from(after.subsec_micros()),
            },
            Err(before) => {
                // Borrow one second so the fraction stays non-negative.
                let before = before.duration();
                let sec = -(before.as_secs() as i64);
                let usec = i64::from(before.subsec_micros());
                if usec == 0 {
                    Self { sec, usec: 0 }
                } else {
                    Self {
                        sec: sec - 1,
                        usec: MICROS_PER_SECOND - usec,
                    }
                }
            }
        }
    }
}

impl fmt::Display for TimeVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.sec, self.usec)
    }
}

/// A point in wall-clock time with nanosecond resolution.
///
/// Mirrors the POSIX `timespec` layout. Converting from a [`TimeVal`] is
/// lossless; converting back truncates the fraction to whole microseconds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimeSpec {
    /// Whole seconds since the Unix epoch.
    pub sec: i64,
    /// Nanosecond fraction.
    pub nsec: i64,
}

impl TimeSpec {
    /// Creates a value from its components.
    #[must_use]
    pub const fn new(sec: i64, nsec: i64) -> Self {
        Self { sec, nsec }
    }
}

impl From<TimeVal> for TimeSpec {
    fn from(tv: TimeVal) -> Self {
        Self {
            sec: tv.sec,
            nsec: tv.usec * NANOS_PER_MICRO,
        }
    }
}

impl From<TimeSpec> for TimeVal {
    fn from(ts: TimeSpec) -> Self {
        Self {
            sec: ts.sec,
            usec: ts.nsec / NANOS_PER_MICRO,
        }
    }
}

//! crates/print/src/timestamp.rs
//! Wall-clock prefix rendered at the start of every printed line.

use std::fmt;
use std::time::SystemTime;

use time::{OffsetDateTime, UtcOffset};
use timeval::TimeVal;

/// Width of the `HH:MM:SS` clock text.
pub const CLOCK_TEXT_LEN: usize = 8;

/// Zone used to render the time of day.
///
/// Converts from a [`UtcOffset`] as [`TimeZone::Fixed`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeZone {
    /// The system's local time, looked up for each rendered instant so
    /// daylight saving transitions take effect on the next line.
    Local {
        /// Offset used when the platform cannot report one.
        fallback: UtcOffset,
    },
    /// A fixed offset from UTC.
    Fixed(UtcOffset),
}

impl TimeZone {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self::Fixed(UtcOffset::UTC);

    /// Local time, falling back to the offset in effect right now.
    #[must_use]
    pub fn local() -> Self {
        Self::Local {
            fallback: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    /// Returns the offset that applies at `instant`.
    #[must_use]
    pub fn offset_at(self, instant: OffsetDateTime) -> UtcOffset {
        match self {
            Self::Local { fallback } => UtcOffset::local_offset_at(instant).unwrap_or(fallback),
            Self::Fixed(offset) => offset,
        }
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UTC
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(offset: UtcOffset) -> Self {
        Self::Fixed(offset)
    }
}

/// Time of day with millisecond precision.
///
/// Renders as `HH:MM:SS:mmm`, every field zero-padded.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl Timestamp {
    /// `00:00:00:000`.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Builds a timestamp from its fields, rejecting out-of-range values.
    #[must_use]
    pub const fn from_hms_milli(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 && millisecond < 1000 {
            Some(Self {
                hour,
                minute,
                second,
                millisecond,
            })
        } else {
            None
        }
    }

    /// Reads the wall clock and renders it in `zone`.
    #[must_use]
    pub fn now(zone: impl Into<TimeZone>) -> Self {
        Self::from_system_time(SystemTime::now(), zone).unwrap_or(Self::MIDNIGHT)
    }

    /// Converts a [`SystemTime`] to the time of day in `zone`.
    #[must_use]
    pub fn from_system_time(time: SystemTime, zone: impl Into<TimeZone>) -> Option<Self> {
        Self::from_timeval(&TimeVal::from(time), zone)
    }

    /// Converts a wall-clock value to the time of day in `zone`.
    ///
    /// The offset is looked up for this instant. The millisecond field is the
    /// microsecond fraction divided by 1000. Returns `None` when the value
    /// lies outside the calendar range.
    #[must_use]
    pub fn from_timeval(tv: &TimeVal, zone: impl Into<TimeZone>) -> Option<Self> {
        let utc = OffsetDateTime::from_unix_timestamp(tv.sec).ok()?;
        let local = utc.checked_to_offset(zone.into().offset_at(utc))?;
        let millisecond = tv.subsec_millis().clamp(0, 999) as u16;
        Self::from_hms_milli(local.hour(), local.minute(), local.second(), millisecond)
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns the millisecond (0-999).
    #[must_use]
    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    /// Renders `HH:MM:SS` into a fixed stack buffer.
    #[must_use]
    pub const fn clock(&self) -> ClockText {
        let mut text = [b':'; CLOCK_TEXT_LEN];
        put_two_digits(&mut text, 0, self.hour);
        put_two_digits(&mut text, 3, self.minute);
        put_two_digits(&mut text, 6, self.second);
        ClockText(text)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:03}", self.clock(), self.millisecond)
    }
}

const fn put_two_digits(text: &mut [u8; CLOCK_TEXT_LEN], at: usize, value: u8) {
    text[at] = b'0' + value / 10;
    text[at + 1] = b'0' + value % 10;
}

/// `HH:MM:SS` held in an eight byte buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ClockText([u8; CLOCK_TEXT_LEN]);

impl ClockText {
    /// Returns the rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and colons are ever written.
        std::str::from_utf8(&self.0).unwrap_or("00:00:00")
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CLOCK_TEXT_LEN] {
        &self.0
    }
}

impl fmt::Display for ClockText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

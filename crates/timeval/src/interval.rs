//! crates/timeval/src/interval.rs
//! Equality and millisecond difference between two wall-clock values.

use crate::error::TimeError;
use crate::value::{MICROS_PER_MILLI, TimeVal};

/// Reports whether `t1` and `t2` hold identical components.
///
/// No tolerance is applied: both the seconds and the microsecond fraction
/// must match exactly.
///
/// # Examples
///
/// ```
/// use timeval::{TimeVal, timeval_equals};
///
/// assert!(timeval_equals(&TimeVal::new(3, 10), &TimeVal::new(3, 10)));
/// assert!(!timeval_equals(&TimeVal::new(3, 10), &TimeVal::new(3, 11)));
/// ```
#[must_use]
pub fn timeval_equals(t1: &TimeVal, t2: &TimeVal) -> bool {
    t1.sec == t2.sec && t1.usec == t2.usec
}

/// Computes the number of milliseconds from `start` to `end`.
///
/// Seconds and fractions are combined before dividing, so any
/// sub-millisecond remainder is truncated once. Results beyond the `i32`
/// range saturate.
///
/// The caller must ensure `end` is at or after `start`. When it is not, the
/// result is negative and must be read as an error marker rather than a
/// duration; it may come from either a caller ordering mistake or a wall
/// clock that stepped backwards, and this function cannot tell the two
/// apart. A reversal shorter than one millisecond still yields `-1`.
///
/// # Examples
///
/// ```
/// use timeval::{TimeVal, ms_time_diff};
///
/// let start = TimeVal::new(10, 500_000);
/// let end = TimeVal::new(12, 250_000);
/// assert_eq!(ms_time_diff(&start, &end), 1750);
///
/// let later = TimeVal::new(5, 0);
/// let earlier = TimeVal::new(4, 0);
/// assert!(ms_time_diff(&later, &earlier) < 0);
/// ```
#[must_use]
pub fn ms_time_diff(start: &TimeVal, end: &TimeVal) -> i32 {
    let span = end.as_micros() - start.as_micros();
    // Floor keeps every reversed interval strictly negative.
    let millis = span.div_euclid(i128::from(MICROS_PER_MILLI));

    #[cfg(feature = "tracing")]
    {
        if millis < 0 {
            tracing::warn!(
                target: "timeval::interval",
                start = %start,
                end = %end,
                "interval end precedes start"
            );
        }
    }

    millis.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

/// Computes the number of whole milliseconds from `start` to `end`.
///
/// This is the checked counterpart of [`ms_time_diff`]: instead of a
/// negative sentinel it reports [`TimeError::Reversed`], and spans that do
/// not fit a `u32` yield [`TimeError::Overflow`].
///
/// # Examples
///
/// ```
/// use timeval::{TimeError, TimeVal, elapsed_ms};
///
/// let start = TimeVal::new(1, 0);
/// let end = TimeVal::new(1, 2_500);
/// assert_eq!(elapsed_ms(&start, &end), Ok(2));
/// assert_eq!(
///     elapsed_ms(&end, &start),
///     Err(TimeError::Reversed { span_micros: 2_500 })
/// );
/// ```
pub fn elapsed_ms(start: &TimeVal, end: &TimeVal) -> Result<u32, TimeError> {
    let span = end.as_micros() - start.as_micros();
    if span < 0 {
        return Err(TimeError::Reversed {
            span_micros: span.unsigned_abs(),
        });
    }

    let millis = span.unsigned_abs() / MICROS_PER_MILLI as u128;
    u32::try_from(millis).map_err(|_| TimeError::Overflow { millis })
}

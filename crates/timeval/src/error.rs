//! crates/timeval/src/error.rs
//! Errors reported by the checked interval helpers.

/// Error returned by [`elapsed_ms`](crate::elapsed_ms).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// The interval end lies before its start.
    #[error("interval end precedes start by {span_micros} microseconds")]
    Reversed {
        /// Magnitude of the reversal in microseconds.
        span_micros: u128,
    },

    /// The interval does not fit the millisecond result type.
    #[error("interval of {millis} milliseconds exceeds the representable range")]
    Overflow {
        /// Length of the interval in whole milliseconds.
        millis: u128,
    },
}

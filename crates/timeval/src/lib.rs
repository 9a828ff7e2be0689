#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/timeval/src/lib.rs
//!
//! # Overview
//!
//! `timeval` provides the wall-clock value types and the interval arithmetic
//! used across the SDK for latency measurement and event pacing. A
//! [`TimeVal`] pairs whole seconds with a microsecond fraction, a
//! [`TimeSpec`] pairs them with a nanosecond fraction, and the two convert
//! into each other by scaling or truncating the fractional component.
//!
//! # Design
//!
//! Everything here is a pure function over `Copy` values. Nothing is
//! allocated and no state outlives a call, so the helpers can be invoked
//! concurrently from any thread.
//!
//! # Invariants
//!
//! - A valid value keeps its fraction in `0..1_000_000` (microseconds) or
//!   `0..1_000_000_000` (nanoseconds). Constructors that start from
//!   [`std::time::SystemTime`] always produce normalised values.
//! - [`ms_time_diff`] never panics. A negative result is reserved as the
//!   misuse sentinel: it is returned when `end` precedes `start`, even by
//!   less than one millisecond.
//!
//! # Errors
//!
//! [`ms_time_diff`] reports misuse through its sign. Callers that prefer an
//! explicit error can use [`elapsed_ms`], which returns [`TimeError`].
//!
//! # Examples
//!
//! ```
//! use timeval::{TimeVal, ms_time_diff, timeval_equals};
//!
//! let start = TimeVal::new(10, 500_000);
//! let end = TimeVal::new(12, 250_000);
//!
//! assert_eq!(ms_time_diff(&start, &end), 1750);
//! assert!(ms_time_diff(&end, &start) < 0);
//! assert!(!timeval_equals(&start, &end));
//! ```

mod error;
mod interval;
mod value;

pub use crate::error::TimeError;
pub use crate::interval::{elapsed_ms, ms_time_diff, timeval_equals};
pub use crate::value::{
    MICROS_PER_MILLI, MICROS_PER_SECOND, NANOS_PER_MICRO, NANOS_PER_SECOND, TimeSpec, TimeVal,
};

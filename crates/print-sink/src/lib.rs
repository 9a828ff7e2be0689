#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/print-sink/src/lib.rs
//!
//! # Overview
//!
//! `print-sink` provides the destinations that receive lines rendered by the
//! `print` facade. Every type here implements [`print::Sink`].
//!
//! # Design
//!
//! - [`WriterSink`] streams lines into any [`std::io::Write`] implementor
//!   behind a mutex, optionally decorated as `[ERR] TAG | ` per [`TagMode`].
//!   [`ConsoleSink`] is the same sink bound to stderr or stdout.
//! - [`MemorySink`] keeps [`CapturedLine`] values for inspection.
//! - [`syslog::SyslogSink`] (unix) maps levels to syslog priorities.
//! - [`ForeignSink`] hands lines to a C print function through a `"%s"`
//!   format.
//! - With the `tracing` feature, `TracingSink` forwards lines as tracing
//!   events.
//!
//! # Invariants
//!
//! - Sinks never reinterpret the rendered line: no `%` expansion happens
//!   after the facade formatted it.
//! - A line is written in one critical section: the sink's mutex for
//!   [`WriterSink`], the process-wide stream lock for [`ConsoleSink`].
//!   Concurrent callers never interleave within a line.
//!
//! # Errors
//!
//! Sinks return [`std::io::Error`] from the underlying writer or C callee.
//! Lines containing NUL bytes cannot cross a C boundary and are rejected
//! with [`std::io::ErrorKind::InvalidInput`].
//!
//! # Examples
//!
//! ```
//! use print::{BuildMode, Level, PrintConfig, Printer, arsal_print};
//! use print_sink::WriterSink;
//!
//! let config = PrintConfig::DEFAULT.with_mode(BuildMode::Release);
//! let printer = Printer::new(config, WriterSink::new(Vec::new()));
//! arsal_print!(printer: &printer, Level::Error, "Video", "decoder stalled");
//!
//! let output = String::from_utf8(printer.into_sink().into_inner()).unwrap();
//! assert!(output.starts_with("[ERR] Video | "));
//! assert!(output.ends_with(" - decoder stalled\n"));
//! ```
//!
//! # See also
//!
//! - `print` for the facade and the [`print::Sink`] contract.

#[allow(unsafe_code)]
mod foreign;
mod memory;
mod tag_mode;
mod writer;

#[cfg(unix)]
#[allow(unsafe_code)]
/// Syslog backend for printed lines.
pub mod syslog;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use foreign::{ForeignSink, LinePrintFn, RawPrintFn};
pub use memory::{CapturedLine, MemorySink};
pub use tag_mode::TagMode;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, TracingSink, init_tracing_console};
pub use writer::{ConsoleSink, ConsoleStream, WriterSink};

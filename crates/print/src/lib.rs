#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/print/src/lib.rs
//!
//! # Overview
//!
//! `print` is the leveled print facade of the SDK. Call sites use
//! [`arsal_print!`] (or the [`print_error!`], [`print_warning!`] and
//! [`print_debug!`] shorthands) with a [`Level`], a tag, and a format
//! string. Each printed line has the same shape:
//!
//! ```text
//! HH:MM:SS:mmm | <function>:<line> - <message>\n
//! ```
//!
//! # Design
//!
//! - The build-mode gate is a [`PrintConfig`] resolved once at process start
//!   and installed with [`install`]. Checking it is one integer comparison,
//!   performed before the clock is read or any argument is formatted.
//! - The call site is captured by [`callsite!`] where the macro expands, so
//!   every line names the function that issued it.
//! - A [`Record`] lives on the stack for one call. Its rendered line is
//!   handed to a [`Sink`] as [`std::fmt::Arguments`], so the facade itself
//!   never allocates.
//!
//! # Invariants
//!
//! - Every rendered line ends with exactly one newline: the facade appends
//!   one only when the format literal does not already end with `\n`.
//! - Release mode never calls the sink for [`Level::Debug`].
//! - The facade keeps no state between calls; printers are immutable once
//!   built.
//!
//! # Errors
//!
//! [`Printer::emit`] returns whatever the sink returns. The macros discard
//! that result: printing is diagnostic output and never load-bearing.
//!
//! # Examples
//!
//! ```
//! use print::{BuildMode, Level, PrintConfig, Printer, Sink, arsal_print};
//! use std::fmt;
//! use std::io;
//! use std::sync::Mutex;
//!
//! #[derive(Default)]
//! struct Collect(Mutex<String>);
//!
//! impl Sink for Collect {
//!     fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
//!         let text = format!("[{}] {tag} | {line}", level.short_name());
//!         self.0.lock().unwrap().push_str(&text);
//!         Ok(text.len())
//!     }
//! }
//!
//! fn pair() -> Printer<Collect> {
//!     let printer = Printer::new(PrintConfig::DEFAULT.with_mode(BuildMode::Release), Collect::default());
//!     arsal_print!(printer: &printer, Level::Warning, "BLE", "rssi {}", -70);
//!     arsal_print!(printer: &printer, Level::Debug, "BLE", "not printed in release");
//!     printer
//! }
//!
//! let printer = pair();
//! let output = printer.sink().0.lock().unwrap().clone();
//! assert!(output.starts_with("[WNG] BLE | "));
//! assert!(output.contains(" | pair:"));
//! assert!(output.ends_with(" - rssi -70\n"));
//! assert_eq!(output.lines().count(), 1);
//! ```
//!
//! # See also
//!
//! - `print-sink` for console, syslog, in-memory and C-boundary sinks.
//! - `timeval` for the wall-clock values used by [`Timestamp::from_timeval`].

mod callsite;
mod config;
mod level;
mod macros;
mod printer;
mod record;
mod sink;
mod timestamp;

pub use callsite::{CallSite, enclosing_function};
pub use config::{BuildMode, ConfigError, MODE_ENV_VAR, PrintConfig};
pub use level::{Level, ParseLevelError, Threshold};
pub use printer::{
    GlobalPrinter, InstallError, Printer, install, install_with, is_installed, printer,
};
pub use record::{Line, Prefix, Record, ends_with_newline};
pub use sink::{NullSink, Sink};
pub use time::UtcOffset;
pub use timestamp::{CLOCK_TEXT_LEN, ClockText, TimeZone, Timestamp};

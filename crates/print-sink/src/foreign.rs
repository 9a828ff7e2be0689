//! crates/print-sink/src/foreign.rs
//! Adapter for a C-side print function.
//!
//! Lines are rendered in Rust and handed across the boundary as one
//! NUL-terminated string. A variadic `Raw(level, tag, format, ...)` callee
//! receives it as the single argument of a `"%s"` format, so a `%` inside a
//! message is never interpreted by the C side.

use print::{Level, Sink};
use std::ffi::{CString, c_char, c_int};
use std::fmt;
use std::io;

/// C print function receiving a level, a tag and a printf format with its
/// arguments.
///
/// Level codes follow [`Level::ordinal`]: `0` error, `1` warning, `2` debug.
/// A negative return value reports failure; otherwise it is the number of
/// characters printed.
pub type RawPrintFn =
    unsafe extern "C" fn(level: c_int, tag: *const c_char, format: *const c_char, ...) -> c_int;

/// C print function receiving a level, a tag and an already rendered line.
///
/// Return values follow [`RawPrintFn`].
pub type LinePrintFn =
    unsafe extern "C" fn(level: c_int, tag: *const c_char, line: *const c_char) -> c_int;

#[derive(Clone, Copy, Debug)]
enum Callee {
    Raw(RawPrintFn),
    Line(LinePrintFn),
}

/// Sink forwarding each line to a C print function.
#[derive(Clone, Copy, Debug)]
pub struct ForeignSink {
    callee: Callee,
}

impl ForeignSink {
    /// Wraps a variadic C print function.
    ///
    /// # Safety
    ///
    /// `raw` must accept a NUL-terminated tag, a NUL-terminated printf format
    /// and the arguments that format describes. It must be safe to call from
    /// any thread for as long as the sink is alive.
    #[must_use]
    pub const unsafe fn new(raw: RawPrintFn) -> Self {
        Self {
            callee: Callee::Raw(raw),
        }
    }

    /// Wraps a C print function that takes the rendered line directly.
    ///
    /// # Safety
    ///
    /// `line` must accept a NUL-terminated tag and a NUL-terminated line. It
    /// must be safe to call from any thread for as long as the sink is alive.
    #[must_use]
    pub const unsafe fn with_line_fn(line: LinePrintFn) -> Self {
        Self {
            callee: Callee::Line(line),
        }
    }
}

impl Sink for ForeignSink {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        let tag = CString::new(tag).map_err(invalid_input)?;
        let line = CString::new(line.to_string()).map_err(invalid_input)?;
        let level = c_int::from(level.ordinal());

        let printed = match self.callee {
            // SAFETY: the constructor's contract covers the call. "%s" consumes
            // exactly one C string and both strings outlive the call.
            Callee::Raw(raw) => unsafe {
                raw(level, tag.as_ptr(), c"%s".as_ptr(), line.as_ptr())
            },
            // SAFETY: the constructor's contract covers the call and both
            // strings outlive it.
            Callee::Line(print_line) => unsafe {
                print_line(level, tag.as_ptr(), line.as_ptr())
            },
        };

        usize::try_from(printed)
            .map_err(|_| io::Error::other(format!("foreign print function returned {printed}")))
    }
}

fn invalid_input(err: std::ffi::NulError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

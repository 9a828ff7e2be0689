//! crates/print/src/sink.rs
//! Contract for the external collaborator that writes rendered lines.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::level::Level;

/// Destination for fully rendered lines.
///
/// The facade calls [`raw`](Sink::raw) once per printed line, passing the
/// level and tag through unchanged so the sink can route or filter on them.
/// `line` already carries the timestamp prefix and its newline terminator.
///
/// Implementations are shared across threads and must tolerate concurrent
/// calls. Failures are reported to the direct caller of
/// [`Printer::emit`](crate::Printer::emit); the print macros discard them.
pub trait Sink: Send + Sync {
    /// Writes one line and returns the number of bytes written.
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        (**self).raw(level, tag, line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        (**self).raw(level, tag, line)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        (**self).raw(level, tag, line)
    }
}

/// Sink that discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn raw(&self, _level: Level, _tag: &str, _line: fmt::Arguments<'_>) -> io::Result<usize> {
        Ok(0)
    }
}

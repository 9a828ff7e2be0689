//! crates/print-sink/src/writer.rs
//! Sinks that stream rendered lines into an [`std::io::Write`] implementor.

use print::{Level, Sink};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::tag_mode::TagMode;

/// Sink that writes each line into a shared writer.
///
/// Writes are serialised through a mutex so concurrent callers never
/// interleave within a line. A writer left poisoned by a panicking thread is
/// recovered and keeps receiving lines.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    tag_mode: TagMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that prefixes lines with their level and tag.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_tag_mode(writer, TagMode::Bracketed)
    }

    /// Creates a sink with an explicit [`TagMode`].
    #[must_use]
    pub const fn with_tag_mode(writer: W, tag_mode: TagMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            tag_mode,
        }
    }

    /// Returns the decoration applied to each line.
    #[must_use]
    pub const fn tag_mode(&self) -> TagMode {
        self.tag_mode
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> WriterSink<W> {
    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        write_line(&mut *self.lock(), self.tag_mode, level, tag, line)
    }
}

/// Writes the optional prefix and the line, then flushes.
///
/// Callers hold the writer's lock for the whole call so the line is one
/// critical section.
fn write_line<W: Write + ?Sized>(
    writer: &mut W,
    tag_mode: TagMode,
    level: Level,
    tag: &str,
    line: fmt::Arguments<'_>,
) -> io::Result<usize> {
    let prefix = tag_mode.write_prefix(&mut *writer, level, tag)?;
    let mut counted = Counted::new(&mut *writer);
    counted.write_fmt(line)?;
    let body = counted.written;
    writer.flush()?;
    Ok(prefix + body)
}

/// Counts the bytes accepted by the inner writer.
struct Counted<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: Write + ?Sized> Counted<'a, W> {
    const fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write + ?Sized> Write for Counted<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Standard stream used by a [`ConsoleSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsoleStream {
    /// Standard error.
    Stderr,
    /// Standard output.
    Stdout,
}

/// Sink writing to the process's standard error or standard output.
///
/// Each line is written while holding the stream's process-wide lock, so
/// `eprintln!`/`println!` calls from other threads cannot split it.
///
/// ```no_run
/// use print::{PrintConfig, install};
/// use print_sink::ConsoleSink;
///
/// install(PrintConfig::from_env_or_default(), ConsoleSink::stderr()).ok();
/// print::print_warning!("Main", "battery at {}%", 12);
/// ```
#[derive(Debug)]
pub struct ConsoleSink {
    stream: ConsoleStream,
    tag_mode: TagMode,
}

impl ConsoleSink {
    /// Console sink on standard error with bracketed tags.
    #[must_use]
    pub const fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr, TagMode::Bracketed)
    }

    /// Console sink on standard output with bracketed tags.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout, TagMode::Bracketed)
    }

    /// Console sink on `stream` with an explicit [`TagMode`].
    #[must_use]
    pub const fn new(stream: ConsoleStream, tag_mode: TagMode) -> Self {
        Self { stream, tag_mode }
    }

    /// Returns the stream lines are written to.
    #[must_use]
    pub const fn stream(&self) -> ConsoleStream {
        self.stream
    }

    /// Returns the decoration applied to each line.
    #[must_use]
    pub const fn tag_mode(&self) -> TagMode {
        self.tag_mode
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Sink for ConsoleSink {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        match self.stream {
            ConsoleStream::Stderr => {
                write_line(&mut io::stderr().lock(), self.tag_mode, level, tag, line)
            }
            ConsoleStream::Stdout => {
                write_line(&mut io::stdout().lock(), self.tag_mode, level, tag, line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn text(sink: WriterSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf8")
    }

    #[test]
    fn bracketed_sink_prefixes_level_and_tag() {
        let sink = WriterSink::new(Vec::new());
        let written = sink
            .raw(Level::Error, "ARSAL", format_args!("12:00:00:001 | main:10 - boom\n"))
            .expect("write");
        let output = text(sink);
        assert_eq!(output, "[ERR] ARSAL | 12:00:00:001 | main:10 - boom\n");
        assert_eq!(written, output.len());
    }

    #[test]
    fn bare_sink_writes_line_unchanged() {
        let sink = WriterSink::with_tag_mode(Vec::new(), TagMode::Bare);
        sink.raw(Level::Debug, "ARSAL", format_args!("line {}\n", 1))
            .expect("write");
        assert_eq!(text(sink), "line 1\n");
    }

    #[test]
    fn lines_accumulate_in_order() {
        let sink = WriterSink::with_tag_mode(Vec::new(), TagMode::Bare);
        for index in 0..3 {
            sink.raw(Level::Warning, "T", format_args!("{index}\n"))
                .expect("write");
        }
        assert_eq!(text(sink), "0\n1\n2\n");
    }

    #[test]
    fn poisoned_writer_is_recovered() {
        let sink = Arc::new(WriterSink::with_tag_mode(Vec::new(), TagMode::Bare));
        let poisoner = Arc::clone(&sink);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the writer");
        })
        .join();
        assert!(joined.is_err());

        sink.raw(Level::Error, "T", format_args!("after\n"))
            .expect("write after poison");
        let sink = Arc::try_unwrap(sink).expect("sole owner");
        assert_eq!(text(sink), "after\n");
    }

    #[test]
    fn write_errors_propagate() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(Closed);
        let err = sink
            .raw(Level::Error, "T", format_args!("x\n"))
            .expect_err("closed writer");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn console_defaults_to_stderr_with_tags() {
        let sink = ConsoleSink::default();
        assert_eq!(sink.stream(), ConsoleStream::Stderr);
        assert_eq!(sink.tag_mode(), TagMode::Bracketed);
        assert_eq!(ConsoleSink::stdout().stream(), ConsoleStream::Stdout);
    }

    #[test]
    fn console_sink_reports_decorated_length() {
        let sink = ConsoleSink::new(ConsoleStream::Stdout, TagMode::Bracketed);
        let written = sink
            .raw(Level::Debug, "Con", format_args!("x\n"))
            .expect("stdout");
        assert_eq!(written, "[DBG] Con | x\n".len());
    }

    #[test]
    fn console_line_waits_for_the_stream_lock() {
        let held = io::stderr().lock();
        let writer = std::thread::spawn(|| {
            ConsoleSink::stderr().raw(Level::Warning, "Con", format_args!("queued\n"))
        });
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert!(!writer.is_finished());

        drop(held);
        let written = writer.join().expect("writer thread").expect("stderr");
        assert_eq!(written, "[WNG] Con | queued\n".len());
    }
}

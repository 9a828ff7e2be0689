//! crates/print-sink/src/memory.rs
//! In-memory sink for tests and embedders that forward lines elsewhere.

use print::{Level, Sink};
use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One line received by a [`MemorySink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedLine {
    /// Severity passed to the sink.
    pub level: Level,
    /// Tag passed to the sink.
    pub tag: String,
    /// Rendered line, including its timestamp prefix and newline.
    pub text: String,
}

/// Sink that keeps every line in memory until drained.
///
/// ```
/// use print::{BuildMode, Level, PrintConfig, Printer, arsal_print};
/// use print_sink::MemorySink;
///
/// let printer = Printer::new(PrintConfig::DEFAULT.with_mode(BuildMode::Debug), MemorySink::new());
/// arsal_print!(printer: &printer, Level::Debug, "Stream", "frame {}", 7);
///
/// let lines = printer.sink().drain();
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].tag, "Stream");
/// assert!(lines[0].text.ends_with(" - frame 7\n"));
/// assert!(printer.sink().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Number of lines currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no lines are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns every held line in arrival order.
    #[must_use]
    pub fn drain(&self) -> Vec<CapturedLine> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a copy of the held lines without removing them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CapturedLine> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        let text = line.to_string();
        let written = text.len();
        self.lock().push(CapturedLine {
            level,
            tag: tag.to_owned(),
            text,
        });
        Ok(written)
    }
}

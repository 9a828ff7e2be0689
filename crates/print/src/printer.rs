//! crates/print/src/printer.rs
//! Gate-then-format entry point and the process-wide printer.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use crate::callsite::CallSite;
use crate::config::PrintConfig;
use crate::level::Level;
use crate::record::Record;
use crate::sink::{NullSink, Sink};
use crate::timestamp::Timestamp;

/// A configuration paired with the sink that receives its lines.
///
/// The printer holds no mutable state. Every call reads the configuration,
/// builds a [`Record`] on the stack, and hands the rendered line to the
/// sink.
#[derive(Clone, Debug)]
pub struct Printer<S> {
    config: PrintConfig,
    sink: S,
}

impl<S> Printer<S> {
    /// Pairs a configuration with a sink.
    #[must_use]
    pub const fn new(config: PrintConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the printer and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reports whether a line at `level` would be printed.
    #[inline]
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        self.config.enabled(level)
    }
}

impl<S: Sink> Printer<S> {
    /// Prints one line if `level` passes the configured gate.
    ///
    /// Suppressed levels return `Ok(0)` without reading the clock or
    /// formatting `message`. Otherwise the sink's result is passed through
    /// unchanged.
    pub fn emit(
        &self,
        level: Level,
        tag: &str,
        callsite: CallSite,
        message: fmt::Arguments<'_>,
        append_newline: bool,
    ) -> io::Result<usize> {
        if !self.enabled(level) {
            return Ok(0);
        }

        let timestamp = Timestamp::now(self.config.zone());
        let record = Record::new(level, tag, timestamp, callsite, message, append_newline);
        self.sink.raw(level, tag, format_args!("{}", record.line()))
    }
}

/// Type of the process-wide printer.
pub type GlobalPrinter = Printer<&'static dyn Sink>;

static GLOBAL: OnceLock<GlobalPrinter> = OnceLock::new();
static FALLBACK: GlobalPrinter = Printer::new(PrintConfig::DEFAULT, &NullSink);

/// Error returned by [`install`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InstallError {
    /// A printer was already installed for this process.
    #[error("a process-wide printer is already installed")]
    AlreadyInstalled,
}

/// Installs the process-wide printer used by the print macros.
///
/// Succeeds once per process; later calls leave the first printer in place
/// and report [`InstallError::AlreadyInstalled`]. The sink is moved to the
/// heap once and kept for the rest of the process.
pub fn install<S>(config: PrintConfig, sink: S) -> Result<(), InstallError>
where
    S: Sink + 'static,
{
    install_with(config, || sink)
}

/// Like [`install`], building the sink only if this call installs it.
///
/// `make_sink` runs at most once per process. When a printer is already
/// installed it is not called, so sinks that acquire process-wide resources
/// are never opened and then dropped.
pub fn install_with<S, F>(config: PrintConfig, make_sink: F) -> Result<(), InstallError>
where
    S: Sink + 'static,
    F: FnOnce() -> S,
{
    let mut installed_now = false;
    GLOBAL.get_or_init(|| {
        installed_now = true;
        let sink: &'static dyn Sink = Box::leak(Box::new(make_sink()));
        Printer::new(config, sink)
    });

    if installed_now {
        Ok(())
    } else {
        Err(InstallError::AlreadyInstalled)
    }
}

/// Reports whether [`install`] has succeeded.
#[must_use]
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

/// Returns the process-wide printer.
///
/// Until [`install`] succeeds this is a printer with
/// [`PrintConfig::DEFAULT`] and a [`NullSink`], so printing before start-up
/// has finished is a silent no-op.
#[inline]
#[must_use]
pub fn printer() -> &'static GlobalPrinter {
    GLOBAL.get().unwrap_or(&FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildMode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Recording {
        calls: AtomicUsize,
        lines: Mutex<Vec<(Level, String, String)>>,
    }

    impl Sink for Recording {
        fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = line.to_string();
            let written = text.len();
            self.lines
                .lock()
                .expect("lock")
                .push((level, tag.to_owned(), text));
            Ok(written)
        }
    }

    struct Failing;

    impl Sink for Failing {
        fn raw(&self, _: Level, _: &str, _: fmt::Arguments<'_>) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn site() -> CallSite {
        CallSite::new("tests::site::__print_callsite", 7)
    }

    #[test]
    fn release_printer_skips_debug() {
        let printer = Printer::new(
            PrintConfig::DEFAULT.with_mode(BuildMode::Release),
            Recording::default(),
        );
        let written = printer
            .emit(Level::Debug, "T", site(), format_args!("hidden"), true)
            .expect("suppressed");
        assert_eq!(written, 0);
        assert_eq!(printer.sink().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn release_printer_keeps_errors_and_warnings() {
        let printer = Printer::new(
            PrintConfig::DEFAULT.with_mode(BuildMode::Release),
            Recording::default(),
        );
        printer
            .emit(Level::Error, "T", site(), format_args!("e"), true)
            .expect("printed");
        printer
            .emit(Level::Warning, "T", site(), format_args!("w"), true)
            .expect("printed");
        assert_eq!(printer.sink().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn emit_passes_level_tag_and_byte_count_through() {
        let printer = Printer::new(
            PrintConfig::DEFAULT.with_mode(BuildMode::Debug),
            Recording::default(),
        );
        let written = printer
            .emit(Level::Debug, "GATT", site(), format_args!("ok"), true)
            .expect("printed");

        let lines = printer.sink().lines.lock().expect("lock");
        let (level, tag, text) = &lines[0];
        assert_eq!(*level, Level::Debug);
        assert_eq!(tag, "GATT");
        assert_eq!(written, text.len());
        assert!(text.ends_with(" | site:7 - ok\n"));
    }

    #[test]
    fn emit_returns_sink_failure() {
        let printer = Printer::new(PrintConfig::DEFAULT.with_mode(BuildMode::Debug), Failing);
        let err = printer
            .emit(Level::Error, "T", site(), format_args!("x"), true)
            .expect_err("sink fails");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn fallback_printer_discards_output() {
        let written = FALLBACK
            .emit(Level::Error, "T", site(), format_args!("x"), true)
            .expect("null sink");
        assert_eq!(written, 0);
    }
}

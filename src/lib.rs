#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `arsal` bundles the SDK's leveled print facade, its sinks, and the
//! wall-clock interval helpers behind one dependency:
//!
//! - [`print`]: levels, the build-mode gate, call-site capture and the
//!   `arsal_print!` macro family.
//! - [`print_sink`]: console, in-memory, syslog and C-boundary sinks.
//! - [`timeval`]: `TimeVal`/`TimeSpec` values and millisecond differences.
//!
//! # Start-up
//!
//! A process calls [`init`] (or [`init_with`]) once, before its worker
//! threads start. Lines printed before that are discarded.
//!
//! ```no_run
//! arsal::init().ok();
//! arsal::print_warning!("Main", "firmware {} is outdated", "4.2.1");
//!
//! let start = arsal::timeval::TimeVal::now();
//! let end = arsal::timeval::TimeVal::now();
//! arsal::print_debug!("Main", "startup took {} ms", arsal::timeval::ms_time_diff(&start, &end));
//! ```

pub use print;
pub use print::{
    InstallError, Level, PrintConfig, arsal_print, print_debug, print_error, print_warning,
};
pub use print_sink;
pub use timeval;

use print::Sink;
use print_sink::ConsoleSink;

/// Installs the process-wide printer on stderr with the configuration
/// resolved from the build and `ARSAL_PRINT_MODE`.
///
/// An unparseable `ARSAL_PRINT_MODE` falls back to the build default.
pub fn init() -> Result<(), InstallError> {
    init_with(PrintConfig::from_env_or_default(), ConsoleSink::stderr())
}

/// Installs the process-wide printer with an explicit configuration and
/// sink.
pub fn init_with<S>(config: PrintConfig, sink: S) -> Result<(), InstallError>
where
    S: Sink + 'static,
{
    print::install(config, sink)
}

/// Installs the process-wide printer on syslog(3).
///
/// syslog is opened only if this call installs the printer; the connection
/// then stays open for the rest of the process.
#[cfg(unix)]
pub fn init_syslog(
    config: PrintConfig,
    syslog: &print_sink::syslog::SyslogConfig,
) -> Result<(), InstallError> {
    print::install_with(config, || print_sink::syslog::SyslogSink::open(syslog))
}

//! Integration tests for the process-wide printer.
//!
//! Each test binary is its own process, so this file installs the global
//! printer once and every test filters the shared capture by its own tag.

use print::{
    BuildMode, InstallError, Level, NullSink, PrintConfig, Sink, install, install_with,
    is_installed, print_debug, print_error, print_warning, printer,
};
use std::fmt;
use std::io;
use std::sync::{Mutex, Once};

static LINES: Mutex<Vec<(Level, String, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();

struct Shared;

impl Sink for Shared {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        let text = line.to_string();
        let len = text.len();
        LINES
            .lock()
            .expect("lock")
            .push((level, tag.to_owned(), text));
        Ok(len)
    }
}

fn setup() {
    INSTALL.call_once(|| {
        install(PrintConfig::DEFAULT.with_mode(BuildMode::Release), Shared)
            .expect("first install succeeds");
    });
}

fn lines_for(tag: &str) -> Vec<(Level, String)> {
    LINES
        .lock()
        .expect("lock")
        .iter()
        .filter(|(_, t, _)| t == tag)
        .map(|(level, _, text)| (*level, text.clone()))
        .collect()
}

#[test]
fn shorthand_macros_route_through_installed_printer() {
    setup();
    print_error!("Shorthand", "error {}", 1);
    print_warning!("Shorthand", "warning {}", 2);
    print_debug!("Shorthand", "debug {}", 3);

    let lines = lines_for("Shorthand");
    assert_eq!(lines.len(), 2, "debug is suppressed in release mode");
    assert_eq!(lines[0].0, Level::Error);
    assert!(lines[0].1.ends_with(" - error 1\n"));
    assert_eq!(lines[1].0, Level::Warning);
    assert!(lines[1].1.contains(" | shorthand_macros_route_through_installed_printer:"));
}

#[test]
fn second_install_is_rejected() {
    setup();
    assert!(is_installed());
    let result = install(PrintConfig::DEFAULT.with_mode(BuildMode::Debug), NullSink);
    assert_eq!(result, Err(InstallError::AlreadyInstalled));
    assert_eq!(printer().config().mode(), BuildMode::Release);
}

#[test]
fn later_install_never_builds_its_sink() {
    setup();
    let mut built = false;
    let result = install_with(PrintConfig::DEFAULT, || {
        built = true;
        NullSink
    });
    assert_eq!(result, Err(InstallError::AlreadyInstalled));
    assert!(!built);
}

#[test]
fn installed_printer_reports_configured_gate() {
    setup();
    assert!(printer().enabled(Level::Error));
    assert!(printer().enabled(Level::Warning));
    assert!(!printer().enabled(Level::Debug));
}

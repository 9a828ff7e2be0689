//! crates/print/src/macros.rs
//! Call-site macros that gate, capture location, and format.

/// Prints a leveled, tagged line.
///
/// The level gate runs first; a suppressed call costs one integer
/// comparison and never evaluates the format arguments. An enabled call
/// captures the call site, appends a newline unless the format literal
/// already ends with one, and forwards the line to the sink. Sink errors are
/// discarded.
///
/// Without a `printer:` argument the process-wide printer is used.
///
/// ```
/// use print::{BuildMode, Level, NullSink, PrintConfig, Printer, arsal_print};
///
/// const TAG: &str = "Pairing";
///
/// let printer = Printer::new(PrintConfig::DEFAULT.with_mode(BuildMode::Release), NullSink);
/// arsal_print!(printer: &printer, Level::Warning, TAG, "retrying in {} ms", 250);
/// arsal_print!(Level::Error, TAG, "controller unreachable");
/// ```
#[macro_export]
macro_rules! arsal_print {
    (printer: $printer:expr, $level:expr, $tag:expr, $fmt:literal $($arg:tt)*) => {{
        let __printer = $printer;
        let __level: $crate::Level = $level;
        if __printer.enabled(__level) {
            let _ = __printer.emit(
                __level,
                $tag,
                $crate::callsite!(),
                ::core::format_args!($fmt $($arg)*),
                const { !$crate::ends_with_newline($fmt) },
            );
        }
    }};
    ($level:expr, $tag:expr, $fmt:literal $($arg:tt)*) => {
        $crate::arsal_print!(printer: $crate::printer(), $level, $tag, $fmt $($arg)*)
    };
}

/// Prints an error line through the process-wide printer.
///
/// ```
/// print::print_error!("Discovery", "socket bind failed: {}", -1);
/// ```
#[macro_export]
macro_rules! print_error {
    ($tag:expr, $fmt:literal $($arg:tt)*) => {
        $crate::arsal_print!($crate::Level::Error, $tag, $fmt $($arg)*)
    };
}

/// Prints a warning line through the process-wide printer.
#[macro_export]
macro_rules! print_warning {
    ($tag:expr, $fmt:literal $($arg:tt)*) => {
        $crate::arsal_print!($crate::Level::Warning, $tag, $fmt $($arg)*)
    };
}

/// Prints a debug line through the process-wide printer.
///
/// Skipped entirely in release mode.
#[macro_export]
macro_rules! print_debug {
    ($tag:expr, $fmt:literal $($arg:tt)*) => {
        $crate::arsal_print!($crate::Level::Debug, $tag, $fmt $($arg)*)
    };
}

//! crates/print/src/record.rs
//! The ephemeral record built for one print call and its line rendering.

use std::fmt;

use crate::callsite::CallSite;
use crate::level::Level;
use crate::timestamp::Timestamp;

/// Reports whether a format string already ends with a newline.
///
/// The print macros evaluate this on the literal format string at compile
/// time and append a newline only when it returns `false`, so every line
/// ends with exactly one terminator that the facade added or the caller
/// wrote.
///
/// ```
/// use print::ends_with_newline;
///
/// assert!(ends_with_newline("ready\n"));
/// assert!(!ends_with_newline("ready"));
/// assert!(!ends_with_newline(""));
/// ```
#[must_use]
pub const fn ends_with_newline(format: &str) -> bool {
    let bytes = format.as_bytes();
    !bytes.is_empty() && bytes[bytes.len() - 1] == b'\n'
}

/// Everything known about a single print call.
///
/// A record borrows the caller's tag and formatting arguments and lives
/// only for the duration of the call that built it.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    tag: &'a str,
    timestamp: Timestamp,
    callsite: CallSite,
    message: fmt::Arguments<'a>,
    append_newline: bool,
}

impl<'a> Record<'a> {
    /// Assembles a record.
    #[must_use]
    pub const fn new(
        level: Level,
        tag: &'a str,
        timestamp: Timestamp,
        callsite: CallSite,
        message: fmt::Arguments<'a>,
        append_newline: bool,
    ) -> Self {
        Self {
            level,
            tag,
            timestamp,
            callsite,
            message,
            append_newline,
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the caller's tag.
    #[must_use]
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// Returns the time the record was captured.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the issuing call site.
    #[must_use]
    pub const fn callsite(&self) -> CallSite {
        self.callsite
    }

    /// Returns the caller's formatted message.
    #[must_use]
    pub const fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    /// Reports whether rendering appends a trailing newline.
    #[must_use]
    pub const fn append_newline(&self) -> bool {
        self.append_newline
    }

    /// Returns the `HH:MM:SS:mmm | function:line - ` prefix.
    #[must_use]
    pub const fn prefix(&self) -> Prefix {
        Prefix {
            timestamp: self.timestamp,
            callsite: self.callsite,
        }
    }

    /// Returns the complete line, prefix and message, newline-terminated.
    #[must_use]
    pub const fn line(&self) -> Line<'_, 'a> {
        Line { record: self }
    }
}

/// Display adapter for [`Record::prefix`].
#[derive(Clone, Copy, Debug)]
pub struct Prefix {
    timestamp: Timestamp,
    callsite: CallSite,
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} - ", self.timestamp, self.callsite)
    }
}

/// Display adapter for [`Record::line`].
#[derive(Clone, Copy, Debug)]
pub struct Line<'r, 'a> {
    record: &'r Record<'a>,
}

impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.record.prefix(), self.record.message)?;
        if self.record.append_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

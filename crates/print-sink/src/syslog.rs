// Syslog backend for printed lines.
//
// Uses libc `openlog`/`syslog`/`closelog` directly. Every message goes
// through a `"%s"` format so a `%` in a printed line is never interpreted.

use print::{Level, Sink};
use std::ffi::{CStr, CString};
use std::fmt;
use std::io;
use std::sync::OnceLock;

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// User-level messages (LOG_USER).
    #[default]
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a case-insensitive facility name.
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use print_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("kernel"), None);
    /// # }
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the lowercase facility name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default syslog ident.
pub const DEFAULT_SYSLOG_IDENT: &str = "arsal";

/// Facility and ident passed to `openlog(3)`.
///
/// Constructing a config does not open the connection; call
/// [`open`](SyslogConfig::open) or [`SyslogSink::open`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    ident: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and ident.
    pub fn new(facility: SyslogFacility, ident: impl Into<String>) -> Self {
        Self {
            facility,
            ident: ident.into(),
        }
    }

    /// Returns the facility.
    #[must_use]
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the ident.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Opens the syslog connection and returns a guard that closes it.
    ///
    /// syslog(3) keeps the ident pointer, so the first ident opened in the
    /// process is kept for the process lifetime and reused by later opens.
    /// An ident containing a NUL byte falls back to
    /// [`DEFAULT_SYSLOG_IDENT`].
    pub fn open(&self) -> SyslogGuard {
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(self.ident.as_str()).unwrap_or_else(|_| CString::from(c"arsal"))
        });

        // SAFETY: the ident pointer lives in a static for the rest of the
        // process, which is what openlog requires.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
        }

        SyslogGuard { _private: () }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_IDENT)
    }
}

/// Closes the syslog connection when dropped.
#[derive(Debug)]
pub struct SyslogGuard {
    _private: (),
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions.
        unsafe {
            libc::closelog();
        }
    }
}

/// Returns the syslog priority for a print level.
#[must_use]
pub const fn priority(level: Level) -> libc::c_int {
    match level {
        Level::Error => libc::LOG_ERR,
        Level::Warning => libc::LOG_WARNING,
        Level::Debug => libc::LOG_DEBUG,
    }
}

/// Sink sending each line to syslog(3) as `TAG | line`.
///
/// The trailing newline is dropped; syslog delimits entries itself.
///
/// ```no_run
/// # #[cfg(unix)]
/// # {
/// use print::{PrintConfig, install};
/// use print_sink::syslog::{SyslogConfig, SyslogFacility, SyslogSink};
///
/// let sink = SyslogSink::open(&SyslogConfig::new(SyslogFacility::Local0, "flightd"));
/// install(PrintConfig::from_env_or_default(), sink).ok();
/// # }
/// ```
#[derive(Debug)]
pub struct SyslogSink {
    _guard: SyslogGuard,
}

impl SyslogSink {
    /// Opens syslog with `config` and keeps it open while the sink lives.
    #[must_use]
    pub fn open(config: &SyslogConfig) -> Self {
        Self {
            _guard: config.open(),
        }
    }
}

impl Sink for SyslogSink {
    fn raw(&self, level: Level, tag: &str, line: fmt::Arguments<'_>) -> io::Result<usize> {
        let message = syslog_message(tag, line)?;
        send(priority(level), &message);
        Ok(message.as_bytes().len())
    }
}

/// Builds the `TAG | line` entry, without the trailing newline.
fn syslog_message(tag: &str, line: fmt::Arguments<'_>) -> io::Result<CString> {
    let rendered = line.to_string();
    let message = format!("{tag} | {}", rendered.trim_end_matches('\n'));
    CString::new(message).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

fn send(priority: libc::c_int, message: &CStr) {
    // SAFETY: syslog may be called from any thread. "%s" consumes exactly
    // one C string, and `message` outlives the call.
    unsafe {
        libc::syslog(priority, c"%s".as_ptr(), message.as_ptr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_facility_is_user() {
        assert_eq!(SyslogFacility::default(), SyslogFacility::User);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(SyslogFacility::from_name("Daemon"), Some(SyslogFacility::Daemon));
        assert_eq!(SyslogFacility::from_name("LOCAL7"), Some(SyslogFacility::Local7));
        assert_eq!(SyslogFacility::from_name("local8"), None);
        assert_eq!(SyslogFacility::from_name(""), None);
    }

    #[test]
    fn as_str_round_trips_with_from_name() {
        let facilities = [
            SyslogFacility::User,
            SyslogFacility::Daemon,
            SyslogFacility::Local0,
            SyslogFacility::Local1,
            SyslogFacility::Local2,
            SyslogFacility::Local3,
            SyslogFacility::Local4,
            SyslogFacility::Local5,
            SyslogFacility::Local6,
            SyslogFacility::Local7,
        ];
        for facility in facilities {
            assert_eq!(SyslogFacility::from_name(facility.as_str()), Some(facility));
            assert_eq!(facility.to_string(), facility.as_str());
        }
    }

    #[test]
    fn facility_values_match_libc_constants() {
        assert_eq!(SyslogFacility::User as i32, libc::LOG_USER);
        assert_eq!(SyslogFacility::Daemon as i32, libc::LOG_DAEMON);
        assert_eq!(SyslogFacility::Local7 as i32, libc::LOG_LOCAL7);
    }

    #[test]
    fn levels_map_to_syslog_priorities() {
        assert_eq!(priority(Level::Error), libc::LOG_ERR);
        assert_eq!(priority(Level::Warning), libc::LOG_WARNING);
        assert_eq!(priority(Level::Debug), libc::LOG_DEBUG);
    }

    #[test]
    fn config_defaults_to_user_and_arsal() {
        let config = SyslogConfig::default();
        assert_eq!(config.facility(), SyslogFacility::User);
        assert_eq!(config.ident(), DEFAULT_SYSLOG_IDENT);
    }

    #[test]
    fn message_drops_newline_and_keeps_percent() {
        let message = syslog_message("Test", format_args!("12:00:00:000 | t:1 - 50% done\n"))
            .expect("no nul");
        assert_eq!(message.to_str(), Ok("Test | 12:00:00:000 | t:1 - 50% done"));
    }

    #[test]
    fn message_rejects_interior_nul() {
        let err = syslog_message("T", format_args!("a\0b\n")).expect_err("nul byte");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

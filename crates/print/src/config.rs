//! crates/print/src/config.rs
//! Build-mode gate and the per-process print configuration.

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use time::UtcOffset;

use crate::level::{Level, Threshold};
use crate::timestamp::TimeZone;

/// Environment variable that overrides the build mode at process start.
pub const MODE_ENV_VAR: &str = "ARSAL_PRINT_MODE";

/// Output profile of the running build.
///
/// Debug builds print every level; release builds drop [`Level::Debug`]
/// before any formatting happens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BuildMode {
    /// Verbose output: all levels are printed.
    Debug,
    /// Release output: debug lines are skipped.
    Release,
}

impl BuildMode {
    /// Returns the mode matching how the crate was compiled.
    #[must_use]
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    /// Returns the level threshold enforced by this mode.
    #[must_use]
    pub const fn threshold(self) -> Threshold {
        match self {
            Self::Debug => Threshold::ALL,
            Self::Release => Threshold::RELEASE,
        }
    }

    /// Returns the lower-case mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "verbose" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }
}

/// Error raised while resolving the configuration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The mode name is neither `debug` nor `release`.
    #[error("unknown print mode '{0}' (expected 'debug' or 'release')")]
    UnknownMode(String),

    /// The override variable holds bytes that are not valid UTF-8.
    #[error("ARSAL_PRINT_MODE is not valid unicode")]
    NotUnicode,
}

/// Settings that decide whether and how a line is printed.
///
/// A configuration is resolved once when the process starts and is then
/// read on every call site; it is never mutated afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrintConfig {
    mode: BuildMode,
    zone: TimeZone,
}

impl PrintConfig {
    /// Build mode of the compiled crate with timestamps rendered in UTC.
    pub const DEFAULT: Self = Self::new(BuildMode::from_build(), TimeZone::UTC);

    /// Creates a configuration from explicit parts.
    #[must_use]
    pub const fn new(mode: BuildMode, zone: TimeZone) -> Self {
        Self { mode, zone }
    }

    /// Resolves the compiled build mode with timestamps in local time.
    ///
    /// The local offset is looked up for every line. When the platform
    /// cannot report it, the offset in effect at resolution is used.
    #[must_use]
    pub fn resolve() -> Self {
        Self::new(BuildMode::from_build(), TimeZone::local())
    }

    /// Like [`resolve`](Self::resolve), honouring [`MODE_ENV_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = match env::var(MODE_ENV_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode),
        };
        let mode = mode_override(value.as_deref())?;
        Ok(Self::new(mode, TimeZone::local()))
    }

    /// Like [`from_env`](Self::from_env), falling back to
    /// [`resolve`](Self::resolve) when the override is invalid.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|_| Self::resolve())
    }

    /// Returns a copy with a different build mode.
    #[must_use]
    pub const fn with_mode(self, mode: BuildMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy rendering timestamps in `zone`.
    #[must_use]
    pub const fn with_zone(self, zone: TimeZone) -> Self {
        Self { zone, ..self }
    }

    /// Returns a copy rendering timestamps at a fixed UTC offset.
    #[must_use]
    pub const fn with_utc_offset(self, offset: UtcOffset) -> Self {
        self.with_zone(TimeZone::Fixed(offset))
    }

    /// Returns the build mode.
    #[must_use]
    pub const fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Returns the zone used when rendering wall-clock time.
    #[must_use]
    pub const fn zone(&self) -> TimeZone {
        self.zone
    }

    /// Reports whether `level` is printed under this configuration.
    #[inline]
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        self.mode.threshold().allows(level)
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn mode_override(value: Option<&str>) -> Result<BuildMode, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(BuildMode::from_build()),
    }
}

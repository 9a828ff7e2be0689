//! crates/print/src/level.rs
//! Severity levels and the exclusive thresholds built from them.

use std::fmt;
use std::str::FromStr;

/// Severity of a printed line.
///
/// Declaration order is significant: a lower ordinal is more severe, so
/// `Level::Error < Level::Warning < Level::Debug`. Errors and warnings are
/// printed in every build; debug lines only when the active
/// [`BuildMode`](crate::BuildMode) allows them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Printed in release and debug builds.
    Error = 0,
    /// Printed in release and debug builds.
    Warning = 1,
    /// Printed in debug builds only.
    Debug = 2,
}

impl Level {
    /// Upper bound of the level ordinals.
    ///
    /// This is not a level itself; it only serves as the exclusive bound
    /// of [`Threshold::ALL`].
    pub const COUNT: u8 = 3;

    /// Every level, most severe first.
    pub const ALL: [Self; Self::COUNT as usize] = [Self::Error, Self::Warning, Self::Debug];

    /// Returns the ordinal of the level.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the three-letter marker used by console decorations.
    ///
    /// ```
    /// use print::Level;
    ///
    /// assert_eq!(Level::Error.short_name(), "ERR");
    /// assert_eq!(Level::Warning.short_name(), "WNG");
    /// assert_eq!(Level::Debug.short_name(), "DBG");
    /// ```
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Error => "ERR",
            Self::Warning => "WNG",
            Self::Debug => "DBG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown print level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| {
                name.eq_ignore_ascii_case(level.as_str())
                    || name.eq_ignore_ascii_case(level.short_name())
            })
            .ok_or_else(|| ParseLevelError(name.to_owned()))
    }
}

/// Exclusive upper bound on the level ordinals that may be printed.
///
/// A level passes when its ordinal is strictly below the bound. Checking a
/// threshold is a single integer comparison so it can sit in front of every
/// call site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Threshold(u8);

impl Threshold {
    /// Every level passes.
    pub const ALL: Self = Self(Level::COUNT);

    /// Only levels strictly more severe than [`Level::Debug`] pass.
    pub const RELEASE: Self = Self(Level::Debug.ordinal());

    /// Reports whether `level` passes the threshold.
    #[inline]
    #[must_use]
    pub const fn allows(self, level: Level) -> bool {
        level.ordinal() < self.0
    }
}

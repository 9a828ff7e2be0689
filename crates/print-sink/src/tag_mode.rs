//! crates/print-sink/src/tag_mode.rs
//! Decoration applied by writer-backed sinks in front of each line.

use print::Level;
use std::io::{self, Write};

/// Controls whether a [`WriterSink`](crate::WriterSink) prefixes each line
/// with its level and tag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TagMode {
    /// Prefix lines with `[ERR] TAG | `.
    #[default]
    Bracketed,
    /// Write the rendered line unchanged.
    Bare,
}

impl TagMode {
    /// Reports whether the mode writes a level and tag prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use print_sink::TagMode;
    ///
    /// assert!(TagMode::Bracketed.shows_tag());
    /// assert!(!TagMode::Bare.shows_tag());
    /// ```
    #[must_use]
    pub const fn shows_tag(self) -> bool {
        matches!(self, Self::Bracketed)
    }

    /// Writes the decoration for `level` and `tag` and returns its length.
    pub(crate) fn write_prefix<W: Write + ?Sized>(
        self,
        writer: &mut W,
        level: Level,
        tag: &str,
    ) -> io::Result<usize> {
        if !self.shows_tag() {
            return Ok(0);
        }
        let short = level.short_name();
        write!(writer, "[{short}] {tag} | ")?;
        Ok(short.len() + tag.len() + 6)
    }
}

impl From<bool> for TagMode {
    /// `true` selects [`TagMode::Bracketed`] and `false` selects
    /// [`TagMode::Bare`].
    fn from(show_tag: bool) -> Self {
        if show_tag { Self::Bracketed } else { Self::Bare }
    }
}

impl From<TagMode> for bool {
    fn from(mode: TagMode) -> Self {
        mode.shows_tag()
    }
}

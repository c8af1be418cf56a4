//! `Text` — an immutable string with a line-oriented view.
//!
//! A `Text` stores exactly one thing: its string value. Lines, sizes and
//! positions are derived from it on demand.
//!
//! # Construction
//!
//! - [`Text::new`] (and `From<&str>`, `From<String>`, `FromStr`) wraps any
//!   string as is. Separators inside it are what make it multi-line.
//! - [`Text::from_lines`] takes discrete lines, rejects any line that
//!   contains a separator, and joins the rest with the canonical `\n`.
//!
//! # Reading
//!
//! [`Text::lines`] splits on every recognized separator, not just `\n`, so a
//! `Text` wrapping a CRLF file still reports the right lines.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidArgument, Result};
use crate::escape::escape_separators;
use crate::position::Position;
use crate::separator;

/// An immutable text value.
///
/// Equality and hashing compare the raw value, so `"a\r\nb"` and `"a\nb"`
/// are different texts even though their lines are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text {
    value: String,
}

impl Text {
    // -- Construction -------------------------------------------------------

    /// Wrap `value` as a text. Never fails and never rewrites separators.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Build a text from discrete lines joined by the canonical separator.
    ///
    /// Every line is checked before anything is joined. Zero lines give an
    /// empty text.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidLine`](crate::TextError::InvalidLine) for
    /// the first line that contains a separator.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        separator::check_no_separators(&lines)?;
        Ok(Self::new(separator::join(&lines)))
    }

    // -- Value access -------------------------------------------------------

    /// The raw value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the text, returning its value.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    // -- Lines --------------------------------------------------------------

    /// The lines of this text, split on any recognized separator.
    ///
    /// An empty text has one empty line. A trailing separator gives a
    /// trailing empty line: `"a\n"` has lines `["a", ""]`.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        separator::split(&self.value)
    }

    /// Number of lines. Never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        separator::separators(&self.value).count() + 1
    }

    /// The line at 0-indexed `idx`, without its separator.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<&str> {
        separator::split(&self.value).get(idx).copied()
    }

    // -- Size ---------------------------------------------------------------

    /// True when the value has no characters at all.
    ///
    /// This is about characters, not lines: `""` is empty, `"\n"` is not.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Character count (Unicode scalar values), separators included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte count of the UTF-8 value.
    #[inline]
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.value.len()
    }

    // -- Queries ------------------------------------------------------------

    /// True when `sequence` occurs in the value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::SeparatorInSequence`] if `sequence`
    /// contains a separator. Matching across lines is not supported.
    pub fn contains(&self, sequence: &str) -> Result<bool> {
        check_sequence(sequence)?;
        Ok(self.value.contains(sequence))
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert an absolute char offset to a position.
    ///
    /// An offset that falls on a separator maps to the end of its line. The
    /// offset equal to [`size`](Self::size) is the end of the last line. Any
    /// larger offset is beyond the text and gives [`Position::NOT_FOUND`].
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let extents = self.line_extents();
        for (line, &(start, len)) in extents.iter().enumerate() {
            match extents.get(line + 1) {
                Some(&(next, _)) if offset < next => {
                    return Position::new(line, (offset - start).min(len));
                }
                None if offset <= start + len => {
                    return Position::new(line, offset - start);
                }
                _ => {}
            }
        }
        Position::NOT_FOUND
    }

    /// Convert a position to an absolute char offset.
    ///
    /// Returns `None` for the sentinel, a line past the end, or a column past
    /// the end of the line's content. A column equal to the content length is
    /// valid: it is the position just after the last character.
    #[must_use]
    pub fn offset_of(&self, position: Position) -> Option<usize> {
        let loc = position.location()?;
        let &(start, len) = self.line_extents().get(loc.line)?;
        (loc.column <= len).then_some(start + loc.column)
    }

    /// For each line: the char offset of its first character and its length
    /// in chars, separator excluded.
    fn line_extents(&self) -> Vec<(usize, usize)> {
        let mut extents = Vec::new();
        let mut start_char = 0;
        let mut start_byte = 0;
        for (range, sep) in separator::separators(&self.value) {
            let len = self.value[start_byte..range.start].chars().count();
            extents.push((start_char, len));
            start_char += len + sep.len();
            start_byte = range.end;
        }
        extents.push((start_char, self.value[start_byte..].chars().count()));
        extents
    }
}

/// Reject search sequences that contain a separator.
pub(crate) fn check_sequence(sequence: &str) -> Result<()> {
    if separator::contains_separator(sequence) {
        return Err(InvalidArgument::SeparatorInSequence {
            escaped: escape_separators(sequence),
        }
        .into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.value
    }
}

impl FromStr for Text {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

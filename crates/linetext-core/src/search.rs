//! Search — literal matching over a [`Text`], reported as positions.
//!
//! Matches never span lines: a needle containing a separator is rejected up
//! front, the same way [`Text::contains`] rejects it. Each line is then
//! searched on its own, which gives the same matches as a flat search but
//! hands back (line, column) directly.
//!
//! A failed search yields [`Position::NOT_FOUND`], never a magic coordinate.

use crate::error::Result;
use crate::position::{Location, Position};
use crate::text::{check_sequence, Text};

impl Text {
    /// Position of the first occurrence of `needle`.
    ///
    /// An empty needle matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::SeparatorInSequence`](crate::InvalidArgument::SeparatorInSequence)
    /// if `needle` contains a separator.
    pub fn find(&self, needle: &str) -> Result<Position> {
        self.find_from(needle, Location::ZERO)
    }

    /// Position of the first occurrence of `needle` starting at or after
    /// `from`. The character at `from` itself is included. Does not wrap.
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    pub fn find_from(&self, needle: &str, from: Location) -> Result<Position> {
        check_sequence(needle)?;
        if needle.is_empty() {
            return Ok(Position::NOT_FOUND);
        }

        let found = self
            .lines()
            .into_iter()
            .enumerate()
            .skip(from.line)
            .find_map(|(line_idx, line)| {
                let from_col = if line_idx == from.line { from.column } else { 0 };
                search_line(line, needle, from_col).map(|col| Location::new(line_idx, col))
            });
        Ok(found.into())
    }

    /// Every non-overlapping occurrence of `needle`, in document order.
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    pub fn find_all(&self, needle: &str) -> Result<Vec<Location>> {
        check_sequence(needle)?;
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for (line_idx, line) in self.lines().into_iter().enumerate() {
            let mut start_byte = 0;
            while let Some(byte_idx) = line[start_byte..].find(needle) {
                let abs_byte = start_byte + byte_idx;
                matches.push(Location::new(line_idx, byte_to_char(line, abs_byte)));
                // Advance past this match (non-overlapping).
                start_byte = abs_byte + needle.len();
            }
        }
        Ok(matches)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Search forward within a single line starting at char column `from_col`.
/// Returns the char column of the match.
fn search_line(line: &str, needle: &str, from_col: usize) -> Option<usize> {
    let start_byte = char_to_byte(line, from_col);
    if start_byte >= line.len() {
        return None;
    }
    let byte_idx = line[start_byte..].find(needle)?;
    Some(byte_to_char(line, start_byte + byte_idx))
}

/// Convert a char offset to a byte offset in a string.
fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map_or(s.len(), |(b, _)| b)
}

/// Convert a byte offset to a char offset in a string.
fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Text position types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! grapheme clusters.
//!
//! A [`Position`] is either a real [`Location`] or the "not in text" sentinel.
//! The sentinel is its own variant rather than a `line == -1` convention, so
//! there are no coordinates on it to do arithmetic with by accident.
//!
//! Display is 1-indexed for humans; everything else stays 0-indexed.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{InvalidArgument, Result};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A location in a text: (line, column), both 0-indexed.
///
/// `column` is the char offset from the start of the line, **not** a byte
/// offset. For the line `"café"`, column 3 is `'é'` and column 4 is just past
/// the last character.
///
/// # Ordering
///
/// Locations are ordered lexicographically: line first, then column. This
/// means `Location { line: 0, column: 5 }` < `Location { line: 1, column: 0 }`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, column: 0 };

    /// Create a new location.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Location {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Location {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Why a [`Position`] does not point into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BeyondText {
    /// No such position exists, e.g. a search found nothing.
    NotInText,
}

/// A location in a text, or the sentinel saying there is none.
///
/// Equality and hashing are structural: every `Sentinel { NotInText }` is
/// equal to [`Position::NOT_FOUND`] no matter how it was built.
///
/// # Ordering
///
/// Only partial. Two located positions compare by [`Location`]; two equal
/// sentinels compare `Equal`; a located position and a sentinel are
/// unordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "variant", rename_all = "snake_case"))]
pub enum Position {
    /// An actual location in the text.
    Located(Location),
    /// No location. Has no line or column.
    Sentinel { reason: BeyondText },
}

impl Position {
    /// The shared "not found" position.
    pub const NOT_FOUND: Self = Self::Sentinel {
        reason: BeyondText::NotInText,
    };

    /// Create a located position from unsigned coordinates.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self::Located(Location::new(line, column))
    }

    /// Create a located position from signed coordinates, as they arrive
    /// from callers that do their own arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeCoordinate`] if `line` or
    /// `column` is negative.
    pub fn at(line: i64, column: i64) -> Result<Self> {
        match (usize::try_from(line), usize::try_from(column)) {
            (Ok(l), Ok(c)) => Ok(Self::new(l, c)),
            _ => Err(InvalidArgument::NegativeCoordinate { line, column }.into()),
        }
    }

    /// The shared "not found" position.
    #[inline]
    #[must_use]
    pub const fn not_found() -> Self {
        Self::NOT_FOUND
    }

    /// True when this position points into the text.
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Located(_))
    }

    /// The location, or `None` for the sentinel.
    #[inline]
    #[must_use]
    pub const fn location(self) -> Option<Location> {
        match self {
            Self::Located(loc) => Some(loc),
            Self::Sentinel { .. } => None,
        }
    }

    /// The 0-indexed line, or `None` for the sentinel.
    #[inline]
    #[must_use]
    pub const fn line(self) -> Option<usize> {
        match self {
            Self::Located(loc) => Some(loc.line),
            Self::Sentinel { .. } => None,
        }
    }

    /// The 0-indexed column, or `None` for the sentinel.
    #[inline]
    #[must_use]
    pub const fn column(self) -> Option<usize> {
        match self {
            Self::Located(loc) => Some(loc.column),
            Self::Sentinel { .. } => None,
        }
    }
}

impl From<Location> for Position {
    #[inline]
    fn from(loc: Location) -> Self {
        Self::Located(loc)
    }
}

impl From<Option<Location>> for Position {
    #[inline]
    fn from(loc: Option<Location>) -> Self {
        loc.map_or(Self::NOT_FOUND, Self::Located)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Located(a), Self::Located(b)) => Some(a.cmp(b)),
            (Self::Sentinel { reason: a }, Self::Sentinel { reason: b }) if a == b => {
                Some(Ordering::Equal)
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Located(loc) => write!(f, "Pos({loc:?})"),
            Self::Sentinel { reason } => write!(f, "Pos({reason})"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Located(loc) => fmt::Display::fmt(loc, f),
            Self::Sentinel { reason } => fmt::Display::fmt(reason, f),
        }
    }
}

impl fmt::Display for BeyondText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInText => f.write_str("not in text"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

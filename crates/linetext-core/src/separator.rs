//! Line separator policy.
//!
//! Three separators are *recognized* when reading text: `\n`, `\r\n` and
//! `\r`. Only one is ever *written*: [`CANONICAL`], which is `\n` on every
//! platform. A `Text` joined on Windows and one joined on Linux are
//! byte-for-byte identical.
//!
//! `\r\n` is always treated as a single separator. Splitting `"a\r\nb"`
//! gives two lines, never an empty line between the `\r` and the `\n`.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TextError};
use crate::escape::escape_separators;

/// The separator emitted when lines are joined.
pub const CANONICAL: &str = "\n";

/// Matches any recognized separator. `\r\n` comes first so the alternation
/// consumes it as one unit.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("separator pattern is valid"));

// ---------------------------------------------------------------------------
// LineSeparator
// ---------------------------------------------------------------------------

/// A recognized line separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSeparator {
    /// `\n` — Unix, macOS, Linux. The canonical separator.
    Lf,
    /// `\r\n` — Windows, DOS.
    CrLf,
    /// `\r` — Classic Mac (pre-OS X).
    Cr,
}

impl LineSeparator {
    /// All recognized separators.
    pub const RECOGNIZED: [Self; 3] = [Self::Lf, Self::CrLf, Self::Cr];

    /// The separator used for output.
    pub const CANONICAL: Self = Self::Lf;

    /// The string representation of this separator.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Byte length of this separator (equal to its char length).
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        match self {
            Self::Lf | Self::Cr => 1,
            Self::CrLf => 2,
        }
    }

    /// The separator spelled exactly as `s`, if any.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "\n" => Some(Self::Lf),
            "\r\n" => Some(Self::CrLf),
            "\r" => Some(Self::Cr),
            _ => None,
        }
    }

    /// True for the canonical separator.
    #[inline]
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        matches!(self, Self::Lf)
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::CrLf => f.write_str("CRLF"),
            Self::Cr => f.write_str("CR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy functions
// ---------------------------------------------------------------------------

/// The separator emitted when lines are joined.
#[inline]
#[must_use]
pub const fn canonical() -> &'static str {
    CANONICAL
}

/// True when `s` is exactly one recognized separator.
#[must_use]
pub fn is_separator(s: &str) -> bool {
    LineSeparator::parse(s).is_some()
}

/// True when `s` contains a recognized separator anywhere.
///
/// Every recognized separator contains `\n` or `\r`, so a byte scan is
/// enough.
#[must_use]
pub fn contains_separator(s: &str) -> bool {
    s.bytes().any(|b| b == b'\n' || b == b'\r')
}

/// True when `s` contains a separator other than [`CANONICAL`].
#[must_use]
pub fn has_foreign_separators(s: &str) -> bool {
    separators(s).any(|(_, sep)| !sep.is_canonical())
}

/// Split `s` into lines on any recognized separator.
///
/// Follows plain split semantics: `""` gives `[""]`, and a trailing
/// separator gives a trailing empty line.
#[must_use]
pub fn split(s: &str) -> Vec<&str> {
    SEPARATOR.split(s).collect()
}

/// Join `lines` with the canonical separator.
///
/// Does not validate: use [`check_no_separators`] first, or build a `Text`
/// through `Text::from_lines`.
pub fn join<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push_str(CANONICAL);
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Ensure that `line` contains no recognized separator.
///
/// # Errors
///
/// Returns [`TextError::InvalidLine`] with the separators in `line`
/// rendered visibly.
pub fn check_no_separator(line: &str) -> Result<()> {
    if contains_separator(line) {
        return Err(TextError::InvalidLine {
            escaped: escape_separators(line),
        });
    }
    Ok(())
}

/// Ensure that none of `lines` contains a recognized separator.
///
/// # Errors
///
/// Returns [`TextError::InvalidLine`] for the first offending line.
pub fn check_no_separators<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .try_for_each(|line| check_no_separator(line.as_ref()))
}

/// Every separator in `s` with its byte range, in order.
pub(crate) fn separators(s: &str) -> impl Iterator<Item = (Range<usize>, LineSeparator)> + '_ {
    SEPARATOR
        .find_iter(s)
        .filter_map(|m| LineSeparator::parse(m.as_str()).map(|sep| (m.range(), sep)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

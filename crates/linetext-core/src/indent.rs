//! Indentation transforms and separator canonicalization.
//!
//! Each transform reads lines with any recognized separator and writes them
//! back joined by the canonical one, so the result never carries `\r\n` or
//! `\r` even when the input did.

use std::borrow::Cow;

use crate::separator;
use crate::text::Text;

/// Indentation used by [`Text::indent`]: four spaces.
pub const DEFAULT_INDENT: &str = "    ";

impl Text {
    /// Remove the common leading whitespace of all non-blank lines.
    ///
    /// A blank first or last line is dropped entirely. Blank lines do not
    /// take part in finding the common indentation.
    #[must_use]
    pub fn trim_indent(&self) -> Self {
        let lines = self.lines();
        let min_indent = lines
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| indent_width(line))
            .min()
            .unwrap_or(0);

        let last = lines.len() - 1;
        let trimmed = lines.iter().enumerate().filter_map(|(i, line)| {
            if (i == 0 || i == last) && is_blank(line) {
                None
            } else {
                Some(drop_chars(line, min_indent))
            }
        });
        Self::new(separator::join(trimmed))
    }

    /// Prepend `indent` to every non-blank line.
    ///
    /// A blank line shorter than `indent` is replaced by `indent`; a longer
    /// one is left as is.
    #[must_use]
    pub fn prepend_indent(&self, indent: &str) -> Self {
        let indent_len = indent.chars().count();
        let indented = self.lines().into_iter().map(|line| {
            if !is_blank(line) {
                Cow::Owned(format!("{indent}{line}"))
            } else if line.chars().count() < indent_len {
                Cow::Borrowed(indent)
            } else {
                Cow::Borrowed(line)
            }
        });
        Self::new(separator::join(indented))
    }

    /// [`prepend_indent`](Self::prepend_indent) with [`DEFAULT_INDENT`].
    #[must_use]
    pub fn indent(&self) -> Self {
        self.prepend_indent(DEFAULT_INDENT)
    }

    /// This text with every separator replaced by the canonical one.
    ///
    /// Borrows `self` when there is nothing to replace.
    #[must_use]
    pub fn ensure_canonical_separators(&self) -> Cow<'_, Self> {
        if separator::has_foreign_separators(self.as_str()) {
            Cow::Owned(Self::new(separator::join(self.lines())))
        } else {
            Cow::Borrowed(self)
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Number of leading whitespace chars.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// `line` without its first `n` chars.
fn drop_chars(line: &str, n: usize) -> &str {
    line.char_indices().nth(n).map_or("", |(b, _)| &line[b..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_crlf(s: &str) -> Text {
        Text::new(s.replace('\n', "\r\n"))
    }

    // -- trim_indent --------------------------------------------------------

    #[test]
    fn trim_indent_removes_common_indent() {
        let text = Text::new("\n    1\n      2\n    3\n");
        assert_eq!(text.trim_indent().as_str(), "1\n  2\n3");
    }

    #[test]
    fn trim_indent_ignores_blank_lines_for_width() {
        let text = Text::new("    a\n\n    b");
        assert_eq!(text.trim_indent().as_str(), "a\n\nb");
    }

    #[test]
    fn trim_indent_writes_canonical_separators() {
        let trimmed = with_crlf("\n    1\n    2\n").trim_indent();
        assert_eq!(trimmed.as_str(), "1\n2");
        assert!(!separator::has_foreign_separators(trimmed.as_str()));
    }

    #[test]
    fn trim_indent_of_blank_text() {
        assert_eq!(Text::new("   ").trim_indent().as_str(), "");
        assert_eq!(Text::new("").trim_indent().as_str(), "");
    }

    // -- prepend_indent -----------------------------------------------------

    #[test]
    fn prepend_indent_non_blank_lines() {
        let text = Text::new("a\n  b");
        assert_eq!(text.prepend_indent("> ").as_str(), "> a\n>   b");
    }

    #[test]
    fn prepend_indent_blank_lines() {
        let text = Text::new("a\n\n      \nb");
        assert_eq!(
            text.indent().as_str(),
            "    a\n    \n      \n    b"
        );
    }

    #[test]
    fn prepend_indent_writes_canonical_separators() {
        let indented = with_crlf("1\n2").indent();
        assert_eq!(indented.as_str(), "    1\n    2");
    }

    // -- ensure_canonical_separators ----------------------------------------

    #[test]
    fn ensure_canonical_rewrites_foreign() {
        let text = Text::new("1\r\n2\r3\n");
        let fixed = text.ensure_canonical_separators();
        assert!(matches!(fixed, Cow::Owned(_)));
        assert_eq!(fixed.as_str(), "1\n2\n3\n");
    }

    #[test]
    fn ensure_canonical_borrows_when_clean() {
        let text = Text::new("1\n2\n");
        let same = text.ensure_canonical_separators();
        assert!(matches!(same, Cow::Borrowed(t) if std::ptr::eq(t, &text)));
    }

    #[test]
    fn ensure_canonical_keeps_lines() {
        let text = Text::new("a\r\n\r\nb");
        assert_eq!(text.ensure_canonical_separators().lines(), text.lines());
    }

    // -- helpers ------------------------------------------------------------

    #[test]
    fn helpers() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank(" x "));
        assert_eq!(indent_width("\t  x"), 3);
        assert_eq!(drop_chars("  üx", 2), "üx");
        assert_eq!(drop_chars("ab", 5), "");
    }
}

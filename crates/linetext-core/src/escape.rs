//! Visible rendering of separator characters for diagnostics.

/// Replace `\r` and `\n` in `s` with the two-character escapes `\r` and
/// `\n`, so error messages never carry raw control characters.
///
/// Only separator characters are touched; everything else is copied as is.
#[must_use]
pub fn escape_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

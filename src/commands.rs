//! Subcommand execution.
//!
//! Commands read from the given reader (stdin in production) and write to
//! the given writer, so tests can drive them with in-memory buffers.

use std::fs;
use std::io::{Read, Write};

use anyhow::{Context, Result};
use linetext_core::{separator, Position, Text};
use tracing::debug;

use crate::cli::{Command, Input};

/// How a command finished, beyond success or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// A search ran and matched nothing.
    NotFound,
}

/// Run `command`, reading stdin from `stdin` and writing to `out`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, output cannot be written,
/// or the core rejects an argument.
pub fn run<R: Read, W: Write>(command: &Command, stdin: R, out: &mut W) -> Result<Outcome> {
    match command {
        Command::Lines { input, numbered } => {
            let text = read_input(input, stdin)?;
            for (i, line) in text.lines().into_iter().enumerate() {
                if *numbered {
                    writeln!(out, "{:>4} {line}", i + 1)?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Command::Stats { input } => {
            let text = read_input(input, stdin)?;
            writeln!(out, "chars: {}", text.size())?;
            writeln!(out, "bytes: {}", text.len_bytes())?;
            writeln!(out, "lines: {}", text.line_count())?;
            writeln!(out, "empty: {}", text.is_empty())?;
            writeln!(
                out,
                "foreign separators: {}",
                separator::has_foreign_separators(text.as_str())
            )?;
        }
        Command::Normalize { input } => {
            let text = read_input(input, stdin)?;
            write!(out, "{}", text.ensure_canonical_separators())?;
        }
        Command::Find { needle, input, all } => {
            let text = read_input(input, stdin)?;
            if *all {
                let matches = text.find_all(needle)?;
                debug!(count = matches.len(), "find --all");
                if matches.is_empty() {
                    writeln!(out, "{}", Position::NOT_FOUND)?;
                    return Ok(Outcome::NotFound);
                }
                for loc in matches {
                    writeln!(out, "{loc}")?;
                }
            } else {
                let pos = text.find(needle)?;
                debug!(?pos, "find");
                writeln!(out, "{pos}")?;
                if !pos.is_found() {
                    return Ok(Outcome::NotFound);
                }
            }
        }
        Command::Join { lines } => {
            let text = Text::from_lines(lines)?;
            writeln!(out, "{text}")?;
        }
        Command::TrimIndent { input } => {
            let text = read_input(input, stdin)?;
            writeln!(out, "{}", text.trim_indent())?;
        }
        Command::Indent { input, indent } => {
            let text = read_input(input, stdin)?;
            writeln!(out, "{}", text.prepend_indent(indent))?;
        }
    }
    Ok(Outcome::Done)
}

/// Read the whole input as a `Text`, from its file or from `stdin`.
fn read_input<R: Read>(input: &Input, mut stdin: R) -> Result<Text> {
    let value = if let Some(path) = input.path() {
        debug!(path = %path.display(), "reading file");
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        debug!("reading stdin");
        let mut value = String::new();
        stdin
            .read_to_string(&mut value)
            .context("failed to read stdin")?;
        value
    };
    let text = Text::new(value);
    debug!(chars = text.size(), lines = text.line_count(), "input loaded");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::cli::Cli;

    /// Run a command line against `stdin`, returning the outcome and stdout.
    fn exec(args: &[&str], stdin: &str) -> (Outcome, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let outcome = run(&cli.command, stdin.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn exec_err(args: &[&str], stdin: &str) -> anyhow::Error {
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli.command, stdin.as_bytes(), &mut Vec::new()).unwrap_err()
    }

    #[test]
    fn lines_splits_any_separator() {
        let (outcome, out) = exec(&["linetext", "lines"], "a\r\nb\rc");
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn lines_numbered() {
        let (_, out) = exec(&["linetext", "lines", "-n"], "uno\ndos");
        assert_eq!(out, "   1 uno\n   2 dos\n");
    }

    #[test]
    fn stats_reports_counts() {
        let (_, out) = exec(&["linetext", "stats"], "ab\r\ncd");
        assert_eq!(
            out,
            "chars: 6\nbytes: 6\nlines: 2\nempty: false\nforeign separators: true\n"
        );
    }

    #[test]
    fn normalize_rewrites_separators() {
        let (_, out) = exec(&["linetext", "normalize"], "1\r\n2\r3\n");
        assert_eq!(out, "1\n2\n3\n");
    }

    #[test]
    fn find_first() {
        let (outcome, out) = exec(&["linetext", "find", "wor"], "hello\nworld");
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "2:1\n");
    }

    #[test]
    fn find_missing() {
        let (outcome, out) = exec(&["linetext", "find", "zzz"], "hello world");
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(out, "not in text\n");
    }

    #[test]
    fn find_all() {
        let (outcome, out) = exec(&["linetext", "find", "--all", "ab"], "ab ab\nxab");
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "1:1\n1:4\n2:2\n");
    }

    #[test]
    fn find_all_missing() {
        let (outcome, _) = exec(&["linetext", "find", "-a", "q"], "ab");
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn find_rejects_separator_needle() {
        let err = exec_err(&["linetext", "find", "o\nw"], "hello world");
        assert!(err.to_string().contains("o\\nw"), "{err}");
    }

    #[test]
    fn join_lines() {
        let (_, out) = exec(&["linetext", "join", "x", "y"], "");
        assert_eq!(out, "x\ny\n");
    }

    #[test]
    fn join_rejects_separator() {
        let err = exec_err(&["linetext", "join", "ok", "a\r\nb"], "");
        assert_eq!(
            err.to_string(),
            "the line contains a line separator: `a\\r\\nb`"
        );
    }

    #[test]
    fn trim_indent_and_indent() {
        let (_, out) = exec(&["linetext", "trim-indent"], "\r\n    a\r\n      b\r\n");
        assert_eq!(out, "a\n  b\n");
        let (_, out) = exec(&["linetext", "indent", "--with", "> "], "a\n\nb");
        assert_eq!(out, "> a\n> \n> b\n");
    }

    #[test]
    fn missing_file_has_context() {
        let err = exec_err(&["linetext", "stats", "/definitely/not/here.txt"], "");
        assert!(err.to_string().starts_with("failed to read /definitely/not/here.txt"));
    }
}

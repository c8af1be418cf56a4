//! Command-line interface definition.
//!
//! Every subcommand that reads text takes an optional `FILE`; without one
//! (or with `-`) it reads stdin.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use linetext_core::indent::DEFAULT_INDENT;

/// Inspect and rewrite text line by line, always writing `\n` separators.
#[derive(Debug, Parser)]
#[command(name = "linetext", version, about)]
pub struct Cli {
    /// Log at debug level unless LINETEXT_LOG or RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the lines of the input.
    Lines {
        #[command(flatten)]
        input: Input,
        /// Prefix each line with its 1-indexed number.
        #[arg(short, long)]
        numbered: bool,
    },
    /// Print character, byte and line counts.
    Stats {
        #[command(flatten)]
        input: Input,
    },
    /// Rewrite every line separator as `\n`.
    Normalize {
        #[command(flatten)]
        input: Input,
    },
    /// Print the 1-indexed `line:col` of a literal match.
    ///
    /// Exits with status 1 when there is no match.
    Find {
        /// Text to look for. Must not contain a line separator.
        needle: String,
        #[command(flatten)]
        input: Input,
        /// Print every match instead of the first.
        #[arg(short, long)]
        all: bool,
    },
    /// Join the given lines with `\n`. Fails if a line contains a separator.
    Join {
        lines: Vec<String>,
    },
    /// Remove the common indentation of the input.
    TrimIndent {
        #[command(flatten)]
        input: Input,
    },
    /// Indent every non-blank line of the input.
    Indent {
        #[command(flatten)]
        input: Input,
        /// Indentation to prepend.
        #[arg(long = "with", env = "LINETEXT_INDENT", default_value = DEFAULT_INDENT)]
        indent: String,
    },
}

/// Where to read text from.
#[derive(Debug, Clone, Default, Args)]
pub struct Input {
    /// Input file. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl Input {
    /// The file to read, or `None` for stdin.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn lines_defaults_to_stdin() {
        let Command::Lines { input, numbered } = parse(&["linetext", "lines"]) else {
            panic!("expected lines");
        };
        assert_eq!(input.path(), None);
        assert!(!numbered);
    }

    #[test]
    fn dash_means_stdin() {
        let Command::Stats { input } = parse(&["linetext", "stats", "-"]) else {
            panic!("expected stats");
        };
        assert_eq!(input.path(), None);
    }

    #[test]
    fn find_takes_needle_then_file() {
        let Command::Find { needle, input, all } =
            parse(&["linetext", "find", "wor", "notes.txt", "--all"])
        else {
            panic!("expected find");
        };
        assert_eq!(needle, "wor");
        assert_eq!(input.path(), Some(Path::new("notes.txt")));
        assert!(all);
    }

    #[test]
    fn join_collects_lines() {
        let Command::Join { lines } = parse(&["linetext", "join", "a", "b", "c"]) else {
            panic!("expected join");
        };
        assert_eq!(lines, ["a", "b", "c"]);
    }

    #[test]
    fn indent_with_override() {
        let Command::Indent { indent, .. } = parse(&["linetext", "indent", "--with", "> "]) else {
            panic!("expected indent");
        };
        assert_eq!(indent, "> ");
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["linetext", "normalize", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["linetext"]).is_err());
    }
}

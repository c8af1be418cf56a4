// SPDX-License-Identifier: MIT
//
// linetext — line-addressable text from the command line.
//
// This is the binary that wires the CLI to linetext-core:
//
//   args  → clap parser → Command
//   input → FILE or stdin → Text (separators kept as read)
//   Text  → lines / stats / find / indent ... → stdout (always `\n`)
//
// Exit status: 0 on success, 1 when `find` matches nothing, 2 on error.

mod cli;
mod commands;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::Outcome;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match commands::run(&cli.command, stdin, &mut stdout) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(1),
        Err(e) => {
            eprintln!("linetext: {e:#}");
            ExitCode::from(2)
        }
    }
}

//! The `check-ron` command: bracket and quote balance check.
#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use crate::cli::CheckRonOpts;
use crate::ron_check::check_ron_syntax;

/// Run the `check-ron` command.
///
/// Both verdicts go to stdout; the exit code carries the result for
/// scripted callers. An unreadable file counts as not valid.
#[must_use]
pub fn run(opts: &CheckRonOpts) -> ExitCode {
    if check_ron_syntax(&opts.path) {
        println!("File {} is valid RON (basic check)", opts.path.display());
        ExitCode::SUCCESS
    } else {
        println!("File {} is NOT valid RON (basic check)", opts.path.display());
        ExitCode::FAILURE
    }
}

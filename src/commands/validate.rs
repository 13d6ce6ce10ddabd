//! The `validate` command: strict schema validation of a config file.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use crate::cli::ValidateOpts;
use crate::config::validate::validate_config;
use crate::logging::Logger;

/// Run the `validate` command.
///
/// Success prints a confirmation to stdout (suppressed by `--quiet`) and
/// exits zero. Failure prints every violation to stderr, one indented
/// line each, and exits non-zero. Unlike the query commands there is no
/// legacy path fallback; the named file is the one validated.
#[must_use]
pub fn run(opts: &ValidateOpts, log: &Logger) -> ExitCode {
    let (is_valid, errors) = validate_config(&opts.config);
    if is_valid {
        if !opts.quiet {
            println!("✓ Configuration is valid: {}", opts.config.display());
        }
        return ExitCode::SUCCESS;
    }

    log.debug(&format!("{} validation error(s)", errors.len()));
    eprintln!("✗ Configuration errors in {}:", opts.config.display());
    for error in &errors {
        eprintln!("  {error}");
    }
    ExitCode::FAILURE
}

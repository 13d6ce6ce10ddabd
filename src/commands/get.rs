//! The `get` command: print one config value addressed by dotted path.
#![allow(clippy::print_stdout)]

use anyhow::Result;

use crate::cli::GetOpts;
use crate::config::accessor;
use crate::logging::Logger;

/// Run the `get` command.
///
/// Prints the resolved value, or the `--default` string when the path is
/// absent or resolves to null. Exactly one line goes to stdout so shell
/// callers can substitute the output directly.
///
/// # Errors
///
/// Returns an error when the config file is missing or unreadable.
pub fn run(opts: &GetOpts, log: &Logger) -> Result<()> {
    let doc = super::load_query_document(&opts.config, log)?;
    match accessor::get_value(&doc, &opts.path) {
        Some(value) => println!("{}", accessor::render_value(value)),
        None => println!("{}", opts.default),
    }
    Ok(())
}

//! The `themes` command: interactive theme browser.

use anyhow::Result;

use crate::logging::Logger;
use crate::themes::tui;

/// Run the `themes` command.
///
/// Logs the session log location before the TUI takes over the terminal,
/// then hands control to the browser until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or a theme
/// directory scan fails.
pub fn run(log: &Logger) -> Result<()> {
    if let Some(path) = log.log_path() {
        log.debug(&format!("log file: {}", path.display()));
    }
    tui::run()?;
    Ok(())
}

//! Theme discovery, manifest loading, and the interactive browser.
//!
//! Split into three layers:
//!
//! - **[`discovery`]**: where theme directories and the external
//!   theme-switch CLI live on this machine
//! - **[`manifest`]**: normalize a theme directory's metadata across the
//!   modern and legacy file formats
//! - **[`tui`]**: the terminal picker wired to the two layers above

pub mod discovery;
pub mod manifest;
pub mod tui;

//! Workstation provisioning toolkit for Pop!_OS machines.
//!
//! Everything is driven by a single YAML machine config (`cosmikase.yaml`)
//! that declares APT/Flatpak/npm packages, fonts, installer recipes, and
//! theme preferences. The crate ships one binary with small, scriptable
//! subcommands plus an interactive theme picker.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** - load the YAML document, query it leniently, validate
//!   it strictly
//! - **[`ron_check`]** - balance check for RON theme fragments
//! - **[`themes`]** - theme directory discovery, manifest loading, and the
//!   terminal picker
//! - **[`commands`]** - top-level subcommand orchestration wired to the
//!   layers above
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod ron_check;
pub mod themes;

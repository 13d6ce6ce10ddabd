//! Command-line surface: argument types for every subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Top-level CLI entry point for the provisioning toolkit.
#[derive(Parser, Debug)]
#[command(
    name = "cosmikase",
    about = "Workstation provisioning toolkit for Pop!_OS machines",
    version
)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single config value addressed by dotted path
    Get(GetOpts),
    /// List enabled items from a config section
    List(ListOpts),
    /// Validate a config file against the schema
    Validate(ValidateOpts),
    /// Check a RON file for balanced brackets and quotes
    CheckRon(CheckRonOpts),
    /// Browse and apply themes interactively
    Themes,
    /// Print version information
    Version,
}

impl Command {
    /// Stable name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Get(_) => "get",
            Self::List(_) => "list",
            Self::Validate(_) => "validate",
            Self::CheckRon(_) => "check-ron",
            Self::Themes => "themes",
            Self::Version => "version",
        }
    }
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// Dotted path into the config (e.g. defaults.theme)
    pub path: String,

    /// Value printed when the path is absent
    #[arg(short, long, default_value = "")]
    pub default: String,

    /// Config file to query
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Config section to list (e.g. apt, npm, web)
    pub section: String,

    /// Group within the section (e.g. core, gui); omit for flat sections
    pub group: Option<String>,

    /// Print names only, one per line
    #[arg(short, long)]
    pub names_only: bool,

    /// Print the matching items as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Config file to query
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Options for the `validate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ValidateOpts {
    /// Config file to validate
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for the `check-ron` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckRonOpts {
    /// RON file to check
    pub path: PathBuf,
}

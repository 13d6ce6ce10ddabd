//! Domain-specific error types for the cosmikase tooling.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`ConfigError`], [`ThemeError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError   config file lookup, YAML parsing
//! ThemeError    theme directory scanning, terminal setup
//! ```

use thiserror::Error;

/// Errors that arise from locating and parsing the machine config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither the requested config file nor any fallback exists.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The YAML file contains a syntax error that prevents parsing.
    #[error("Invalid YAML in {path}: {message}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: String,
        /// Parser diagnostic describing the syntax error.
        message: String,
    },
}

/// Errors that arise from theme discovery and the theme picker TUI.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// An I/O error occurred while reading a theme directory or one of its
    /// manifest files.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The terminal could not be put into or out of raw mode.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

//! Subcommand implementations.
//!
//! Each submodule owns one CLI subcommand and stays thin: resolve inputs,
//! call into [`config`](crate::config) or [`themes`](crate::themes), and
//! print. Query commands (`get`, `list`) write nothing but their payload
//! to stdout so shell callers can substitute the output directly;
//! diagnostics go to the log file and, with `--verbose`, the console.

pub mod check_ron;
pub mod get;
pub mod list;
pub mod themes;
pub mod validate;
pub mod version;

use std::path::Path;

use serde_yaml::Value;

use crate::config;
use crate::error::ConfigError;
use crate::logging::Logger;

/// Common setup for the query commands: resolve the config path (legacy
/// fallback included) and load the YAML document.
fn load_query_document(requested: &Path, log: &Logger) -> Result<Value, ConfigError> {
    let path = config::resolve_config_path(requested)?;
    log.debug(&format!("config file: {}", path.display()));
    config::load_document(&path)
}

//! Machine configuration: document loading, lenient accessors, and strict
//! schema validation.
//!
//! Two error policies coexist on purpose. The [`accessor`] functions never
//! fail; malformed shapes degrade to empty results so shell callers always
//! get usable output. The [`validate`] walker is the opposite: it reports
//! every structural deviation it can find. Call sites rely on each policy,
//! so neither should be folded into the other.

pub mod accessor;
pub mod schema;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Default config file name searched in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cosmikase.yaml";

/// Pre-rename config file name, still honored as a fallback by the query
/// commands.
pub const LEGACY_CONFIG_FILE: &str = "omarchy-pop.yaml";

/// Resolve the config path for query commands.
///
/// Returns `requested` when it exists. When the caller asked for the
/// default file name and it is absent, the legacy name is tried before
/// giving up. The error always names the requested path.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when neither candidate exists.
pub fn resolve_config_path(requested: &Path) -> Result<PathBuf, ConfigError> {
    if requested.exists() {
        return Ok(requested.to_path_buf());
    }
    if requested == Path::new(DEFAULT_CONFIG_FILE) {
        let legacy = Path::new(LEGACY_CONFIG_FILE);
        if legacy.exists() {
            return Ok(legacy.to_path_buf());
        }
    }
    Err(ConfigError::NotFound(requested.display().to_string()))
}

/// Load a YAML config document from `path`.
///
/// An empty document parses to null; it is normalized to an empty mapping
/// so downstream consumers can assume a mapping-or-absent shape throughout.
///
/// # Errors
///
/// Returns an error when the file is missing, unreadable, or not valid YAML.
pub fn load_document(path: &Path) -> Result<Value, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let root: Value = serde_yaml::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    Ok(match root {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

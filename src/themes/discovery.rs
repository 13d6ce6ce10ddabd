//! Locating theme directories and the external theme-switch CLI.
//!
//! Themes live in the first match of an ordered candidate list: an
//! explicit `THEMES_DIR` override, the repository checkout, the working
//! directory, and finally the per-user data directory. The same shape of
//! search finds the `cosmikase-theme` executable that actually applies a
//! theme.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

/// Environment variable overriding the theme directory search.
pub const THEMES_DIR_ENV: &str = "THEMES_DIR";

/// Environment variable overriding the theme-switch CLI lookup.
pub const THEME_CLI_ENV: &str = "THEME_CLI";

/// Name of the external CLI that applies a theme.
pub const THEME_CLI_NAME: &str = "cosmikase-theme";

/// All candidate theme directories that exist, highest priority first.
#[must_use]
pub fn discover_theme_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(dir) = env::var(THEMES_DIR_ENV)
        && !dir.is_empty()
    {
        candidates.push(PathBuf::from(dir));
    }
    if let Some(root) = find_repo_root() {
        candidates.push(root.join("themes"));
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join("themes"));
    }
    if let Some(data) = dirs::data_dir() {
        candidates.push(data.join("cosmikase").join("themes"));
    }
    unique_dirs(candidates)
}

/// Sorted names of the theme subdirectories under `base`.
///
/// A `None` or non-directory base yields an empty list; the caller treats
/// "nowhere to look" the same as "nothing found".
///
/// # Errors
///
/// Returns an error when the directory exists but cannot be scanned.
pub fn list_theme_names(base: Option<&Path>) -> Result<Vec<String>, ThemeError> {
    let Some(base) = base else {
        return Ok(Vec::new());
    };
    if !base.is_dir() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(base).map_err(|source| ThemeError::Io {
        path: base.display().to_string(),
        source,
    })?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ThemeError::Io {
            path: base.display().to_string(),
            source,
        })?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Locate the theme-switch CLI.
///
/// Candidates are tried in order: the `THEME_CLI` override, the
/// repository `bin/` directory, a `PATH` lookup, and the per-user
/// `~/.local/bin`. Each candidate must resolve to an executable file.
#[must_use]
pub fn find_theme_cli() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cli) = env::var(THEME_CLI_ENV)
        && !cli.is_empty()
    {
        candidates.push(PathBuf::from(cli));
    }
    if let Some(root) = find_repo_root() {
        candidates.push(root.join("bin").join(THEME_CLI_NAME));
    }
    candidates.push(PathBuf::from(THEME_CLI_NAME));
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local").join("bin").join(THEME_CLI_NAME));
    }

    for candidate in candidates {
        if let Ok(resolved) = which::which(&candidate) {
            return Some(resolved);
        }
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Deduplicate candidate directories, dropping entries that are not
/// directories. Order and the original spelling of each path survive;
/// symlinked duplicates collapse via canonicalization.
fn unique_dirs(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for path in candidates {
        if !path.is_dir() {
            continue;
        }
        let key = dunce::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if seen.insert(key) {
            unique.push(path);
        }
    }
    unique
}

/// Walk up from the running executable looking for a repository checkout
/// (a directory holding both `themes/` and `bin/`), then fall back to the
/// working directory.
fn find_repo_root() -> Option<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        let exe = dunce::canonicalize(&exe).unwrap_or(exe);
        let mut current = exe.parent().map(Path::to_path_buf);
        for _ in 0..5 {
            let Some(dir) = current else { break };
            if is_repo_root(&dir) {
                return Some(dir);
            }
            current = dir.parent().map(Path::to_path_buf);
        }
    }
    let cwd = env::current_dir().ok()?;
    is_repo_root(&cwd).then_some(cwd)
}

fn is_repo_root(dir: &Path) -> bool {
    dir.join("themes").is_dir() && dir.join("bin").is_dir()
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

//! Theme manifest loading with modern and legacy format probes.
//!
//! A theme directory may describe itself through a single `theme.yaml`
//! (modern) or through marker files left behind by older releases
//! (`dark.mode`/`light.mode` sentinels plus a `cursor.json`). The loader
//! runs the probes in priority order and merges their results per field
//! group, so a partial modern manifest can still pick up legacy values
//! for the fields it does not set.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::ThemeError;

/// Modern single-file manifest name.
pub const MANIFEST_FILE: &str = "theme.yaml";

/// Legacy sentinel marking a dark theme. Content is ignored.
pub const DARK_SENTINEL: &str = "dark.mode";

/// Legacy sentinel marking a light theme. Content is ignored.
pub const LIGHT_SENTINEL: &str = "light.mode";

/// Legacy cursor metadata file.
pub const CURSOR_FILE: &str = "cursor.json";

/// Normalized view of a theme directory's metadata.
///
/// Every field is optional. A directory that matches neither format
/// yields `ThemeManifest::default()` rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeManifest {
    /// Display name, from the modern manifest only.
    pub name: Option<String>,
    /// Color variant, normally `"dark"` or `"light"`.
    pub variant: Option<String>,
    /// Named colors, from the modern manifest only.
    pub colors: BTreeMap<String, String>,
    /// Cursor theme identifier.
    pub cursor_theme: Option<String>,
    /// Editor extension that ships the cursor theme.
    pub cursor_extension: Option<String>,
    /// Wallpaper path, from the modern manifest only.
    pub wallpaper: Option<String>,
}

/// Load the manifest for a theme directory.
///
/// Probes run in priority order: `theme.yaml`, then the variant
/// sentinels, then `cursor.json`. Each later probe only fills field
/// groups an earlier probe left empty. The cursor theme and extension
/// form one group, so a modern `cursor` block that yields either value
/// shadows `cursor.json` entirely. When both sentinels are present,
/// `dark.mode` wins.
///
/// Unparseable manifest files degrade to an empty probe result; the
/// directory is never rejected for bad metadata.
///
/// # Errors
///
/// Returns an error only when a manifest file exists but cannot be read.
pub fn load_manifest(dir: &Path) -> Result<ThemeManifest, ThemeError> {
    let mut manifest = ThemeManifest::default();
    apply_modern(dir, &mut manifest)?;
    apply_sentinels(dir, &mut manifest);
    apply_cursor_json(dir, &mut manifest)?;
    Ok(manifest)
}

/// Probe 1: populate from `theme.yaml` when present and parseable.
fn apply_modern(dir: &Path, manifest: &mut ThemeManifest) -> Result<(), ThemeError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(());
    }
    let text = fs::read_to_string(&path).map_err(|source| ThemeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let Ok(doc) = serde_yaml::from_str::<Value>(&text) else {
        tracing::warn!("ignoring unparseable theme manifest {}", path.display());
        return Ok(());
    };

    manifest.name = string_field(&doc, "name");
    manifest.variant = string_field(&doc, "variant");
    if let Some(colors) = doc.get("colors").and_then(Value::as_mapping) {
        for (key, value) in colors {
            if let (Some(k), Some(v)) = (key.as_str(), value.as_str()) {
                manifest.colors.insert(k.to_owned(), v.to_owned());
            }
        }
    }
    if let Some(cursor) = doc.get("cursor") {
        manifest.cursor_theme = string_field(cursor, "theme");
        manifest.cursor_extension = string_field(cursor, "extension");
    }
    manifest.wallpaper = string_field(&doc, "wallpaper");
    Ok(())
}

/// Probe 2: derive `variant` from legacy sentinel files.
fn apply_sentinels(dir: &Path, manifest: &mut ThemeManifest) {
    if manifest.variant.is_some() {
        return;
    }
    // dark.mode takes precedence when both sentinels exist
    if dir.join(DARK_SENTINEL).exists() {
        manifest.variant = Some("dark".to_owned());
    } else if dir.join(LIGHT_SENTINEL).exists() {
        manifest.variant = Some("light".to_owned());
    }
}

/// Probe 3: populate the cursor pair from legacy `cursor.json`.
fn apply_cursor_json(dir: &Path, manifest: &mut ThemeManifest) -> Result<(), ThemeError> {
    if manifest.cursor_theme.is_some() || manifest.cursor_extension.is_some() {
        return Ok(());
    }
    let path = dir.join(CURSOR_FILE);
    if !path.exists() {
        return Ok(());
    }
    let text = fs::read_to_string(&path).map_err(|source| ThemeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let Ok(doc) = serde_json::from_str::<serde_json::Value>(&text) else {
        tracing::warn!("ignoring unparseable cursor metadata {}", path.display());
        return Ok(());
    };
    manifest.cursor_theme = doc
        .get("colorTheme")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    manifest.cursor_extension = doc
        .get("extension")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    Ok(())
}

/// String value of `key` in a YAML mapping, `None` for other shapes.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

//! Strict structural validation for `cosmikase.yaml`.
//!
//! [`serde`] stops at the first problem it finds, which makes for a poor
//! editing loop. This walker checks the raw document against the same
//! shape as [`schema::CosmikaseConfig`] and collects every violation as
//! its own human-readable message, in document-schema order. A clean walk
//! guarantees the typed model parses.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::schema::{self, CosmikaseConfig, INSTALL_METHODS};

/// How a schema field is typed and whether it must be present.
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    /// String that must be present and non-null.
    RequiredString,
    /// String that may be absent or null.
    OptionalString,
    /// String with a default; absent is fine but null is not.
    DefaultedString,
    /// Boolean with a default; absent is fine but null is not.
    Flag,
    /// Required string drawn from [`INSTALL_METHODS`].
    Method,
}

const PACKAGE_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("install", FieldKind::Flag),
    ("alias", FieldKind::OptionalString),
    ("source", FieldKind::OptionalString),
    ("note", FieldKind::OptionalString),
];

const FLATPAK_FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("install", FieldKind::Flag),
];

const FONT_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("url", FieldKind::RequiredString),
    ("install", FieldKind::Flag),
];

const INSTALLER_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("method", FieldKind::Method),
    ("url", FieldKind::OptionalString),
    ("deb_url", FieldKind::OptionalString),
    ("npm_package", FieldKind::OptionalString),
    ("bun_package", FieldKind::OptionalString),
    ("args", FieldKind::OptionalString),
    ("check", FieldKind::OptionalString),
    ("note", FieldKind::OptionalString),
    ("install", FieldKind::Flag),
];

const NPM_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("version", FieldKind::DefaultedString),
    ("install", FieldKind::Flag),
];

const UV_TOOL_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("install", FieldKind::Flag),
];

const WEB_FIELDS: &[(&str, FieldKind)] = &[
    ("name", FieldKind::RequiredString),
    ("desc", FieldKind::OptionalString),
    ("url", FieldKind::RequiredString),
    ("icon_url", FieldKind::OptionalString),
    ("install", FieldKind::Flag),
];

const DEFAULTS_FIELDS: &[(&str, FieldKind)] = &[
    ("install", FieldKind::Flag),
    ("ghostty", FieldKind::Flag),
    ("yubikey_setup", FieldKind::Flag),
    ("theme", FieldKind::DefaultedString),
    ("run_fw_update", FieldKind::Flag),
    ("run_recovery_upgrade", FieldKind::Flag),
];

const HARDWARE_FIELDS: &[(&str, FieldKind)] = &[
    ("emit_notes", FieldKind::Flag),
    ("oem_kernel", FieldKind::OptionalString),
    ("warn_on_mix", FieldKind::Flag),
    ("notes", FieldKind::OptionalString),
];

const APT_GROUPS: &[(&str, &[(&str, FieldKind)])] = &[
    ("core", PACKAGE_FIELDS),
    ("yubikey", PACKAGE_FIELDS),
    ("gui", PACKAGE_FIELDS),
    ("terminal", PACKAGE_FIELDS),
];

const FLATPAK_GROUPS: &[(&str, &[(&str, FieldKind)])] = &[("utility", FLATPAK_FIELDS)];

const FONTS_GROUPS: &[(&str, &[(&str, FieldKind)])] = &[("nerd", FONT_FIELDS)];

const WEB_GROUPS: &[(&str, &[(&str, FieldKind)])] = &[("apps", WEB_FIELDS)];

const INSTALLERS_GROUPS: &[(&str, &[(&str, FieldKind)])] = &[
    ("runtimes", INSTALLER_FIELDS),
    ("ai_tools", INSTALLER_FIELDS),
    ("security", INSTALLER_FIELDS),
];

/// Short description of a YAML value's shape for error messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Check the fields of one mapping against a field table.
///
/// Unknown keys are ignored; only the declared fields are checked.
fn check_fields(errors: &mut Vec<String>, path: &str, map: &Mapping, fields: &[(&str, FieldKind)]) {
    for (name, kind) in fields {
        let value = map.get(*name);
        match kind {
            FieldKind::RequiredString => match value {
                None => errors.push(format!("{path}.{name}: required field is missing")),
                Some(Value::String(_)) => {}
                Some(other) => errors.push(format!(
                    "{path}.{name}: expected a string, got {}",
                    value_kind(other)
                )),
            },
            FieldKind::OptionalString => match value {
                None | Some(Value::Null | Value::String(_)) => {}
                Some(other) => errors.push(format!(
                    "{path}.{name}: expected a string, got {}",
                    value_kind(other)
                )),
            },
            FieldKind::DefaultedString => match value {
                None | Some(Value::String(_)) => {}
                Some(other) => errors.push(format!(
                    "{path}.{name}: expected a string, got {}",
                    value_kind(other)
                )),
            },
            FieldKind::Flag => match value {
                None | Some(Value::Bool(_)) => {}
                Some(other) => errors.push(format!(
                    "{path}.{name}: expected a boolean, got {}",
                    value_kind(other)
                )),
            },
            FieldKind::Method => match value {
                None => errors.push(format!("{path}.{name}: required field is missing")),
                Some(Value::String(s)) => {
                    if !INSTALL_METHODS.contains(&s.as_str()) {
                        errors.push(format!(
                            "{path}.{name}: unknown method '{s}' (expected one of {})",
                            INSTALL_METHODS.join(", ")
                        ));
                    }
                }
                Some(other) => errors.push(format!(
                    "{path}.{name}: expected a string, got {}",
                    value_kind(other)
                )),
            },
        }
    }
}

/// Check a list of items, flagging non-mapping entries.
fn check_item_list(
    errors: &mut Vec<String>,
    path: &str,
    value: Option<&Value>,
    fields: &[(&str, FieldKind)],
) {
    match value {
        None => {}
        Some(Value::Sequence(items)) => {
            for (idx, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{idx}]");
                if let Some(map) = item.as_mapping() {
                    check_fields(errors, &item_path, map, fields);
                } else {
                    errors.push(format!(
                        "{item_path}: expected a mapping, got {}",
                        value_kind(item)
                    ));
                }
            }
        }
        Some(other) => errors.push(format!("{path}: expected a list, got {}", value_kind(other))),
    }
}

/// Check a section whose groups are lists of items.
fn check_section(
    errors: &mut Vec<String>,
    name: &str,
    value: Option<&Value>,
    groups: &[(&str, &[(&str, FieldKind)])],
) {
    match value {
        None => {}
        Some(Value::Mapping(map)) => {
            for (group, fields) in groups {
                check_item_list(errors, &format!("{name}.{group}"), map.get(*group), fields);
            }
        }
        Some(other) => errors.push(format!(
            "{name}: expected a mapping, got {}",
            value_kind(other)
        )),
    }
}

/// Check the `themes` section (scalar default plus list and mapping fields).
fn check_themes(errors: &mut Vec<String>, value: Option<&Value>) {
    let map = match value {
        None => return,
        Some(Value::Mapping(map)) => map,
        Some(other) => {
            errors.push(format!("themes: expected a mapping, got {}", value_kind(other)));
            return;
        }
    };

    match map.get("default") {
        None | Some(Value::String(_)) => {}
        Some(other) => errors.push(format!(
            "themes.default: expected a string, got {}",
            value_kind(other)
        )),
    }

    match map.get("available") {
        None => {}
        Some(Value::Sequence(items)) => {
            for (idx, item) in items.iter().enumerate() {
                if !item.is_string() {
                    errors.push(format!(
                        "themes.available[{idx}]: expected a string, got {}",
                        value_kind(item)
                    ));
                }
            }
        }
        Some(other) => errors.push(format!(
            "themes.available: expected a list, got {}",
            value_kind(other)
        )),
    }

    match map.get("paths") {
        None => {}
        Some(Value::Mapping(paths)) => {
            for (key, path_value) in paths {
                if let Value::String(key_name) = key {
                    if !path_value.is_string() {
                        errors.push(format!(
                            "themes.paths.{key_name}: expected a string, got {}",
                            value_kind(path_value)
                        ));
                    }
                } else {
                    errors.push(format!(
                        "themes.paths: expected string keys, got {}",
                        value_kind(key)
                    ));
                }
            }
        }
        Some(other) => errors.push(format!(
            "themes.paths: expected a mapping, got {}",
            value_kind(other)
        )),
    }
}

/// Walk a parsed document and collect every structural violation.
///
/// Bare-string entries in `npm` and `uv_tools` are normalized before the
/// walk, so both spellings validate identically. An empty message list
/// means [`schema::CosmikaseConfig`] will parse the document.
#[must_use]
pub fn validate_document(root: &Value) -> Vec<String> {
    let mut doc = root.clone();
    schema::normalize_document(&mut doc);
    let root = &doc;

    if root.as_mapping().is_none() {
        return vec![format!(
            "configuration root: expected a mapping, got {}",
            value_kind(root)
        )];
    }

    let mut errors = Vec::new();

    match root.get("defaults") {
        None => {}
        Some(Value::Mapping(map)) => check_fields(&mut errors, "defaults", map, DEFAULTS_FIELDS),
        Some(other) => errors.push(format!(
            "defaults: expected a mapping, got {}",
            value_kind(other)
        )),
    }

    check_section(&mut errors, "apt", root.get("apt"), APT_GROUPS);
    check_section(&mut errors, "flatpak", root.get("flatpak"), FLATPAK_GROUPS);
    check_section(&mut errors, "fonts", root.get("fonts"), FONTS_GROUPS);
    check_section(&mut errors, "web", root.get("web"), WEB_GROUPS);
    check_section(
        &mut errors,
        "installers",
        root.get("installers"),
        INSTALLERS_GROUPS,
    );

    check_item_list(&mut errors, "npm", root.get("npm"), NPM_FIELDS);
    check_item_list(&mut errors, "uv_tools", root.get("uv_tools"), UV_TOOL_FIELDS);

    check_themes(&mut errors, root.get("themes"));

    match root.get("scripts") {
        None | Some(Value::Sequence(_)) => {}
        Some(other) => errors.push(format!(
            "scripts: expected a list, got {}",
            value_kind(other)
        )),
    }

    match root.get("hp_zbook_ultra") {
        None | Some(Value::Null) => {}
        Some(Value::Mapping(map)) => {
            check_fields(&mut errors, "hp_zbook_ultra", map, HARDWARE_FIELDS);
        }
        Some(other) => errors.push(format!(
            "hp_zbook_ultra: expected a mapping, got {}",
            value_kind(other)
        )),
    }

    errors
}

/// Validate the config file at `path`.
///
/// Returns `(true, [])` when the file is structurally valid, otherwise
/// `(false, messages)` with one message per violation. Load failures
/// (missing file, unreadable file, YAML syntax errors) surface as a single
/// message rather than a process error; the caller decides the exit code.
#[must_use]
pub fn validate_config(path: &Path) -> (bool, Vec<String>) {
    let root = match super::load_document(path) {
        Ok(value) => value,
        Err(err) => return (false, vec![err.to_string()]),
    };

    let errors = validate_document(&root);
    if !errors.is_empty() {
        return (false, errors);
    }

    let mut normalized = root;
    schema::normalize_document(&mut normalized);
    match serde_yaml::from_value::<CosmikaseConfig>(normalized) {
        Ok(_) => (true, Vec::new()),
        Err(err) => (false, vec![err.to_string()]),
    }
}

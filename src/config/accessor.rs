//! Lenient read-only accessors over a parsed config document.
//!
//! Shell scripts query the config through these helpers, so every function
//! here is total: wrong types, missing keys, and null values degrade to
//! empty results instead of failing. Schema problems are the business of
//! [`validate`](super::validate), not this module.

use serde_yaml::{Mapping, Value};

/// Truthiness as shell callers expect it: null, `false`, zero, and empty
/// containers all count as disabled.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.classify() != std::num::FpCategory::Zero),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(_) => true,
    }
}

/// Whether an item is selected for installation.
///
/// Items carry an optional `install` flag; an absent flag means enabled.
fn install_enabled(item: &Mapping) -> bool {
    item.get("install").is_none_or(is_truthy)
}

/// Walk the document one dotted-path segment at a time.
///
/// Returns `None` the moment a segment is missing or the current value is
/// not a mapping. A resolved value of null also returns `None`, so callers
/// cannot distinguish an explicit null from an absent key; both take the
/// caller's default.
#[must_use]
pub fn get_value<'a>(root: &'a Value, dotted_path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in dotted_path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Enabled entries of the list at `config[section][group]`.
///
/// Non-mapping entries are skipped; a missing or mis-typed section or group
/// yields an empty list.
#[must_use]
pub fn enabled_items(root: &Value, section: &str, group: &str) -> Vec<Mapping> {
    let Some(Value::Sequence(items)) = root.get(section).and_then(|s| s.get(group)) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_mapping)
        .filter(|item| install_enabled(item))
        .cloned()
        .collect()
}

/// Enabled entries of a section that is itself a list (`npm`, `uv_tools`).
///
/// Bare scalar entries are coerced to `{name: entry}` so downstream name
/// extraction is uniform. A missing or non-list section yields an empty
/// list.
#[must_use]
pub fn enabled_top_level(root: &Value, section: &str) -> Vec<Mapping> {
    let Some(Value::Sequence(items)) = root.get(section) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::Mapping(m) => install_enabled(m).then(|| m.clone()),
            other => {
                let mut coerced = Mapping::new();
                coerced.insert(Value::String("name".to_string()), other.clone());
                Some(coerced)
            }
        })
        .collect()
}

/// First truthy `name` or `id` field of an item, rendered as text.
#[must_use]
pub fn item_name(item: &Mapping) -> Option<String> {
    ["name", "id"].into_iter().find_map(|key| {
        item.get(key)
            .filter(|value| is_truthy(value))
            .map(render_value)
    })
}

/// Names of enabled items in `config[section][group]`.
///
/// `name` takes precedence over `id` (APT vs Flatpak spelling); entries
/// with neither are dropped.
#[must_use]
pub fn package_names(root: &Value, section: &str, group: &str) -> Vec<String> {
    enabled_items(root, section, group)
        .iter()
        .filter_map(item_name)
        .collect()
}

/// Truthy `name` fields of enabled top-level entries.
///
/// Unlike [`package_names`] there is no `id` fallback; top-level sections
/// only ever carry `name`.
#[must_use]
pub fn top_level_names(root: &Value, section: &str) -> Vec<String> {
    enabled_top_level(root, section)
        .iter()
        .filter_map(|item| {
            item.get("name")
                .filter(|value| is_truthy(value))
                .map(render_value)
        })
        .collect()
}

/// Render a config value the way shell callers expect.
///
/// Booleans print lowercase, scalars print bare, and composite values are
/// rendered as compact JSON so the output stays on one line. Values that
/// cannot be represented as JSON render as an empty string.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Serialize enabled items as indented JSON for shell consumption.
///
/// With a group, items come from `config[section][group]`; without one,
/// the section itself is treated as a top-level list.
#[must_use]
pub fn to_json(root: &Value, section: &str, group: Option<&str>) -> String {
    let items = group.map_or_else(
        || enabled_top_level(root, section),
        |g| enabled_items(root, section, g),
    );
    serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).expect("test yaml should parse")
    }

    // -----------------------------------------------------------------------
    // get_value
    // -----------------------------------------------------------------------

    #[test]
    fn get_value_empty_mapping_returns_none() {
        let root = doc("{}");
        assert_eq!(get_value(&root, "a.b.c"), None);
    }

    #[test]
    fn get_value_walks_nested_path() {
        let root = doc("a:\n  b:\n    c: 5\n");
        assert_eq!(get_value(&root, "a.b.c"), Some(&Value::Number(5.into())));
    }

    #[test]
    fn get_value_non_mapping_intermediate_returns_none() {
        let root = doc("a: 1\n");
        assert_eq!(get_value(&root, "a.b"), None);
    }

    #[test]
    fn get_value_explicit_null_returns_none() {
        let root = doc("a:\n  b: null\n");
        assert_eq!(get_value(&root, "a.b"), None);
    }

    #[test]
    fn get_value_single_segment() {
        let root = doc("theme: nord\n");
        assert_eq!(
            get_value(&root, "theme"),
            Some(&Value::String("nord".to_string()))
        );
    }

    #[test]
    fn get_value_list_value_is_returned() {
        let root = doc("themes:\n  available: [nord, gruvbox]\n");
        let value = get_value(&root, "themes.available").unwrap();
        assert!(value.is_sequence());
    }

    #[test]
    fn get_value_does_not_index_into_lists() {
        let root = doc("items:\n  - a\n  - b\n");
        assert_eq!(get_value(&root, "items.0"), None);
    }

    // -----------------------------------------------------------------------
    // enabled_items
    // -----------------------------------------------------------------------

    #[test]
    fn enabled_items_filters_install_false() {
        let root = doc(concat!(
            "apt:\n",
            "  core:\n",
            "    - name: git\n",
            "    - name: vim\n",
            "      install: false\n",
            "    - name: curl\n",
            "      install: true\n",
        ));
        let items = enabled_items(&root, "apt", "core");
        let names: Vec<_> = items.iter().filter_map(item_name).collect();
        assert_eq!(names, vec!["git", "curl"]);
    }

    #[test]
    fn enabled_items_missing_section_is_empty() {
        let root = doc("{}");
        assert!(enabled_items(&root, "apt", "core").is_empty());
    }

    #[test]
    fn enabled_items_non_mapping_section_is_empty() {
        let root = doc("apt: just-a-string\n");
        assert!(enabled_items(&root, "apt", "core").is_empty());
    }

    #[test]
    fn enabled_items_non_list_group_is_empty() {
        let root = doc("apt:\n  core: 42\n");
        assert!(enabled_items(&root, "apt", "core").is_empty());
    }

    #[test]
    fn enabled_items_skips_non_mapping_entries() {
        let root = doc("apt:\n  core:\n    - name: git\n    - 17\n    - bare\n");
        let items = enabled_items(&root, "apt", "core");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn enabled_items_treats_zero_install_as_disabled() {
        let root = doc("apt:\n  core:\n    - name: git\n      install: 0\n");
        assert!(enabled_items(&root, "apt", "core").is_empty());
    }

    // -----------------------------------------------------------------------
    // enabled_top_level
    // -----------------------------------------------------------------------

    #[test]
    fn enabled_top_level_coerces_bare_strings() {
        let root = doc("npm:\n  - prettier\n  - name: eslint\n    install: false\n");
        let items = enabled_top_level(&root, "npm");
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].get("name"),
            Some(&Value::String("prettier".to_string()))
        );
    }

    #[test]
    fn enabled_top_level_non_list_is_empty() {
        let root = doc("npm: not-a-list\n");
        assert!(enabled_top_level(&root, "npm").is_empty());
    }

    #[test]
    fn enabled_top_level_keeps_enabled_mappings() {
        let root = doc("uv_tools:\n  - name: ruff\n  - name: ty\n    install: true\n");
        assert_eq!(enabled_top_level(&root, "uv_tools").len(), 2);
    }

    // -----------------------------------------------------------------------
    // package_names / top_level_names
    // -----------------------------------------------------------------------

    #[test]
    fn package_names_prefers_name_over_id() {
        let root = doc(concat!(
            "flatpak:\n",
            "  utility:\n",
            "    - id: org.gnome.Boxes\n",
            "    - name: loupe\n",
            "      id: org.gnome.Loupe\n",
            "    - desc: nameless entry\n",
        ));
        assert_eq!(
            package_names(&root, "flatpak", "utility"),
            vec!["org.gnome.Boxes", "loupe"]
        );
    }

    #[test]
    fn package_names_empty_name_falls_back_to_id() {
        let root = doc("flatpak:\n  utility:\n    - name: \"\"\n      id: org.example.App\n");
        assert_eq!(
            package_names(&root, "flatpak", "utility"),
            vec!["org.example.App"]
        );
    }

    #[test]
    fn top_level_names_ignores_id() {
        let root = doc("npm:\n  - name: prettier\n  - id: not-a-name\n");
        assert_eq!(top_level_names(&root, "npm"), vec!["prettier"]);
    }

    // -----------------------------------------------------------------------
    // render_value / to_json
    // -----------------------------------------------------------------------

    #[test]
    fn render_value_booleans_lowercase() {
        assert_eq!(render_value(&Value::Bool(true)), "true");
        assert_eq!(render_value(&Value::Bool(false)), "false");
    }

    #[test]
    fn render_value_scalars_bare() {
        assert_eq!(render_value(&Value::String("nord".to_string())), "nord");
        assert_eq!(render_value(&Value::Number(42.into())), "42");
        assert_eq!(render_value(&Value::Null), "");
    }

    #[test]
    fn render_value_composites_as_json() {
        let root = doc("list: [1, 2]\n");
        let value = get_value(&root, "list").unwrap();
        assert_eq!(render_value(value), "[1,2]");
    }

    #[test]
    fn to_json_grouped_items() {
        let root = doc("apt:\n  core:\n    - name: git\n      desc: version control\n");
        let json = to_json(&root, "apt", Some("core"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "git");
        assert_eq!(parsed[0]["desc"], "version control");
    }

    #[test]
    fn to_json_top_level_without_group() {
        let root = doc("npm:\n  - prettier\n");
        let json = to_json(&root, "npm", None);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "prettier");
    }

    #[test]
    fn to_json_missing_section_is_empty_array() {
        let root = doc("{}");
        assert_eq!(to_json(&root, "apt", Some("core")), "[]");
    }
}

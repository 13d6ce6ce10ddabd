#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `get` and `list` command paths.
//!
//! These tests exercise document loading and the lenient accessors against
//! real files in isolated temporary directories, verifying that:
//! - dotted-path lookup resolves nested values and misses fall through
//! - enabled-item filtering and name extraction match the CLI output rules
//! - `--json` output is a parseable array of the enabled items
//! - malformed sections degrade to empty results instead of failing

mod common;

use cosmikase_cli::config::accessor;
use cosmikase_cli::config::load_document;

/// A config exercising every accessor behavior at once.
const SAMPLE_CONFIG: &str = concat!(
    "defaults:\n",
    "  theme: nord\n",
    "  yubikey_setup: false\n",
    "apt:\n",
    "  core:\n",
    "    - name: git\n",
    "      desc: version control\n",
    "    - name: vim\n",
    "      install: false\n",
    "    - name: curl\n",
    "flatpak:\n",
    "  utility:\n",
    "    - id: org.gnome.Boxes\n",
    "      desc: virtual machines\n",
    "npm:\n",
    "  - prettier\n",
    "  - name: eslint\n",
    "    install: false\n",
    "  - name: typescript\n",
    "themes:\n",
    "  explicit_null: null\n",
);

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

/// A nested dotted path resolves to its scalar value.
#[test]
fn get_resolves_nested_path() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    let value = accessor::get_value(&doc, "defaults.theme").expect("value present");
    assert_eq!(accessor::render_value(value), "nord");
}

/// Booleans render lowercase for shell consumption.
#[test]
fn get_renders_booleans_lowercase() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    let value = accessor::get_value(&doc, "defaults.yubikey_setup").expect("value present");
    assert_eq!(accessor::render_value(value), "false");
}

/// A missing path and an explicit null both miss, so the CLI prints its
/// default in either case.
#[test]
fn get_misses_fall_through_to_default() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    assert_eq!(accessor::get_value(&doc, "defaults.nope"), None);
    assert_eq!(accessor::get_value(&doc, "themes.explicit_null"), None);
    assert_eq!(accessor::get_value(&doc, "defaults.theme.deeper"), None);
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

/// Grouped listing keeps enabled entries and drops `install: false`.
#[test]
fn list_filters_disabled_entries() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    assert_eq!(
        accessor::package_names(&doc, "apt", "core"),
        vec!["git", "curl"]
    );
}

/// Flatpak entries list by `id` when they carry no `name`.
#[test]
fn list_substitutes_id_for_name() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    assert_eq!(
        accessor::package_names(&doc, "flatpak", "utility"),
        vec!["org.gnome.Boxes"]
    );
}

/// Top-level sections accept bare strings and filter disabled mappings.
#[test]
fn list_top_level_coerces_bare_strings() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    assert_eq!(
        accessor::top_level_names(&doc, "npm"),
        vec!["prettier", "typescript"]
    );
}

/// JSON output is a parseable array carrying the enabled item mappings.
#[test]
fn list_json_output_parses() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);
    let doc = load_document(&path).expect("load config");

    let json = accessor::to_json(&doc, "apt", Some("core"));
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let items = parsed.as_array().expect("json array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "git");
    assert_eq!(items[0]["desc"], "version control");
    assert_eq!(items[1]["name"], "curl");
}

// ---------------------------------------------------------------------------
// Lenient degradation
// ---------------------------------------------------------------------------

/// Mis-typed sections yield empty results, never errors.
#[test]
fn malformed_sections_degrade_to_empty() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", "apt: just-a-string\nnpm: 42\n");
    let doc = load_document(&path).expect("load config");

    assert!(accessor::package_names(&doc, "apt", "core").is_empty());
    assert!(accessor::top_level_names(&doc, "npm").is_empty());
    assert_eq!(accessor::to_json(&doc, "apt", Some("core")), "[]");
}

/// Loading the same unchanged file twice yields equal documents.
#[test]
fn repeated_loads_are_equal() {
    let fixture = common::ConfigFixture::new();
    let path = fixture.write("cosmikase.yaml", SAMPLE_CONFIG);

    let first = load_document(&path).expect("first load");
    let second = load_document(&path).expect("second load");
    assert_eq!(first, second);
}

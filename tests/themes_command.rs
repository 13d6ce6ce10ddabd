#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `themes` command data layer.
//!
//! These tests exercise theme-name listing and manifest resolution against
//! real theme trees in isolated temporary directories, verifying that:
//! - listings are the sorted subdirectory names of a themes root
//! - modern `theme.yaml` manifests resolve all field groups
//! - legacy sentinel + `cursor.json` layouts resolve the same fields
//! - probe priority and the dark-sentinel tie-break hold

mod common;

use cosmikase_cli::themes::discovery::list_theme_names;
use cosmikase_cli::themes::manifest::{DARK_SENTINEL, LIGHT_SENTINEL, load_manifest};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Theme names are the sorted directories of the root; stray files are not
/// themes.
#[test]
fn listing_is_sorted_directories_only() {
    let fixture = common::ThemesFixtureBuilder::new()
        .with_theme("nord")
        .with_theme("gruvbox")
        .with_theme("catppuccin")
        .with_stray_file("README.md")
        .build();

    let names = list_theme_names(Some(fixture.themes_dir())).expect("list themes");
    assert_eq!(names, vec!["catppuccin", "gruvbox", "nord"]);
}

/// A root that does not exist lists no themes rather than failing.
#[test]
fn missing_root_lists_nothing() {
    let fixture = common::ThemesFixtureBuilder::new().build();
    let absent = fixture.theme_dir("never-created");

    let names = list_theme_names(Some(&absent)).expect("list themes");
    assert!(names.is_empty());
}

// ---------------------------------------------------------------------------
// Modern manifests
// ---------------------------------------------------------------------------

/// A modern manifest resolves the variant and the full cursor pair.
#[test]
fn modern_manifest_resolves_all_groups() {
    let fixture = common::ThemesFixtureBuilder::new()
        .with_manifest(
            "nord",
            concat!(
                "name: Nord\n",
                "variant: dark\n",
                "cursor:\n",
                "  theme: Nordzy\n",
                "  extension: nordzy.ext\n",
                "wallpaper: fjord.png\n",
            ),
        )
        .build();

    let manifest = load_manifest(&fixture.theme_dir("nord")).expect("load manifest");
    assert_eq!(manifest.name.as_deref(), Some("Nord"));
    assert_eq!(manifest.variant.as_deref(), Some("dark"));
    assert_eq!(manifest.cursor_theme.as_deref(), Some("Nordzy"));
    assert_eq!(manifest.cursor_extension.as_deref(), Some("nordzy.ext"));
    assert_eq!(manifest.wallpaper.as_deref(), Some("fjord.png"));
}

// ---------------------------------------------------------------------------
// Legacy manifests
// ---------------------------------------------------------------------------

/// The sentinel sets the variant and `cursor.json` supplies the cursor pair.
#[test]
fn legacy_layout_resolves_variant_and_cursor() {
    let fixture = common::ThemesFixtureBuilder::new()
        .with_sentinel("solarized", LIGHT_SENTINEL)
        .with_cursor_json(
            "solarized",
            r#"{"colorTheme": "Breeze", "extension": "breeze.ext"}"#,
        )
        .build();

    let manifest = load_manifest(&fixture.theme_dir("solarized")).expect("load manifest");
    assert_eq!(manifest.variant.as_deref(), Some("light"));
    assert_eq!(manifest.cursor_theme.as_deref(), Some("Breeze"));
    assert_eq!(manifest.cursor_extension.as_deref(), Some("breeze.ext"));
    assert_eq!(manifest.name, None);
}

/// With both sentinels on disk the dark one wins.
#[test]
fn both_sentinels_resolve_dark() {
    let fixture = common::ThemesFixtureBuilder::new()
        .with_sentinel("ambiguous", DARK_SENTINEL)
        .with_sentinel("ambiguous", LIGHT_SENTINEL)
        .build();

    let manifest = load_manifest(&fixture.theme_dir("ambiguous")).expect("load manifest");
    assert_eq!(manifest.variant.as_deref(), Some("dark"));
}

// ---------------------------------------------------------------------------
// Probe priority
// ---------------------------------------------------------------------------

/// A modern variant shadows the sentinels entirely.
#[test]
fn modern_variant_beats_sentinel() {
    let fixture = common::ThemesFixtureBuilder::new()
        .with_manifest("mixed", "variant: light\n")
        .with_sentinel("mixed", DARK_SENTINEL)
        .build();

    let manifest = load_manifest(&fixture.theme_dir("mixed")).expect("load manifest");
    assert_eq!(manifest.variant.as_deref(), Some("light"));
}

/// A theme directory without metadata yields an empty manifest, not an
/// error.
#[test]
fn bare_directory_yields_default_manifest() {
    let fixture = common::ThemesFixtureBuilder::new().with_theme("plain").build();

    let manifest = load_manifest(&fixture.theme_dir("plain")).expect("load manifest");
    assert_eq!(manifest.variant, None);
    assert_eq!(manifest.cursor_theme, None);
    assert!(manifest.colors.is_empty());
}

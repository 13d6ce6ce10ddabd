// Shared helpers for integration tests.
//
// Provides temporary-directory-backed config files and theme trees so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated config directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct ConfigFixture {
    /// Temporary directory holding the config files.
    pub root: tempfile::TempDir,
}

impl ConfigFixture {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `content` to `<root>/<name>` and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, content).expect("write config file");
        path
    }

    /// Path that does not exist inside the fixture directory.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

/// A themes root populated with theme directories, backed by a
/// [`tempfile::TempDir`].
pub struct ThemesFixture {
    /// Temporary directory acting as the themes root.
    pub root: tempfile::TempDir,
}

impl ThemesFixture {
    /// The themes root path.
    pub fn themes_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path of one theme directory under the root.
    pub fn theme_dir(&self, theme: &str) -> PathBuf {
        self.root.path().join(theme)
    }
}

/// Fluent builder for [`ThemesFixture`].
///
/// Each `with_*` call creates the named theme directory on demand, so a
/// theme can be declared implicitly by writing any of its files.
pub struct ThemesFixtureBuilder {
    fixture: ThemesFixture,
}

impl ThemesFixtureBuilder {
    /// Begin building an empty themes root.
    pub fn new() -> Self {
        Self {
            fixture: ThemesFixture {
                root: tempfile::tempdir().expect("create temp dir"),
            },
        }
    }

    /// Create an empty theme directory.
    pub fn with_theme(self, theme: &str) -> Self {
        std::fs::create_dir_all(self.fixture.theme_dir(theme)).expect("create theme dir");
        self
    }

    /// Write a `theme.yaml` manifest into the theme directory.
    pub fn with_manifest(self, theme: &str, yaml: &str) -> Self {
        self.write(theme, "theme.yaml", yaml)
    }

    /// Create a legacy sentinel file (`dark.mode` / `light.mode`).
    pub fn with_sentinel(self, theme: &str, sentinel: &str) -> Self {
        self.write(theme, sentinel, "")
    }

    /// Write a legacy `cursor.json` into the theme directory.
    pub fn with_cursor_json(self, theme: &str, json: &str) -> Self {
        self.write(theme, "cursor.json", json)
    }

    /// Write a stray file directly under the themes root (not a theme).
    pub fn with_stray_file(self, name: &str) -> Self {
        std::fs::write(self.fixture.themes_dir().join(name), "").expect("write stray file");
        self
    }

    /// Finish building and return the populated fixture.
    pub fn build(self) -> ThemesFixture {
        self.fixture
    }

    fn write(self, theme: &str, name: &str, content: &str) -> Self {
        let dir = self.fixture.theme_dir(theme);
        std::fs::create_dir_all(&dir).expect("create theme dir");
        std::fs::write(dir.join(name), content).expect("write theme file");
        self
    }
}

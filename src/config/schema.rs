//! Typed schema for `cosmikase.yaml`.
//!
//! The structs here are the single source of truth for what a valid config
//! looks like; [`validate`](super::validate) walks the raw document against
//! the same shape to collect every violation instead of stopping at the
//! first one. Unknown keys are ignored at every level so configs can carry
//! forward-compatible extensions.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Install mechanisms a custom installer recipe may declare.
pub const INSTALL_METHODS: [&str; 10] = [
    "script",
    "deb",
    "npm",
    "bun",
    "tarball",
    "custom_nvm",
    "custom_antigravity",
    "custom_brave",
    "custom_dangerzone",
    "manual",
];

const fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "nord".to_string()
}

fn default_version() -> String {
    "latest".to_string()
}

/// Supported install mechanism for a custom installer recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallMethod {
    /// Run a bundled shell script.
    Script,
    /// Download and install a `.deb` package.
    Deb,
    /// Install a package globally via npm.
    Npm,
    /// Install a package globally via bun.
    Bun,
    /// Download and unpack a tarball.
    Tarball,
    /// Dedicated nvm bootstrap flow.
    CustomNvm,
    /// Dedicated Antigravity install flow.
    CustomAntigravity,
    /// Dedicated Brave browser install flow.
    CustomBrave,
    /// Dedicated Dangerzone install flow.
    CustomDangerzone,
    /// No automation; the item is a reminder for a manual step.
    Manual,
}

/// APT package entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageItem {
    /// Package name as known to APT.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
    /// Alternate binary name when it differs from the package name.
    #[serde(default)]
    pub alias: Option<String>,
    /// Package source hint (e.g. a PPA) for provisioning scripts.
    #[serde(default)]
    pub source: Option<String>,
    /// Free-form operator note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Flatpak application entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlatpakItem {
    /// Flatpak application ID (e.g. `org.example.App`).
    pub id: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// Downloadable font entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontItem {
    /// Font family name.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Download URL for the font archive.
    pub url: String,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// Custom installer recipe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallerItem {
    /// Installer name.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Install mechanism for this recipe.
    pub method: InstallMethod,
    /// Download or documentation URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Direct `.deb` download URL (for the `deb` method).
    #[serde(default)]
    pub deb_url: Option<String>,
    /// npm package name (for the `npm` method).
    #[serde(default)]
    pub npm_package: Option<String>,
    /// bun package name (for the `bun` method).
    #[serde(default)]
    pub bun_package: Option<String>,
    /// Extra arguments passed to the install script.
    #[serde(default)]
    pub args: Option<String>,
    /// Command whose presence on PATH marks the recipe as installed.
    #[serde(default)]
    pub check: Option<String>,
    /// Free-form operator note.
    #[serde(default)]
    pub note: Option<String>,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// Global npm package entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NpmItem {
    /// npm package name.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Version or dist-tag to install.
    #[serde(default = "default_version")]
    pub version: String,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// uv-managed tool entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UvToolItem {
    /// Tool name as known to `uv tool install`.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// Web application shortcut entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebItem {
    /// Display name of the web app.
    pub name: String,
    /// One-line description shown in list output.
    #[serde(default)]
    pub desc: Option<String>,
    /// Application URL.
    pub url: String,
    /// Icon URL for the desktop entry.
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Whether the item is selected for installation.
    #[serde(default = "default_true")]
    pub install: bool,
}

/// Machine-wide default settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    /// Master switch for the whole provisioning run.
    #[serde(default = "default_true")]
    pub install: bool,
    /// Whether the Ghostty terminal setup runs.
    #[serde(default = "default_true")]
    pub ghostty: bool,
    /// Whether the YubiKey setup flow runs.
    #[serde(default)]
    pub yubikey_setup: bool,
    /// Default theme name applied after provisioning.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Whether firmware updates run during provisioning.
    #[serde(default = "default_true")]
    pub run_fw_update: bool,
    /// Whether a release upgrade check runs during provisioning.
    #[serde(default)]
    pub run_recovery_upgrade: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            install: true,
            ghostty: true,
            yubikey_setup: false,
            theme: default_theme(),
            run_fw_update: true,
            run_recovery_upgrade: false,
        }
    }
}

/// APT package groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AptConfig {
    /// Packages every machine gets.
    #[serde(default)]
    pub core: Vec<PackageItem>,
    /// Packages for YubiKey support.
    #[serde(default)]
    pub yubikey: Vec<PackageItem>,
    /// Desktop applications.
    #[serde(default)]
    pub gui: Vec<PackageItem>,
    /// Terminal tooling.
    #[serde(default)]
    pub terminal: Vec<PackageItem>,
}

/// Flatpak application groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlatpakConfig {
    /// Utility applications.
    #[serde(default)]
    pub utility: Vec<FlatpakItem>,
}

/// Font groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FontsConfig {
    /// Nerd Font downloads.
    #[serde(default)]
    pub nerd: Vec<FontItem>,
}

/// Web application groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebConfig {
    /// Web app shortcuts to create.
    #[serde(default)]
    pub apps: Vec<WebItem>,
}

/// Custom installer groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstallersConfig {
    /// Language runtimes and toolchains.
    #[serde(default)]
    pub runtimes: Vec<InstallerItem>,
    /// AI assistant tooling.
    #[serde(default)]
    pub ai_tools: Vec<InstallerItem>,
    /// Security tooling.
    #[serde(default)]
    pub security: Vec<InstallerItem>,
}

/// Theme inventory settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemesConfig {
    /// Theme applied when none is chosen explicitly.
    #[serde(default = "default_theme")]
    pub default: String,
    /// Theme names offered by the picker.
    #[serde(default)]
    pub available: Vec<String>,
    /// Per-theme asset path overrides.
    #[serde(default)]
    pub paths: BTreeMap<String, String>,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
            available: Vec::new(),
            paths: BTreeMap::new(),
        }
    }
}

/// Hardware-specific overrides for one machine model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HardwareConfig {
    /// Whether hardware notes print during provisioning.
    #[serde(default = "default_true")]
    pub emit_notes: bool,
    /// OEM kernel package to pin, if any.
    #[serde(default)]
    pub oem_kernel: Option<String>,
    /// Whether to warn when mixing OEM and stock kernels.
    #[serde(default = "default_true")]
    pub warn_on_mix: bool,
    /// Free-form operator notes for this model.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Root configuration model for `cosmikase.yaml`.
///
/// Every section is optional and defaults to an empty container, so an
/// empty document is a valid (if useless) config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CosmikaseConfig {
    /// Machine-wide default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// APT package groups.
    #[serde(default)]
    pub apt: AptConfig,
    /// Flatpak application groups.
    #[serde(default)]
    pub flatpak: FlatpakConfig,
    /// Font groups.
    #[serde(default)]
    pub fonts: FontsConfig,
    /// Web application groups.
    #[serde(default)]
    pub web: WebConfig,
    /// Custom installer groups.
    #[serde(default)]
    pub installers: InstallersConfig,
    /// Global npm packages (accepts bare strings, normalized before parse).
    #[serde(default)]
    pub npm: Vec<NpmItem>,
    /// uv-managed tools (accepts bare strings, normalized before parse).
    #[serde(default)]
    pub uv_tools: Vec<UvToolItem>,
    /// Theme inventory settings.
    #[serde(default)]
    pub themes: ThemesConfig,
    /// Free-form post-install script entries, passed through untyped.
    #[serde(default)]
    pub scripts: Vec<Value>,
    /// Overrides for the HP ZBook Ultra, when provisioning one.
    #[serde(default)]
    pub hp_zbook_ultra: Option<HardwareConfig>,
}

/// Rewrite bare-string entries in `npm` and `uv_tools` to `{name: entry}`
/// mappings so both spellings validate and parse identically.
///
/// Only list-shaped sections are touched; anything else is left for the
/// validator to report.
pub fn normalize_document(root: &mut Value) {
    let Some(map) = root.as_mapping_mut() else {
        return;
    };
    for key in ["npm", "uv_tools"] {
        if let Some(Value::Sequence(items)) = map.get_mut(key) {
            for item in items.iter_mut() {
                if let Value::String(s) = item {
                    let mut coerced = Mapping::new();
                    coerced.insert(
                        Value::String("name".to_string()),
                        Value::String(std::mem::take(s)),
                    );
                    *item = Value::Mapping(coerced);
                }
            }
        }
    }
}

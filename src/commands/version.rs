//! The `version` command: print version information.
#![allow(clippy::print_stdout)]

/// Print the cosmikase version to stdout.
///
/// Prefers the build-time `COSMIKASE_VERSION` (set from `git describe`),
/// falling back to the crate version.
pub fn run() {
    let version = option_env!("COSMIKASE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    println!("cosmikase {version}");
}

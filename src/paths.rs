//! Path resolution for the cache file and configuration directory.
//!
//! The cache lives next to the running executable by default; configuration
//! follows the XDG Base Directory Specification.

use std::path::PathBuf;

/// Returns the default cache file path.
///
/// The path is the running executable's path with its extension replaced by
/// `.cache.json` (so `trc` gets `trc.cache.json` in the same directory).
/// Falls back to `trc.cache.json` in the working directory when the
/// executable path cannot be determined.
pub fn default_cache_path() -> PathBuf {
    std::env::current_exe().map_or_else(
        |_| PathBuf::from("trc.cache.json"),
        |exe| exe.with_extension("cache.json"),
    )
}

/// Returns the configuration directory for trc.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/trc` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/trc` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("trc"),
        |xdg| PathBuf::from(xdg).join("trc"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

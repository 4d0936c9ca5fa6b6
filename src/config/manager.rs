use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Built-in default for the source language (provider-side auto-detection).
pub const DEFAULT_SOURCE: &str = "auto";

/// Built-in default for the target language.
pub const DEFAULT_TARGET: &str = "es";

/// Built-in default for the translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Default settings in the `[trc]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrcConfig {
    /// Default source language code.
    pub source: Option<String>,
    /// Default target language code.
    pub target: Option<String>,
    /// Translation endpoint URL.
    pub endpoint: Option<String>,
}

/// Cache settings in the `[cache]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
    /// Cache file path override.
    pub file: Option<PathBuf>,
    /// Whether error placeholders are persisted (default true).
    pub errors: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/trc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub trc: TrcConfig,
    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The source language code.
    pub source: String,
    /// The target language code.
    pub target: String,
    /// The translation endpoint URL.
    pub endpoint: String,
    /// The cache file path.
    pub cache_file: PathBuf,
    /// Whether error placeholders are persisted to the cache.
    pub cache_errors: bool,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub source: Option<String>,
    /// Target language code override.
    pub target: Option<String>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Cache file path override.
    pub cache_file: Option<PathBuf>,
    /// Disable persisting error placeholders.
    pub no_cache_errors: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority order (highest to lowest): CLI arguments, config file values,
/// built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let source = options
        .source
        .clone()
        .or_else(|| config_file.trc.source.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let target = options
        .target
        .clone()
        .or_else(|| config_file.trc.target.clone())
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config_file.trc.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let cache_file = options
        .cache_file
        .clone()
        .or_else(|| config_file.cache.file.clone())
        .unwrap_or_else(paths::default_cache_path);

    let cache_errors = if options.no_cache_errors {
        false
    } else {
        config_file.cache.errors.unwrap_or(true)
    };

    ResolvedConfig {
        source,
        target,
        endpoint,
        cache_file,
        cache_errors,
    }
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/trc/config.toml`
    /// or `~/.config/trc/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

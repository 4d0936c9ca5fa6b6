//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::path::PathBuf;
use trc_cli::config::{
    CacheConfig, ConfigFile, DEFAULT_ENDPOINT, DEFAULT_SOURCE, DEFAULT_TARGET, ResolveOptions,
    TrcConfig, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        trc: TrcConfig {
            source: Some("en".to_string()),
            target: Some("ja".to_string()),
            endpoint: Some("http://config.local".to_string()),
        },
        cache: CacheConfig {
            file: Some(PathBuf::from("/tmp/config.cache.json")),
            errors: Some(false),
        },
    }
}

#[test]
fn test_cli_languages_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        source: Some("de".to_string()),
        target: Some("fr".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.source, "de");
    assert_eq!(resolved.target, "fr");
}

#[test]
fn test_cli_endpoint_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.endpoint, "http://cli.local");
}

#[test]
fn test_cli_cache_file_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        cache_file: Some(PathBuf::from("/tmp/cli.cache.json")),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.cache_file, PathBuf::from("/tmp/cli.cache.json"));
}

#[test]
fn test_config_values_beat_builtin_defaults() {
    let config = make_config_with_defaults();
    let resolved = resolve_config(&ResolveOptions::default(), &config);

    assert_eq!(resolved.source, "en");
    assert_eq!(resolved.target, "ja");
    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.cache_file, PathBuf::from("/tmp/config.cache.json"));
    assert!(!resolved.cache_errors);
}

#[test]
fn test_builtin_defaults_apply_when_nothing_is_set() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

    assert_eq!(resolved.source, DEFAULT_SOURCE);
    assert_eq!(resolved.target, DEFAULT_TARGET);
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert!(resolved.cache_errors);
    // The default cache file sits next to the running executable.
    let name = resolved.cache_file.file_name().unwrap().to_string_lossy();
    assert!(name.ends_with(".cache.json"));
}

#[test]
fn test_no_cache_errors_flag_beats_config_true() {
    let config = ConfigFile {
        trc: TrcConfig::default(),
        cache: CacheConfig {
            file: None,
            errors: Some(true),
        },
    };
    let options = ResolveOptions {
        no_cache_errors: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config);

    assert!(!resolved.cache_errors);
}

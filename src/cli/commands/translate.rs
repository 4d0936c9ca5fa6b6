use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use crate::cache::CacheStore;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::{Translate, TranslationClient};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub output: Option<String>,
    pub stdin: bool,
    pub source: Option<String>,
    pub target: Option<String>,
    pub endpoint: Option<String>,
    pub cache_file: Option<PathBuf>,
    pub no_cache_errors: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let config = resolve_config(
        &ResolveOptions {
            source: options.source,
            target: options.target,
            endpoint: options.endpoint,
            cache_file: options.cache_file,
            no_cache_errors: options.no_cache_errors,
        },
        &config_file,
    );

    let lines = match InputReader::resolve(
        options.text.as_deref(),
        options.file.as_deref(),
        options.stdin,
    ) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("{} {err}", Style::error("Error:"));
            process::exit(2);
        }
    };

    let store = CacheStore::new(config.cache_file.clone());
    let mut cache = store.load();
    let client = TranslationClient::new(config.endpoint.clone());

    let spinner = Spinner::new(format!("Translating {} line(s)...", lines.len()));
    let results = translate_lines(
        &client,
        &mut cache,
        &lines,
        &config.source,
        &config.target,
        config.cache_errors,
    )
    .await;
    spinner.stop();

    // A failed cache save must not abort the run.
    if let Err(err) = store.save(&cache) {
        eprintln!("{} failed to save cache: {err:#}", Style::warning("Warning:"));
    }

    let output_text = results.join("\n");

    if let Some(path) = options.output.as_deref() {
        if let Err(err) = atomic_write(Path::new(path), &output_text) {
            eprintln!(
                "{} failed to write output file: {err:#}",
                Style::error("Error:")
            );
            process::exit(3);
        }
        println!("Saved translations to {path}");
    } else {
        println!("{output_text}");
    }

    Ok(())
}

/// Translates each input line in order, consulting and updating the cache.
///
/// Trimmed-empty lines produce an empty output line and are neither
/// translated nor cached. The cache key is the trimmed line. A failed call
/// produces an `[ERROR: <message>]` placeholder, which is cached like a
/// success unless `cache_errors` is false. Calls are strictly sequential
/// with no retries; output always has one entry per input line.
pub async fn translate_lines<T: Translate>(
    translator: &T,
    cache: &mut BTreeMap<String, String>,
    lines: &[String],
    source: &str,
    target: &str,
    cache_errors: bool,
) -> Vec<String> {
    let mut results = Vec::with_capacity(lines.len());

    for line in lines {
        let key = line.trim();
        if key.is_empty() {
            results.push(String::new());
            continue;
        }

        if let Some(hit) = cache.get(key) {
            results.push(hit.clone());
            continue;
        }

        let (translated, failed) = match translator.translate(key, source, target).await {
            Ok(text) => (text, false),
            Err(err) => (format!("[ERROR: {err:#}]"), true),
        };

        if !failed || cache_errors {
            cache.insert(key.to_string(), translated.clone());
        }
        results.push(translated);
    }

    results
}

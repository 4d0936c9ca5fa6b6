use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;

/// Persistent translation cache backed by a flat JSON file.
///
/// The file maps trimmed source strings to translated strings. It is read
/// once per run and written back once per run.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached translations.
    ///
    /// A missing, unreadable, or unparsable file yields an empty mapping.
    pub fn load(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Writes the mapping back to disk as indented JSON.
    ///
    /// Non-ASCII characters are stored literally, so the file stays
    /// human-readable. The write is atomic (temp file + rename).
    pub fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let mut contents =
            serde_json::to_string_pretty(entries).context("Failed to serialize cache")?;
        contents.push('\n');

        atomic_write(&self.path, &contents)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> CacheStore {
        CacheStore::new(temp_dir.path().join("translations.cache.json"))
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        fs::write(store.path(), "{ not json at all").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut entries = BTreeMap::new();
        entries.insert("Hello".to_string(), "Hola".to_string());
        entries.insert("Good morning".to_string(), "Buenos días".to_string());

        store.save(&entries).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_save_writes_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut entries = BTreeMap::new();
        entries.insert("Hello".to_string(), "Hola".to_string());

        store.save(&entries).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();

        assert!(contents.contains("\n  \"Hello\": \"Hola\"\n"));
    }

    #[test]
    fn test_save_preserves_non_ascii_literally() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut entries = BTreeMap::new();
        entries.insert("Hello".to_string(), "こんにちは".to_string());
        entries.insert("coffee".to_string(), "café".to_string());

        store.save(&entries).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();

        assert!(contents.contains("こんにちは"));
        assert!(contents.contains("café"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("no_such_dir").join("c.cache.json"));

        let result = store.save(&BTreeMap::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_error_placeholder_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        let mut entries = BTreeMap::new();
        entries.insert(
            "unreachable".to_string(),
            "[ERROR: connection refused]".to_string(),
        );

        store.save(&entries).unwrap();

        assert_eq!(
            store.load().get("unreachable").map(String::as_str),
            Some("[ERROR: connection refused]")
        );
    }
}

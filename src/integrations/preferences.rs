//! Durable key-value storage for view preferences.
//!
//! The file store keeps a flat JSON object of string values and rewrites the
//! whole file on every `set`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// File-backed store
// =============================================================================

#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`. A missing file starts empty; an unreadable
    /// or corrupt one is logged and treated as empty.
    pub fn open(path: &Path) -> Self {
        let values = match load_values(path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring preferences at {}: {:#}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        save_values(&self.path, &self.values)
    }
}

fn load_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences from {}", path.display()))?;

    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse preferences from {}", path.display()))?;

    // Non-string values are dropped rather than failing the whole file
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect())
}

fn save_values(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content =
        serde_json::to_string_pretty(values).context("Failed to serialize preferences")?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write preferences to {}", path.display()))?;

    Ok(())
}

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A preset value: exactly three channels, 0-255.
/// Deserializing through this type rejects malformed triples at load time.
pub type Rgb = [u8; 3];

/// The preset store: an on-disk JSON object mapping preset name to RGB
/// triple, plus its in-memory cache. Every mutation is flushed to disk
/// immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetStore {
    #[serde(skip)]
    path: PathBuf,

    #[serde(flatten)]
    presets: BTreeMap<String, Rgb>,
}

impl PresetStore {
    /// An empty store bound to `path`. Also the fallback when the backing
    /// file cannot be loaded.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            presets: BTreeMap::new(),
        }
    }

    /// Load the store from `path`. A missing file yields an empty store;
    /// malformed JSON is an error the caller decides how to handle.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::empty(path));
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("read preset file {}", path.display()))?;
        let mut store = serde_json::from_str::<PresetStore>(&text)
            .with_context(|| format!("parse preset file {}", path.display()))?;
        store.path = path;
        Ok(store)
    }

    /// Serialize the full mapping and replace the backing file. Writes to a
    /// sibling temp file first so a failed write cannot corrupt the store.
    fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize presets to json")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace preset file {}", self.path.display()))?;
        Ok(())
    }

    /// Insert or overwrite (last write wins), then flush to disk.
    pub fn set(&mut self, name: impl Into<String>, rgb: Rgb) -> anyhow::Result<()> {
        self.presets.insert(name.into(), rgb);
        self.save()
    }

    /// Remove `name` if present and flush. Returns whether anything was
    /// removed; an unknown name is not an error and does not touch the file.
    pub fn remove(&mut self, name: &str) -> anyhow::Result<bool> {
        if self.presets.remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.presets.get(name).copied()
    }

    pub fn names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

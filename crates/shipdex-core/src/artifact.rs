//! The name -> image URL mapping produced by `resolve` and read by the browser.
//!
//! Persisted as one JSON object. Written once, through a temp file in the
//! target directory that is renamed into place, so readers never see a
//! half-written mapping.

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Insertion-ordered map from entity name to image URL (empty = not found).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ImageMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let name = name.into();
        let url = url.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = url,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, url));
            }
        }
    }

    /// Stored value for `name`, including an empty string for a recorded miss.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    /// Non-empty image URL for `name`, if one was resolved.
    pub fn image_for(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|url| !url.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of entries with a non-empty URL.
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, url)| !url.is_empty()).count()
    }

    /// Writes the mapping as pretty JSON (creates the parent dir if needed).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;

        let json = serde_json::to_string_pretty(self).context("serialize image mapping")?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.flush())
            .context("write image mapping")?;
        set_published_mode(tmp.as_file(), path)?;
        tmp.persist(path)
            .with_context(|| format!("write image mapping: {}", path.display()))?;
        Ok(())
    }

    /// Reads a mapping written by [`save_to_path`](Self::save_to_path).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read image mapping: {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse image mapping: {}", path.display()))
    }

    /// Like [`load_from_path`](Self::load_from_path) but a missing or invalid
    /// file is an empty mapping, so every ship falls back to its placeholder.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(mapping) => mapping,
            Err(e) => {
                tracing::warn!("image mapping unavailable, using placeholders: {:#}", e);
                Self::new()
            }
        }
    }
}

/// Temp files are created 0600. The published mapping takes the existing
/// target's mode, else 0644.
#[cfg(unix)]
fn set_published_mode(file: &std::fs::File, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(target)
        .map(|m| m.permissions().mode() & 0o7777)
        .unwrap_or(0o644);
    file.set_permissions(std::fs::Permissions::from_mode(mode))
        .with_context(|| format!("set permissions on temp file for {}", target.display()))
}

#[cfg(not(unix))]
fn set_published_mode(_file: &std::fs::File, _target: &Path) -> Result<()> {
    Ok(())
}

impl Serialize for ImageMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, url) in &self.entries {
            map.serialize_entry(name, url)?;
        }
        map.end()
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = ImageMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping names to image URLs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = ImageMapping::new();
        while let Some((name, url)) = access.next_entry::<String, String>()? {
            mapping.insert(name, url);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for ImageMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}

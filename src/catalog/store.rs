use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::layout::GalleryLayout;
use crate::core::snapshot::{SnapshotEntry, SnapshotStatus};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Snapshot directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to list snapshot directory: {0}")]
    ReadError(#[from] std::io::Error),
}

/// All snapshots known for one run, keyed by full file name.
///
/// Backed by an ordered map so iteration (and therefore every report list) is
/// sorted by key.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    entries: BTreeMap<String, SnapshotEntry>,
}

impl SnapshotRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every file in `dir` whose name ends with the layout's snapshot suffix.
    ///
    /// The listing is not recursive; subdirectories are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if `dir` is not a directory, or
    /// `RegistryError::ReadError` if it cannot be listed.
    pub fn build(dir: &Path, layout: &GalleryLayout) -> Result<Self, RegistryError> {
        if !dir.is_dir() {
            return Err(RegistryError::NotFound(dir.to_path_buf()));
        }

        let mut registry = Self::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            // Non-UTF-8 names can never match a reference, skip them
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.ends_with(&layout.snapshot_suffix) {
                registry.insert(SnapshotEntry::new(name, &layout.audio_marker));
            }
        }

        if registry.is_empty() {
            warn!("No snapshots found in {}", dir.display());
        }
        debug!(
            "Registered {} snapshots ({} audio) from {}",
            registry.len(),
            registry.audio_count(),
            dir.display()
        );

        Ok(registry)
    }

    /// Build a registry from file names, without touching the filesystem
    pub fn from_keys<I, S>(keys: I, layout: &GalleryLayout) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for key in keys {
            registry.insert(SnapshotEntry::new(key, &layout.audio_marker));
        }
        registry
    }

    /// Add an entry. A later entry with the same key replaces the earlier one.
    pub fn insert(&mut self, entry: SnapshotEntry) {
        self.entries.insert(entry.key().to_string(), entry);
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&SnapshotEntry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SnapshotEntry> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.values()
    }

    /// Report view of every entry, in key order
    pub fn statuses(&self) -> Vec<SnapshotStatus> {
        self.iter().map(SnapshotEntry::status).collect()
    }

    pub fn audio_count(&self) -> usize {
        self.iter().filter(|e| e.is_audio()).count()
    }

    /// Number of registered snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

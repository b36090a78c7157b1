use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to read layout file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse layout file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Default snapshot directory, relative to the project root.
/// Also the path prefix that documentation references must carry.
pub const DEFAULT_SNAPSHOT_DIR: &str = "examples/snapshots";

/// Default documentation directory, relative to the project root
pub const DEFAULT_PAGES_DIR: &str = ".gh-pages";

/// Naming and location conventions for a snapshot gallery.
///
/// Every value that identifies a snapshot, a page or a reference lives here so the
/// registry and extractor can be pointed at arbitrary roots and naming schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryLayout {
    /// Snapshot directory relative to the root, and the reference path prefix
    pub snapshot_dir: String,

    /// Documentation directory relative to the root
    pub pages_dir: String,

    /// Extension (without dot) of documentation pages
    pub page_extension: String,

    /// File name suffix identifying a snapshot
    pub snapshot_suffix: String,

    /// Substring marking an audio snapshot
    pub audio_marker: String,

    /// Substring marking a pending/new artifact that must be ignored
    pub transient_marker: String,

    /// Extension (without dot) of rendered charts
    pub chart_extension: String,

    /// Extension (without dot) of rendered audio
    pub audio_extension: String,
}

impl Default for GalleryLayout {
    fn default() -> Self {
        Self {
            snapshot_dir: DEFAULT_SNAPSHOT_DIR.to_string(),
            pages_dir: DEFAULT_PAGES_DIR.to_string(),
            page_extension: "md".to_string(),
            snapshot_suffix: ".snap".to_string(),
            audio_marker: "@audio".to_string(),
            transient_marker: ".new.".to_string(),
            chart_extension: "svg".to_string(),
            audio_extension: "wav".to_string(),
        }
    }
}

impl GalleryLayout {
    /// Load a layout from a JSON file. Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ReadError` if the file cannot be read, or
    /// `LayoutError::ParseError` if it is not a valid layout object.
    pub fn load_from_file(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a layout from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ParseError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Absolute snapshot directory under `root`
    #[must_use]
    pub fn snapshot_path(&self, root: &Path) -> PathBuf {
        root.join(&self.snapshot_dir)
    }

    /// Absolute documentation directory under `root`
    #[must_use]
    pub fn pages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.pages_dir)
    }

    /// Path prefix references must start with, normalized to forward slashes
    /// and without a trailing separator
    #[must_use]
    pub fn reference_prefix(&self) -> String {
        self.snapshot_dir
            .replace('\\', "/")
            .trim_end_matches('/')
            .to_string()
    }
}

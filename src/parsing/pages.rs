use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Markdown directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A documentation page loaded as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: PathBuf,
    pub text: String,
}

impl Page {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a page, replacing byte sequences that are not valid UTF-8 with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `PageError::ReadError` if the file cannot be read at all.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let bytes = std::fs::read(path).map_err(|source| PageError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, decode_lossy(path, &bytes)))
    }
}

fn decode_lossy(path: &Path, bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            debug!("Replaced invalid UTF-8 in {}", path.display());
            text
        }
    }
}

/// List the pages directly inside `dir` with the given extension, sorted by path.
///
/// # Errors
///
/// Returns `PageError::NotFound` if `dir` is not a directory, or
/// `PageError::ReadError` if it cannot be listed.
pub fn discover_pages(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PageError> {
    if !dir.is_dir() {
        return Err(PageError::NotFound(dir.to_path_buf()));
    }

    let read_error = |source| PageError::ReadError {
        path: dir.to_path_buf(),
        source,
    };

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            pages.push(path);
        }
    }
    pages.sort();

    debug!("Found {} pages in {}", pages.len(), dir.display());
    Ok(pages)
}

/// Discover and load every page in `dir`
///
/// # Errors
///
/// Propagates errors from [`discover_pages`] and [`Page::load`].
pub fn load_pages(dir: &Path, extension: &str) -> Result<Vec<Page>, PageError> {
    discover_pages(dir, extension)?
        .iter()
        .map(|path| Page::load(path))
        .collect()
}

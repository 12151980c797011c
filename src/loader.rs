//! Reads text assets from disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a text asset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),
}

impl LoadError {
    /// Path of the asset that could not be loaded
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read(path, _) => path,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            LoadError::Read(_, e) => e.kind(),
        }
    }
}

/// Read the whole file at `path` into a string.
///
/// The file is opened, read and closed before returning. Contents must be
/// valid UTF-8; anything else is reported as an I/O error.
pub fn load_file(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
    log::debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

//! Flat-file dataset store.
//!
//! Datasets travel as raw tab-separated text; parsing and validation happen
//! elsewhere. The store only moves bytes.

use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the raw tab-separated text at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<String, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    info!("loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write raw tab-separated text to `path`, replacing any previous content.
pub fn save(path: impl AsRef<Path>, text: &str) -> Result<(), StoreError> {
    let path = path.as_ref();
    fs::write(path, text)?;
    info!("saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

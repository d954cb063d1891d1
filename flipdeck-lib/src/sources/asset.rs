//! Bundled JSON asset source

use log::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Quote, QuoteSource, SourceError};

/// Reads the quote collection from a bundled JSON file on disk.
pub struct AssetSource {
    path: PathBuf,
}

impl AssetSource {
    /// Creates a source reading from the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn origin(&self) -> Option<String> {
        Some(self.path.display().to_string())
    }
}

impl QuoteSource for AssetSource {
    fn load(&self) -> Result<Vec<Quote>, SourceError> {
        debug!("reading quote asset: {}", self.path.display());

        let raw = fs::read_to_string(&self.path).map_err(|e| SourceError {
            origin: self.origin(),
            msg: e.to_string(),
        })?;

        serde_json::from_str::<Vec<Quote>>(&raw).map_err(|e| SourceError {
            origin: self.origin(),
            msg: e.to_string(),
        })
    }
}

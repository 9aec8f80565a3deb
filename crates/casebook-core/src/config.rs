//! Store configuration
//!
//! The backing file path is injected rather than fixed so tests and
//! deployments can point the store anywhere.

use std::path::{Path, PathBuf};

/// Environment variable the server reads the data file path from
pub const DATA_FILE_ENV: &str = "CASEBOOK_DATA_FILE";

/// Default location of the article data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/articles.json";

/// Configuration for an [`ArticleStore`](crate::store::ArticleStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON file holding the full collection
    pub path: PathBuf,
}

impl StoreConfig {
    /// Create a configuration for the given data file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory that must exist before the data file can be written
    pub fn data_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

//! JSON file store for the article collection
//!
//! The whole collection lives in one JSON array. Every operation loads it
//! fresh from disk; every append rewrites the full file. There is no
//! cross-process locking: two writers racing on the same file lose one
//! writer's append.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::article::Article;
use crate::config::StoreConfig;
use crate::error::{CaseError, Result};

/// Article collection backed by a single JSON file
#[derive(Debug, Clone)]
pub struct ArticleStore {
    config: StoreConfig,
}

impl ArticleStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store backed by the given file
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig::new(path.as_ref()))
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Load the full collection.
    ///
    /// A missing file is an empty collection. A file that exists but does
    /// not hold a JSON array of articles is reported as corrupt, never
    /// treated as empty.
    pub fn load(&self) -> Result<Vec<Article>> {
        let path = self.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(CaseError::io(path, e)),
        };

        let articles: Vec<Article> =
            serde_json::from_slice(&bytes).map_err(|e| CaseError::CorruptData {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!("Loaded {} articles from {}", articles.len(), path.display());
        Ok(articles)
    }

    /// Replace the stored collection with `articles`.
    ///
    /// Writes to a temporary file beside the target and renames it into
    /// place, so readers see either the old or the new collection.
    pub fn save(&self, articles: &[Article]) -> Result<()> {
        let path = self.path();
        let dir = match self.config.data_dir() {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(|e| CaseError::io(dir, e))?;
                dir
            }
            None => Path::new("."),
        };

        let json = serde_json::to_vec_pretty(articles)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CaseError::io(dir, e))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| CaseError::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| CaseError::io(path, e.error))?;

        debug!("Saved {} articles to {}", articles.len(), path.display());
        Ok(())
    }

    /// Append one article and persist the collection.
    ///
    /// Returns the new article's identifier (its position).
    pub fn append(&self, article: Article) -> Result<usize> {
        let mut articles = self.load()?;
        articles.push(article);
        self.save(&articles)?;
        Ok(articles.len() - 1)
    }

    /// Look up one article by identifier
    pub fn get(&self, id: usize) -> Result<Option<Article>> {
        let mut articles = self.load()?;
        if id < articles.len() {
            Ok(Some(articles.swap_remove(id)))
        } else {
            Ok(None)
        }
    }
}

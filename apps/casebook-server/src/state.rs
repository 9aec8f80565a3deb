//! Application state for the casebook server

use std::sync::Arc;

use casebook_core::{Article, ArticleStore};
use tokio::sync::Mutex;

use crate::error::ServerError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: ArticleStore,
    /// Held across load+append+save so submissions to this process do not
    /// overwrite each other. Other processes sharing the file still race.
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the full collection
    pub async fn articles(&self) -> Result<Vec<Article>, ServerError> {
        let store = self.store.clone();
        Ok(tokio::task::spawn_blocking(move || store.load()).await??)
    }

    /// Look up one article by position
    pub async fn article(&self, id: usize) -> Result<Option<Article>, ServerError> {
        let store = self.store.clone();
        Ok(tokio::task::spawn_blocking(move || store.get(id)).await??)
    }

    /// Append an article, returning its identifier.
    ///
    /// The lock guard moves into the blocking task so the write stays
    /// serialized even if the request future is dropped mid-append.
    pub async fn append(&self, article: Article) -> Result<usize, ServerError> {
        let guard = self.write_lock.clone().lock_owned().await;
        let store = self.store.clone();
        Ok(tokio::task::spawn_blocking(move || {
            let _guard = guard;
            store.append(article)
        })
        .await??)
    }
}

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    shop::Shop,
    storage::StateRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<Mutex<Shop>>,
    pub repo: Arc<dyn StateRepository>,
    pub base_path: String,
}

impl AppState {
    pub fn new(shop: Shop, repo: Arc<dyn StateRepository>, base_path: impl Into<String>) -> Self {
        Self {
            shop: Arc::new(Mutex::new(shop)),
            repo,
            base_path: base_path.into(),
        }
    }

    /// Prefixes `path` with the configured base path.
    pub fn link(&self, path: &str) -> String {
        if self.base_path == "/" {
            path.to_string()
        } else {
            format!("{}{}", self.base_path, path)
        }
    }

    /// Snapshots the shop under the lock, then writes it on the blocking pool.
    pub async fn checkpoint(&self) -> AppResult<()> {
        let snapshot = self.shop.lock().await.clone();
        let repo = Arc::clone(&self.repo);
        tokio::task::spawn_blocking(move || snapshot.checkpoint(repo.as_ref()))
            .await
            .map_err(|err| AppError::Internal(anyhow::Error::new(err)))??;
        Ok(())
    }
}

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use folio_models::post::PostMeta;
use folio_persistence_contracts::post::PostRepository;
use tracing::debug;

/// Reads post metadata from the JSON cache written by the site build
/// (an array of post objects).
#[derive(Debug, Clone)]
pub struct FsPostRepository {
    path: Arc<PathBuf>,
}

impl FsPostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }
}

impl PostRepository for FsPostRepository {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self) -> anyhow::Result<Vec<PostMeta>> {
        let content = tokio::fs::read(&*self.path).await.with_context(|| {
            format!("Failed to read post metadata at {}", self.path.display())
        })?;

        let posts = serde_json::from_slice::<Vec<PostMeta>>(&content).with_context(|| {
            format!("Failed to parse post metadata at {}", self.path.display())
        })?;

        debug!(count = posts.len(), "loaded post metadata");
        Ok(posts)
    }
}

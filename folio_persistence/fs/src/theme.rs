use std::{io, path::PathBuf, sync::Arc};

use anyhow::Context;
use folio_models::theme::Theme;
use folio_persistence_contracts::theme::ThemeRepository;
use serde::{Deserialize, Serialize};

/// Stores the theme preference as `{"theme": "dark"}`.
#[derive(Debug, Clone)]
pub struct FsThemeRepository {
    path: Arc<PathBuf>,
}

#[derive(Serialize, Deserialize)]
struct StoredTheme {
    theme: Theme,
}

impl FsThemeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }
}

impl ThemeRepository for FsThemeRepository {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self) -> anyhow::Result<Option<Theme>> {
        let content = match tokio::fs::read(&*self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read theme preference at {}", self.path.display())
                })
            }
        };

        let stored = serde_json::from_slice::<StoredTheme>(&content).with_context(|| {
            format!("Failed to parse theme preference at {}", self.path.display())
        })?;

        Ok(Some(stored.theme))
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn set(&self, theme: Theme) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_json::to_vec(&StoredTheme { theme })?;
        tokio::fs::write(&*self.path, content).await.with_context(|| {
            format!("Failed to write theme preference to {}", self.path.display())
        })
    }
}

use std::sync::Arc;

use folio_core_theme_contracts::ThemeFeatureService;
use folio_models::theme::Theme;
use folio_persistence_contracts::theme::ThemeRepository;
use folio_shared_contracts::color_scheme::ColorSchemeService;
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ThemeFeatureServiceImpl<ThemeRepo, ColorScheme> {
    theme_repo: ThemeRepo,
    color_scheme: ColorScheme,
    state: Arc<ThemeFeatureState>,
}

#[derive(Debug)]
struct ThemeFeatureState {
    sender: watch::Sender<Theme>,
    /// Held across publish and persist so writes reach storage in publish
    /// order.
    write_lock: Mutex<()>,
}

impl<ThemeRepo, ColorScheme> ThemeFeatureServiceImpl<ThemeRepo, ColorScheme> {
    pub fn new(theme_repo: ThemeRepo, color_scheme: ColorScheme) -> Self {
        Self {
            theme_repo,
            color_scheme,
            state: Arc::new(ThemeFeatureState {
                sender: watch::channel(Theme::default()).0,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Replaces the active theme, waking subscribers only on an actual change.
    fn publish(&self, theme: Theme) -> bool {
        self.state.sender.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        })
    }
}

impl<ThemeRepo, ColorScheme> ThemeFeatureServiceImpl<ThemeRepo, ColorScheme>
where
    ThemeRepo: ThemeRepository,
{
    /// Callers must hold `write_lock`.
    async fn publish_and_persist(&self, theme: Theme) -> anyhow::Result<()> {
        if self.publish(theme) {
            debug!(%theme, "theme changed");
        }
        self.theme_repo.set(theme).await
    }
}

impl<ThemeRepo, ColorScheme> ThemeFeatureService for ThemeFeatureServiceImpl<ThemeRepo, ColorScheme>
where
    ThemeRepo: ThemeRepository,
    ColorScheme: ColorSchemeService,
{
    #[tracing::instrument(skip(self))]
    async fn init(&self) -> Theme {
        let persisted = match self.theme_repo.get().await {
            Ok(theme) => theme,
            Err(err) => {
                warn!("Failed to load theme preference, using system preference: {err:#}");
                None
            }
        };

        let theme = persisted
            .or_else(|| self.color_scheme.preferred_theme())
            .unwrap_or_default();
        debug!(%theme, persisted = persisted.is_some(), "theme initialized");

        self.publish(theme);
        theme
    }

    fn get(&self) -> Theme {
        *self.state.sender.borrow()
    }

    #[tracing::instrument(skip(self))]
    async fn set(&self, theme: Theme) -> anyhow::Result<()> {
        let _guard = self.state.write_lock.lock().await;
        self.publish_and_persist(theme).await
    }

    #[tracing::instrument(skip(self))]
    async fn toggle(&self) -> anyhow::Result<Theme> {
        let _guard = self.state.write_lock.lock().await;
        let theme = self.get().toggled();
        self.publish_and_persist(theme).await?;
        Ok(theme)
    }

    fn subscribe(&self) -> watch::Receiver<Theme> {
        self.state.sender.subscribe()
    }
}

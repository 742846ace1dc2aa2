use std::future::Future;

use folio_models::theme::Theme;
use tokio::sync::watch;

/// Process-wide store of the active colour theme.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeFeatureService: Send + Sync + 'static {
    /// Resolves the initial theme from the persisted preference, falling back
    /// to the system preference and finally to [`Theme::Light`]. Never fails.
    fn init(&self) -> impl Future<Output = Theme> + Send;

    /// Returns the active theme.
    fn get(&self) -> Theme;

    /// Activates and persists the given theme.
    ///
    /// Subscribers are notified even if persisting fails.
    fn set(&self, theme: Theme) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Switches between light and dark and returns the new theme.
    fn toggle(&self) -> impl Future<Output = anyhow::Result<Theme>> + Send;

    /// Returns a receiver that observes every change of the active theme.
    fn subscribe(&self) -> watch::Receiver<Theme>;
}

#[cfg(feature = "mock")]
impl MockThemeFeatureService {
    pub fn with_init(mut self, result: Theme) -> Self {
        self.expect_init()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get(mut self, result: Theme) -> Self {
        self.expect_get().once().return_const(result);
        self
    }

    pub fn with_set(mut self, theme: Theme) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(theme))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_toggle(mut self, result: Theme) -> Self {
        self.expect_toggle()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }
}

use std::future::Future;

use folio_models::theme::Theme;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeRepository: Send + Sync + 'static {
    /// Returns the persisted theme preference, if the user ever chose one.
    fn get(&self) -> impl Future<Output = anyhow::Result<Option<Theme>>> + Send;

    /// Persists the theme preference.
    fn set(&self, theme: Theme) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockThemeRepository {
    pub fn with_get(mut self, result: Option<Theme>) -> Self {
        self.expect_get()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_error(mut self) -> Self {
        self.expect_get().once().return_once(|| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "theme storage unavailable"
            ))))
        });
        self
    }

    pub fn with_set(mut self, theme: Theme, ok: bool) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(theme))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("theme storage unavailable"))
                }))
            });
        self
    }
}

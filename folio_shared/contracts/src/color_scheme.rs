use folio_models::theme::Theme;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ColorSchemeService: Send + Sync + 'static {
    /// Returns the colour scheme preferred by the environment, or `None` if
    /// it cannot be determined.
    fn preferred_theme(&self) -> Option<Theme>;
}

#[cfg(feature = "mock")]
impl MockColorSchemeService {
    pub fn with_preferred_theme(mut self, result: Option<Theme>) -> Self {
        self.expect_preferred_theme().once().return_const(result);
        self
    }
}

use folio_models::pagination::{
    PageIndex, PageRangeEntry, PaginationAction, PaginationControls,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PaginationService: Send + Sync + 'static {
    /// Returns the page numbers and ellipsis markers to display, in left to
    /// right order.
    ///
    /// Never fails: out of range input is clamped.
    fn page_range(&self, current_page: i64, total_pages: i64) -> Vec<PageRangeEntry>;

    /// Builds the full set of controls for a pagination widget, including
    /// the previous/next controls.
    fn controls(&self, current_page: i64, total_pages: i64) -> PaginationControls;

    /// Resolves a navigation request to the page that should be shown next.
    ///
    /// Returns `None` if the action does not change the page, e.g. when the
    /// current page is clicked or `Next` is requested on the last page.
    fn navigate(
        &self,
        current_page: i64,
        total_pages: i64,
        action: PaginationAction,
    ) -> Option<PageIndex>;
}

#[cfg(feature = "mock")]
impl MockPaginationService {
    pub fn with_controls(
        mut self,
        current_page: i64,
        total_pages: i64,
        result: PaginationControls,
    ) -> Self {
        self.expect_controls()
            .once()
            .with(
                mockall::predicate::eq(current_page),
                mockall::predicate::eq(total_pages),
            )
            .return_once(|_, _| result);
        self
    }

    pub fn with_navigate(
        mut self,
        current_page: i64,
        total_pages: i64,
        action: PaginationAction,
        result: Option<PageIndex>,
    ) -> Self {
        self.expect_navigate()
            .once()
            .with(
                mockall::predicate::eq(current_page),
                mockall::predicate::eq(total_pages),
                mockall::predicate::eq(action),
            )
            .return_once(move |_, _, _| result);
        self
    }
}

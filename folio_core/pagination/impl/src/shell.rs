use std::fmt;

use folio_core_pagination_contracts::PaginationService;
use folio_models::pagination::{PageIndex, PagePosition, PaginationAction, PaginationControls};
use tracing::debug;

/// A pagination widget: owns the current position and reports every
/// effective navigation to its container through `on_page_change`.
pub struct PaginationShell<Pagination, OnPageChange> {
    pagination: Pagination,
    position: PagePosition,
    on_page_change: OnPageChange,
}

impl<Pagination, OnPageChange> PaginationShell<Pagination, OnPageChange>
where
    Pagination: PaginationService,
    OnPageChange: FnMut(PageIndex),
{
    pub fn new(
        pagination: Pagination,
        current_page: i64,
        total_pages: i64,
        on_page_change: OnPageChange,
    ) -> Self {
        Self {
            pagination,
            position: PagePosition::new(current_page, total_pages),
            on_page_change,
        }
    }

    pub fn position(&self) -> PagePosition {
        self.position
    }

    pub fn controls(&self) -> PaginationControls {
        self.pagination
            .controls(self.position.current().to_raw(), self.position.total().to_raw())
    }

    /// Handles a click on one of the widget's controls.
    ///
    /// Invokes `on_page_change` exactly once if the page changes and not at
    /// all otherwise. Returns whether the page changed.
    pub fn click(&mut self, action: PaginationAction) -> bool {
        let Some(page) = self.pagination.navigate(
            self.position.current().to_raw(),
            self.position.total().to_raw(),
            action,
        ) else {
            return false;
        };

        debug!(from = %self.position.current(), to = %page, "page change");
        self.position = PagePosition::new(page.to_raw(), self.position.total().to_raw());
        (self.on_page_change)(self.position.current());
        true
    }

    /// Updates the page count, e.g. after the list was filtered. The current
    /// page is clamped into the new range without notifying the container.
    pub fn set_total_pages(&mut self, total_pages: i64) {
        self.position = PagePosition::new(self.position.current().to_raw(), total_pages);
    }
}

impl<Pagination, OnPageChange> fmt::Debug for PaginationShell<Pagination, OnPageChange>
where
    Pagination: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationShell")
            .field("pagination", &self.pagination)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

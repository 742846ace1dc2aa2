use folio_core_pagination_contracts::PaginationService;
use folio_models::pagination::{
    NavControl, PageControl, PageIndex, PagePosition, PageRangeEntry, PaginationAction,
    PaginationControls, SlotBudget,
};
use tracing::trace;

pub mod page_range;
pub mod shell;

#[derive(Debug, Clone, Default)]
pub struct PaginationServiceImpl {
    config: PaginationServiceConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationServiceConfig {
    pub max_slots: SlotBudget,
}

impl PaginationServiceImpl {
    pub fn new(config: PaginationServiceConfig) -> Self {
        Self { config }
    }
}

impl PaginationService for PaginationServiceImpl {
    fn page_range(&self, current_page: i64, total_pages: i64) -> Vec<PageRangeEntry> {
        page_range::page_range(
            PagePosition::new(current_page, total_pages),
            self.config.max_slots,
        )
    }

    fn controls(&self, current_page: i64, total_pages: i64) -> PaginationControls {
        let position = PagePosition::new(current_page, total_pages);
        let pages = page_range::page_range(position, self.config.max_slots)
            .into_iter()
            .map(|entry| match entry.page() {
                Some(page) => PageControl::Page {
                    page,
                    current: page == position.current(),
                },
                None => PageControl::Ellipsis,
            })
            .collect();

        PaginationControls {
            position,
            previous: NavControl {
                target: position.previous(),
            },
            next: NavControl {
                target: position.next(),
            },
            pages,
        }
    }

    fn navigate(
        &self,
        current_page: i64,
        total_pages: i64,
        action: PaginationAction,
    ) -> Option<PageIndex> {
        let position = PagePosition::new(current_page, total_pages);
        let target = match action {
            PaginationAction::Previous => position.previous(),
            PaginationAction::Next => position.next(),
            PaginationAction::Page(page) => {
                Some(position.clamp(page)).filter(|&page| page != position.current())
            }
        };
        trace!(?position, ?action, ?target, "navigate");
        target
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> PaginationServiceImpl {
        PaginationServiceImpl::new(PaginationServiceConfig {
            max_slots: SlotBudget::new(7),
        })
    }

    #[test]
    fn controls_middle() {
        // Act
        let result = sut().controls(10, 20);

        // Assert
        assert_eq!(
            result,
            PaginationControls {
                position: PagePosition::new(10, 20),
                previous: NavControl {
                    target: Some(PageIndex::new(9)),
                },
                next: NavControl {
                    target: Some(PageIndex::new(11)),
                },
                pages: vec![
                    page(1, false),
                    PageControl::Ellipsis,
                    page(9, false),
                    page(10, true),
                    page(11, false),
                    PageControl::Ellipsis,
                    page(20, false),
                ],
            }
        );
    }

    #[test]
    fn controls_disabled_at_boundaries() {
        let first = sut().controls(1, 3);
        assert!(!first.previous.is_enabled());
        assert_eq!(first.next.target, Some(PageIndex::new(2)));

        let last = sut().controls(3, 3);
        assert_eq!(last.previous.target, Some(PageIndex::new(2)));
        assert!(!last.next.is_enabled());

        let single = sut().controls(1, 1);
        assert!(!single.previous.is_enabled());
        assert!(!single.next.is_enabled());
        assert_eq!(single.pages, [page(1, true)]);
    }

    #[test]
    fn controls_clamp_input() {
        assert_eq!(sut().controls(-4, 20), sut().controls(1, 20));
        assert_eq!(sut().controls(99, 20), sut().controls(20, 20));
        assert_eq!(sut().controls(5, 0), sut().controls(1, 1));
    }

    #[test]
    fn exactly_one_current_page() {
        for total in 1..=30 {
            for current in 1..=total {
                let controls = sut().controls(current, total);
                let current_pages = controls
                    .pages
                    .iter()
                    .filter(|control| matches!(control, PageControl::Page { current: true, .. }))
                    .collect::<Vec<_>>();
                assert_eq!(current_pages, [&page(current as u64, true)]);
            }
        }
    }

    #[test]
    fn page_range_uses_configured_budget() {
        let sut = PaginationServiceImpl::new(PaginationServiceConfig {
            max_slots: SlotBudget::new(9),
        });
        assert_eq!(sut.page_range(10, 20).len(), 9);
        assert_eq!(
            sut.page_range(10, 20),
            page_range::compute(10, 20, 9)
        );
    }

    #[test]
    fn navigate() {
        for ((current, total, action), expected) in [
            ((5, 10, PaginationAction::Previous), Some(4)),
            ((5, 10, PaginationAction::Next), Some(6)),
            ((1, 10, PaginationAction::Previous), None),
            ((10, 10, PaginationAction::Next), None),
            ((1, 1, PaginationAction::Next), None),
            ((5, 10, PaginationAction::Page(PageIndex::new(5))), None),
            ((5, 10, PaginationAction::Page(PageIndex::new(8))), Some(8)),
            ((5, 10, PaginationAction::Page(PageIndex::new(80))), Some(10)),
            ((10, 10, PaginationAction::Page(PageIndex::new(80))), None),
            ((-3, 10, PaginationAction::Previous), None),
            ((42, 10, PaginationAction::Next), None),
        ] {
            assert_eq!(
                sut().navigate(current, total, action),
                expected.map(PageIndex::new),
                "navigate({current}, {total}, {action:?})"
            );
        }
    }

    fn page(page: u64, current: bool) -> PageControl {
        PageControl::Page {
            page: PageIndex::new(page),
            current,
        }
    }
}

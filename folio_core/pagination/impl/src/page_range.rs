use folio_models::pagination::{PageIndex, PagePosition, PageRangeEntry, SlotBudget};

/// Computes the page numbers and ellipsis markers a pagination control
/// displays, from untrusted input.
///
/// `total_pages` below `1` is treated as `1`, `current_page` is clamped into
/// `[1, total_pages]` and `max_slots` into `[SlotBudget::MIN, SlotBudget::MAX]`.
pub fn compute(current_page: i64, total_pages: i64, max_slots: i64) -> Vec<PageRangeEntry> {
    page_range(
        PagePosition::new(current_page, total_pages),
        SlotBudget::from_raw(max_slots),
    )
}

/// Computes the page range for an already normalized position.
///
/// The result always starts with the first page, ends with the last page,
/// contains the current page and has at most `budget` entries. An ellipsis
/// always stands for at least two hidden pages.
pub fn page_range(position: PagePosition, budget: SlotBudget) -> Vec<PageRangeEntry> {
    let slots = budget.into_inner();
    let current = position.current().into_inner();
    let total = position.total().into_inner();
    let half = (slots - 3) / 2;

    let mut entries = Vec::new();
    match regime(position, budget) {
        Regime::All => {
            entries.extend(pages(1..=total));
            return entries;
        }
        Regime::Start => {
            // total exceeds the budget, so this run never reaches the last page
            entries.extend(pages(1..=slots - 2));
            entries.push(PageRangeEntry::Ellipsis);
        }
        Regime::End => {
            entries.push(PageIndex::first().into());
            entries.push(PageRangeEntry::Ellipsis);
            entries.extend(pages(total - (slots - 3)..total));
        }
        Regime::Middle => {
            // first, last and both ellipses leave `slots - 4` pages for the window
            let radius = half - 1;
            entries.push(PageIndex::first().into());
            entries.push(PageRangeEntry::Ellipsis);
            entries.extend(pages(current - radius..=current + radius));
            entries.push(PageRangeEntry::Ellipsis);
        }
    }
    entries.push(position.total().into());

    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    /// Every page fits into the budget.
    All,
    Start,
    Middle,
    End,
}

fn regime(position: PagePosition, budget: SlotBudget) -> Regime {
    let slots = budget.into_inner();
    let current = position.current().into_inner();
    let total = position.total().into_inner();

    if total <= slots {
        return Regime::All;
    }

    let half = (slots - 3) / 2;
    if current <= half + 2 {
        Regime::Start
    } else if current >= total - half - 1 {
        Regime::End
    } else {
        Regime::Middle
    }
}

fn pages(range: impl Iterator<Item = u64>) -> impl Iterator<Item = PageRangeEntry> {
    range.map(|page| PageIndex::new(page).into())
}

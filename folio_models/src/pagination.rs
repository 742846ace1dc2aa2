use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 1-based page number.
///
/// Constructing a page index from `0` yields the first page, so a
/// `PageIndex` is always a valid page.
#[nutype(
    sanitize(with = |n: u64| n.max(1)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PageIndex(u64);

impl PageIndex {
    pub fn first() -> Self {
        Self::new(1)
    }

    /// Converts an untrusted signed page number, lifting non-positive values
    /// to the first page.
    pub fn from_raw(raw: i64) -> Self {
        Self::new(non_negative(raw))
    }

    /// Inverse of [`Self::from_raw`].
    pub fn to_raw(self) -> i64 {
        i64::try_from(self.into_inner()).unwrap_or(i64::MAX)
    }
}

/// The maximum number of entries (page numbers and ellipses) a pagination
/// control may display at once.
#[nutype(
    sanitize(with = |n: u64| n.clamp(SlotBudget::MIN, SlotBudget::MAX)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Default,
        Serialize,
        Deserialize,
    ),
    default = 7
)]
pub struct SlotBudget(u64);

impl SlotBudget {
    /// First page, last page and the two ellipses need four slots, the
    /// current page the fifth.
    pub const MIN: u64 = 5;
    pub const MAX: u64 = 99;

    pub fn from_raw(raw: i64) -> Self {
        Self::new(non_negative(raw))
    }
}

/// Normalized position within a paginated list.
///
/// Invariant: `1 <= current <= total`, upheld by every constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PagePosition {
    current: PageIndex,
    total: PageIndex,
}

impl PagePosition {
    /// Normalizes untrusted input: a non-positive total becomes `1`, the
    /// current page is clamped into `[1, total]`.
    pub fn new(current_page: i64, total_pages: i64) -> Self {
        Self::from_pages(PageIndex::from_raw(current_page), PageIndex::from_raw(total_pages))
    }

    /// Clamps `current` to `total`.
    pub fn from_pages(current: PageIndex, total: PageIndex) -> Self {
        Self {
            current: current.min(total),
            total,
        }
    }

    pub fn current(&self) -> PageIndex {
        self.current
    }

    pub fn total(&self) -> PageIndex {
        self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > PageIndex::first()
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<PageIndex> {
        self.has_previous()
            .then(|| PageIndex::new(self.current.into_inner() - 1))
    }

    pub fn next(&self) -> Option<PageIndex> {
        self.has_next()
            .then(|| PageIndex::new(self.current.into_inner() + 1))
    }

    /// Clamps an arbitrary page into this position's range.
    pub fn clamp(&self, page: PageIndex) -> PageIndex {
        page.min(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageRangeEntry {
    Page(PageIndex),
    Ellipsis,
}

impl PageRangeEntry {
    pub fn page(self) -> Option<PageIndex> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

impl From<PageIndex> for PageRangeEntry {
    fn from(value: PageIndex) -> Self {
        Self::Page(value)
    }
}

/// Everything a renderer needs to draw a pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub position: PagePosition,
    pub previous: NavControl,
    pub next: NavControl,
    pub pages: Vec<PageControl>,
}

/// A previous/next control. A missing target means the control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub target: Option<PageIndex>,
}

impl NavControl {
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageControl {
    Page { page: PageIndex, current: bool },
    Ellipsis,
}

/// A user-initiated navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Previous,
    Next,
    Page(PageIndex),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageNumberParseError {
    #[error("Page number is empty.")]
    Empty,
    #[error("Invalid page number: {0:?}")]
    Invalid(String),
}

/// Parses a page number from an untrusted string such as a query parameter.
///
/// The returned number is not range checked; callers clamp it with
/// [`PagePosition::new`].
pub fn parse_page_number(raw: &str) -> Result<i64, PageNumberParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PageNumberParseError::Empty);
    }
    raw.parse()
        .map_err(|_| PageNumberParseError::Invalid(raw.into()))
}

fn non_negative(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0)
}

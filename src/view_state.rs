//! User-facing browse state: filter, sort order, page size, current page.
//!
//! `ViewState` is the single input (besides the record set itself) to the
//! list pipeline. It is only ever mutated through the transition methods
//! below, which encode the page-reset rules explicitly instead of leaving
//! them to caller discipline.

/// Page sizes offered by the page-size control.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 15, 20];

/// Default page size when no preference has been persisted.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which subset of the record set is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// No filtering; the full record set passes through.
    All,
    /// Countries whose area is strictly below the named reference country's.
    SmallerThan(String),
    /// Countries whose region matches exactly.
    InRegion(String),
}

impl FilterKind {
    /// Reference country used by the relative-size filter option.
    pub fn smaller_than_lithuania() -> Self {
        FilterKind::SmallerThan("Lithuania".to_string())
    }

    /// Region used by the region filter option.
    pub fn oceania() -> Self {
        FilterKind::InRegion("Oceania".to_string())
    }

    /// Short label for the controls line.
    pub fn label(&self) -> String {
        match self {
            FilterKind::All => "all".to_string(),
            FilterKind::SmallerThan(name) => format!("smaller than {}", name),
            FilterKind::InRegion(region) => region.to_lowercase(),
        }
    }
}

/// Sort direction for the name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current browse selections. Created once at startup and mutated only by
/// the transition methods, each of which owns its page-reset rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filter: FilterKind,
    pub sort_order: SortOrder,
    pub page_size: usize,
    /// 1-based page number.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterKind::All,
            sort_order: SortOrder::Ascending,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl ViewState {
    /// Create the initial state, honoring a restored page-size preference.
    pub fn with_page_size(page_size: Option<usize>) -> Self {
        Self {
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Change the page size and jump back to the first page.
    pub fn set_page_size(&mut self, n: usize) {
        debug_assert!(n > 0, "page size must be positive");
        self.page_size = n;
        self.current_page = 1;
    }

    /// Jump to a page. Callers keep `p` within `[1, total_pages]`; the
    /// pipeline tolerates stale values by returning an empty slice.
    pub fn set_page(&mut self, p: usize) {
        debug_assert!(p >= 1, "pages are 1-based");
        self.current_page = p;
    }

    /// Flip the sort direction without touching the current page.
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Change the filter and jump back to the first page.
    pub fn set_filter(&mut self, kind: FilterKind) {
        self.filter = kind;
        self.current_page = 1;
    }

    /// Pull a stale `current_page` back into range after the list shrank.
    /// An empty list clamps to page 1.
    pub fn clamp_page(&mut self, total_pages: usize) {
        let last = total_pages.max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}

//! Application state container.
//!
//! `App` owns the record set, the browse state, and the preference port,
//! and exposes one method per user action. The rendering layer reads from
//! it and never mutates it directly.

use crate::models::Country;
use crate::pipeline::{self, PageView, PipelineError};
use crate::traits::PreferenceStore;
use crate::view_state::{FilterKind, ViewState, PAGE_SIZE_OPTIONS};

pub struct App {
    /// Raw record set, written once when the fetch completes.
    pub countries: Vec<Country>,
    pub view: ViewState,
    prefs: Box<dyn PreferenceStore>,
    /// True until the one-shot fetch reports back.
    pub loading: bool,
    /// Set when the fetch failed; the status line surfaces it.
    pub fetch_failed: bool,
    /// Highlighted row within the current page.
    pub selected_row: usize,
    pub should_quit: bool,
}

impl App {
    /// Create the application state, restoring the page-size preference.
    pub fn new(prefs: Box<dyn PreferenceStore>) -> Self {
        let view = ViewState::with_page_size(prefs.load_page_size());
        Self {
            countries: Vec::new(),
            view,
            prefs,
            loading: true,
            fetch_failed: false,
            selected_row: 0,
            should_quit: false,
        }
    }

    /// Store the one-shot fetch result.
    pub fn countries_loaded(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.loading = false;
        self.fetch_failed = false;
        self.selected_row = 0;
        self.view.clamp_page(self.total_pages());
    }

    /// Record that the fetch failed; the record set stays empty.
    pub fn mark_fetch_failed(&mut self) {
        self.loading = false;
        self.fetch_failed = true;
    }

    /// Run the pipeline for the current view.
    ///
    /// The only error is a missing reference record for the relative-size
    /// filter; the UI shows it as a status message over an empty table.
    pub fn page(&self) -> Result<PageView, PipelineError> {
        pipeline::run(&self.countries, &self.view)
    }

    /// Page count for the current filter and page size. A missing
    /// reference record browses like an empty list.
    pub fn total_pages(&self) -> usize {
        self.page().map(|p| p.total_pages).unwrap_or(0)
    }

    /// Change the page size: transition plus the write-through to the
    /// preference store.
    pub fn set_page_size(&mut self, n: usize) {
        self.view.set_page_size(n);
        self.selected_row = 0;
        self.prefs.save_page_size(n);
    }

    /// Advance to the next offered page size, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let next = match PAGE_SIZE_OPTIONS
            .iter()
            .position(|&n| n == self.view.page_size)
        {
            Some(i) => PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()],
            None => PAGE_SIZE_OPTIONS[0],
        };
        self.set_page_size(next);
    }

    pub fn toggle_sort(&mut self) {
        self.view.toggle_sort();
    }

    pub fn set_filter(&mut self, kind: FilterKind) {
        self.view.set_filter(kind);
        self.selected_row = 0;
    }

    /// Advance to the next filter option, wrapping around.
    pub fn cycle_filter(&mut self) {
        let next = match self.view.filter {
            FilterKind::All => FilterKind::smaller_than_lithuania(),
            FilterKind::SmallerThan(_) => FilterKind::oceania(),
            FilterKind::InRegion(_) => FilterKind::All,
        };
        self.set_filter(next);
    }

    /// Move to the next page if one exists; out-of-range moves are
    /// ignored rather than clamped downstream.
    pub fn next_page(&mut self) {
        if self.view.current_page < self.total_pages() {
            self.view.set_page(self.view.current_page + 1);
            self.selected_row = 0;
        }
    }

    /// Move to the previous page if there is one.
    pub fn prev_page(&mut self) {
        if self.view.current_page > 1 {
            self.view.set_page(self.view.current_page - 1);
            self.selected_row = 0;
        }
    }

    /// Move the row highlight down within the current page.
    pub fn select_next(&mut self) {
        let rows = self.page().map(|p| p.rows.len()).unwrap_or(0);
        if rows > 0 && self.selected_row + 1 < rows {
            self.selected_row += 1;
        }
    }

    /// Move the row highlight up within the current page.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Reset for a refetch: the list empties until the new result lands.
    pub fn begin_refetch(&mut self) {
        self.countries.clear();
        self.selected_row = 0;
        self.loading = true;
        self.fetch_failed = false;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

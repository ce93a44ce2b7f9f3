//! The filter -> sort -> paginate chain over the in-memory record set.
//!
//! Every stage is a pure function: inputs are borrowed, outputs are fresh
//! vectors, and nothing here touches application state. The composed
//! [`run`] is what the UI layer calls on every redraw.

use thiserror::Error;

use crate::models::Country;
use crate::view_state::{FilterKind, SortOrder, ViewState};

/// Errors from the filter stage.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// The relative-size filter's reference country is not in the record
    /// set, so there is nothing to compare against.
    #[error("reference country '{name}' not found in the record set")]
    ReferenceNotFound { name: String },
}

/// One page of pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<Country>,
    pub total_pages: usize,
}

impl PageView {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_pages: 0,
        }
    }
}

/// Filter stage. Order of surviving records matches the input.
///
/// `SmallerThan` requires the reference record to exist; a missing
/// reference is an explicit error, never a silent empty or unfiltered
/// list. Records without an area cannot participate in the size
/// comparison and are excluded. A reference that itself has no area
/// yields an empty result, since nothing compares strictly below an
/// undefined area.
pub fn apply_filter(
    records: &[Country],
    filter: &FilterKind,
) -> Result<Vec<Country>, PipelineError> {
    match filter {
        FilterKind::All => Ok(records.to_vec()),
        FilterKind::SmallerThan(name) => {
            let reference = records
                .iter()
                .find(|c| c.name == *name)
                .ok_or_else(|| PipelineError::ReferenceNotFound { name: name.clone() })?;
            let Some(reference_area) = reference.area else {
                return Ok(Vec::new());
            };
            Ok(records
                .iter()
                .filter(|c| matches!(c.area, Some(area) if area < reference_area))
                .cloned()
                .collect())
        }
        FilterKind::InRegion(region) => Ok(records
            .iter()
            .filter(|c| c.region == *region)
            .cloned()
            .collect()),
    }
}

/// Sort stage: stable, case-insensitive sort on the name column.
///
/// Descending reverses the comparison rather than the output, so records
/// with equal case-folded names keep their relative order either way.
pub fn sort_by_name(records: &[Country], order: SortOrder) -> Vec<Country> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    sorted
}

/// Number of pages the list spans at the given page size. Zero for an
/// empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be positive");
    len.div_ceil(page_size)
}

/// Paginate stage. An out-of-range `current_page` (stale state after a
/// filter shrank the list) returns an empty slice, never an error.
pub fn paginate(records: &[Country], page_size: usize, current_page: usize) -> PageView {
    let pages = total_pages(records.len(), page_size);
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    let rows = if start >= records.len() {
        Vec::new()
    } else {
        records[start..end].to_vec()
    };
    PageView {
        rows,
        total_pages: pages,
    }
}

/// The full chain for the current view state.
pub fn run(records: &[Country], view: &ViewState) -> Result<PageView, PipelineError> {
    let filtered = apply_filter(records, &view.filter)?;
    let sorted = sort_by_name(&filtered, view.sort_order);
    Ok(paginate(&sorted, view.page_size, view.current_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baltics() -> Vec<Country> {
        vec![
            Country::new("Lithuania", "Europe", Some(65300.0)),
            Country::new("Latvia", "Europe", Some(64589.0)),
            Country::new("Estonia", "Europe", Some(45227.0)),
        ]
    }

    #[test]
    fn test_filter_all_is_identity() {
        let records = baltics();
        let filtered = apply_filter(&records, &FilterKind::All).unwrap();
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_smaller_than_reference() {
        let records = baltics();
        let filtered = apply_filter(&records, &FilterKind::smaller_than_lithuania()).unwrap();
        // Input order preserved, reference itself excluded
        assert_eq!(
            filtered.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Latvia", "Estonia"]
        );
    }

    #[test]
    fn test_filter_smaller_than_excludes_missing_area() {
        let mut records = baltics();
        records.push(Country::new("Atlantis", "Europe", None));
        let filtered = apply_filter(&records, &FilterKind::smaller_than_lithuania()).unwrap();
        assert!(filtered.iter().all(|c| c.name != "Atlantis"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_smaller_than_excludes_equal_area() {
        let records = vec![
            Country::new("Lithuania", "Europe", Some(65300.0)),
            Country::new("Twinland", "Europe", Some(65300.0)),
        ];
        let filtered = apply_filter(&records, &FilterKind::smaller_than_lithuania()).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_missing_reference_is_an_error() {
        let records = vec![Country::new("Fiji", "Oceania", Some(18272.0))];
        let err = apply_filter(&records, &FilterKind::smaller_than_lithuania()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::ReferenceNotFound {
                name: "Lithuania".to_string()
            }
        );
    }

    #[test]
    fn test_filter_reference_without_area_yields_empty() {
        let records = vec![
            Country::new("Lithuania", "Europe", None),
            Country::new("Latvia", "Europe", Some(64589.0)),
        ];
        let filtered = apply_filter(&records, &FilterKind::smaller_than_lithuania()).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_region_exact_match_preserves_order() {
        let records = vec![
            Country::new("Fiji", "Oceania", Some(18272.0)),
            Country::new("Latvia", "Europe", Some(64589.0)),
            Country::new("Tonga", "Oceania", Some(747.0)),
            Country::new("Samoa", "oceania", Some(2842.0)),
        ];
        let filtered = apply_filter(&records, &FilterKind::oceania()).unwrap();
        // Case-sensitive: lowercase "oceania" does not match
        assert_eq!(
            filtered.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Fiji", "Tonga"]
        );
    }

    #[test]
    fn test_sort_ascending_case_insensitive() {
        let records = vec![
            Country::new("latvia", "Europe", None),
            Country::new("Estonia", "Europe", None),
            Country::new("LITHUANIA", "Europe", None),
        ];
        let sorted = sort_by_name(&records, SortOrder::Ascending);
        assert_eq!(
            sorted.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Estonia", "latvia", "LITHUANIA"]
        );
    }

    #[test]
    fn test_sort_descending_reverses_ascending() {
        let records = baltics();
        let asc = sort_by_name(&records, SortOrder::Ascending);
        let mut desc = sort_by_name(&records, SortOrder::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let records = vec![
            Country::new("Samoa", "Oceania", Some(2842.0)),
            Country::new("samoa", "Oceania", Some(1.0)),
        ];
        let asc = sort_by_name(&records, SortOrder::Ascending);
        assert_eq!(asc[0].area, Some(2842.0));
        assert_eq!(asc[1].area, Some(1.0));

        // Reversed comparison, not reversed output: ties keep input order
        let desc = sort_by_name(&records, SortOrder::Descending);
        assert_eq!(desc[0].area, Some(2842.0));
        assert_eq!(desc[1].area, Some(1.0));
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let records = baltics();
        let _ = sort_by_name(&records, SortOrder::Ascending);
        assert_eq!(records, baltics());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 2), 2);
    }

    #[test]
    fn test_paginate_splits_pages() {
        let records = baltics();
        let page1 = paginate(&records, 2, 1);
        assert_eq!(page1.total_pages, 2);
        assert_eq!(page1.rows.len(), 2);
        let page2 = paginate(&records, 2, 2);
        assert_eq!(page2.rows.len(), 1);
        assert_eq!(page2.rows[0], records[2]);
    }

    #[test]
    fn test_paginate_out_of_range_returns_empty() {
        let records = baltics();
        let page = paginate(&records, 2, 5);
        assert_eq!(page.total_pages, 2);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(&[], 10, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_paginate_round_trip_reconstructs_list() {
        let records: Vec<Country> = (0..23)
            .map(|i| Country::new(format!("Country {i:02}"), "Test", Some(i as f64)))
            .collect();
        let page_size = 5;
        let pages = total_pages(records.len(), page_size);
        let mut reassembled = Vec::new();
        for p in 1..=pages {
            reassembled.extend(paginate(&records, page_size, p).rows);
        }
        assert_eq!(reassembled, records);
    }

    #[test]
    fn test_run_default_view() {
        let view = ViewState::default();
        let page = run(&baltics(), &view).unwrap();
        assert_eq!(
            page.rows.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Estonia", "Latvia", "Lithuania"]
        );
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_run_propagates_reference_error() {
        let view = ViewState {
            filter: FilterKind::smaller_than_lithuania(),
            ..ViewState::default()
        };
        assert!(run(&[], &view).is_err());
    }
}

//! The query pipeline: search, then filter, then sort, then group.
//!
//! Stage order is load-bearing. Search and filter run first so sorting and
//! grouping only ever see the visible record set; sort runs before group so
//! each bucket internally reflects the active sort. Reordering the stages
//! changes the displayed result and is a behavioral regression.

use serde::{Deserialize, Serialize};

use tabula_core::{DisplayRow, Field, FilterState, SaleRecord, SortSpec};

use crate::filter::filter_records;
use crate::group::group_and_flatten;
use crate::search::search_records;
use crate::sort::sort_records;

/// The full query input: one snapshot of the UI-owned state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Case-insensitive substring search term. Empty means no search.
    #[serde(default)]
    pub search_term: String,

    /// Per-field accepted values.
    #[serde(default)]
    pub filters: FilterState,

    /// Active single-column sort, if any.
    #[serde(default)]
    pub sort: Option<SortSpec>,

    /// Active single-field grouping, if any.
    #[serde(default)]
    pub group: Option<Field>,
}

impl QueryState {
    /// Whether this query would pass every record through untouched.
    pub fn is_noop(&self) -> bool {
        self.search_term.is_empty()
            && self.filters.is_unconstrained()
            && self.sort.is_none()
            && self.group.is_none()
    }
}

/// Run the pipeline over a record snapshot.
///
/// Pure and deterministic: no side effects, no caching across calls, and
/// the input slice is never mutated. Each call clones its own working set
/// and returns an independent display list.
pub fn process(records: &[SaleRecord], query: &QueryState) -> Vec<DisplayRow> {
    let rows = search_records(records.to_vec(), &query.search_term);
    let rows = filter_records(rows, &query.filters);
    let rows = match &query.sort {
        Some(spec) => sort_records(rows, spec),
        None => rows,
    };
    tracing::debug!(
        total = records.len(),
        visible = rows.len(),
        grouped = query.group.is_some(),
        "processed query"
    );
    group_and_flatten(rows, query.group)
}

//! UI state model for the sales table.
//!
//! This module owns every piece of mutable UI state the original table kept
//! process-wide: search term, filters, sort, grouping, active tab and theme.
//! All of it lives in [`TableState`] and is passed to the renderer
//! explicitly. Each mutation recomputes the display list through the query
//! pipeline on a fresh snapshot; nothing is memoized across calls.

use serde::{Deserialize, Serialize};

use tabula_core::{DataError, DisplayRow, Field, SaleRecord, SortSpec, ThemeMode};
use tabula_query::{process, QueryState};

use crate::source::RecordSource;

/// Top-level tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    Pipeline,
    #[default]
    Table,
    Events,
    Dashboard,
}

impl TabId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Pipeline => "pipeline",
            TabId::Table => "table",
            TabId::Events => "events",
            TabId::Dashboard => "dashboard",
        }
    }
}

/// State for the sales table view.
#[derive(Debug, Clone)]
pub struct TableState {
    /// The immutable record set for this session.
    records: Vec<SaleRecord>,

    /// Current query: search, filters, sort, group.
    query: QueryState,

    /// Display list recomputed on every query change.
    rows: Vec<DisplayRow>,

    /// Active top-level tab.
    pub active_tab: TabId,

    /// Current theme.
    pub theme: ThemeMode,
}

impl TableState {
    /// Create table state over a record set.
    pub fn new(records: Vec<SaleRecord>) -> Self {
        let mut state = Self {
            records,
            query: QueryState::default(),
            rows: Vec::new(),
            active_tab: TabId::default(),
            theme: ThemeMode::default(),
        };
        state.recompute();
        state
    }

    /// Create table state by loading from a record source.
    pub fn from_source(source: &dyn RecordSource) -> Result<Self, DataError> {
        Ok(Self::new(source.load()?))
    }

    /// The current query snapshot.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The current display list.
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Number of data rows currently listed (headers excluded).
    pub fn listed_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_header()).count()
    }

    /// Total number of records in the set.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// The footer line under the table.
    pub fn status_line(&self) -> String {
        format!(
            "{} out of {} records listed",
            self.listed_count(),
            self.total_count()
        )
    }

    // -------------------------------------------------------------------------
    // Query mutations
    // -------------------------------------------------------------------------

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.recompute();
    }

    /// Toggle one accepted value for a filterable field.
    pub fn toggle_filter_value(&mut self, field: Field, value: impl Into<String>) {
        self.query.filters.toggle(field, value);
        self.recompute();
    }

    /// Toggle a filter value for a field given by its wire name.
    ///
    /// Unknown field names are dropped, not errors: this is a display
    /// layer, availability trumps strictness.
    pub fn toggle_filter_by_name(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<Field>() {
            Ok(field) => self.toggle_filter_value(field, value),
            Err(err) => tracing::warn!("ignoring filter: {err}"),
        }
    }

    /// Drop all filters.
    pub fn clear_filters(&mut self) {
        self.query.filters = Default::default();
        self.recompute();
    }

    /// Cycle the sort on a column header click:
    /// unset -> ascending -> descending -> ascending, per field, replacing
    /// any previous sort field.
    pub fn toggle_sort(&mut self, field: Field) {
        self.query.sort = Some(SortSpec::toggled(self.query.sort, field));
        self.recompute();
    }

    /// Remove the sort entirely.
    pub fn clear_sort(&mut self) {
        self.query.sort = None;
        self.recompute();
    }

    /// Group by a field.
    pub fn set_group(&mut self, field: Field) {
        self.query.group = Some(field);
        self.recompute();
    }

    /// Remove grouping.
    pub fn clear_group(&mut self) {
        self.query.group = None;
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // UI chrome
    // -------------------------------------------------------------------------

    /// Switch the active tab.
    pub fn select_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Flip the light/dark switch.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // -------------------------------------------------------------------------
    // Filter population
    // -------------------------------------------------------------------------

    /// Distinct values present in the data for a field, in first-appearance
    /// order. This is what per-value filter checkboxes are populated from.
    pub fn distinct_values(&self, field: Field) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            let value = field.value_of(record);
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }

    /// Rerun the pipeline over the current snapshot.
    fn recompute(&mut self) {
        self.rows = process(&self.records, &self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{sample_records, SortDirection};

    fn listed_ids(state: &TableState) -> Vec<String> {
        state
            .rows()
            .iter()
            .filter_map(|r| r.as_record())
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn test_initial_state_lists_everything() {
        let state = TableState::new(sample_records());
        assert!(state.query().is_noop());
        assert_eq!(state.listed_count(), 5);
        assert_eq!(state.total_count(), 5);
        assert_eq!(state.status_line(), "5 out of 5 records listed");
        assert_eq!(state.active_tab, TabId::Table);
    }

    #[test]
    fn test_search_recomputes_rows() {
        let mut state = TableState::new(sample_records());
        state.set_search_term("munich");
        assert_eq!(listed_ids(&state), vec!["SO168744"]);
        assert_eq!(state.status_line(), "1 out of 5 records listed");

        state.set_search_term("");
        assert_eq!(state.listed_count(), 5);
    }

    #[test]
    fn test_filter_toggle_and_clear() {
        let mut state = TableState::new(sample_records());
        state.toggle_filter_value(Field::SaleStatus, "Sales Order");
        assert_eq!(listed_ids(&state), vec!["SO168974", "SO168744"]);

        state.clear_filters();
        assert_eq!(state.listed_count(), 5);
    }

    #[test]
    fn test_unknown_filter_field_is_ignored() {
        let mut state = TableState::new(sample_records());
        state.toggle_filter_by_name("client", "whatever");
        assert!(state.query().is_noop());
        assert_eq!(state.listed_count(), 5);

        state.toggle_filter_by_name("saleStatus", "Sales Order");
        assert_eq!(state.listed_count(), 2);
    }

    #[test]
    fn test_header_click_cycles_sort() {
        let mut state = TableState::new(sample_records());
        state.toggle_sort(Field::Completion);
        assert_eq!(
            state.query().sort,
            Some(SortSpec::ascending(Field::Completion))
        );
        let asc = listed_ids(&state);

        state.toggle_sort(Field::Completion);
        assert_eq!(
            state.query().sort.unwrap().direction,
            SortDirection::Descending
        );

        state.toggle_sort(Field::Total);
        assert_eq!(state.query().sort, Some(SortSpec::ascending(Field::Total)));

        state.clear_sort();
        assert!(state.query().sort.is_none());

        // asc by completion: ties keep input order
        assert_eq!(
            asc,
            vec!["SO168910", "SO168967", "ECOMMSO168899", "SO168974", "SO168744"]
        );
    }

    #[test]
    fn test_grouping_inserts_headers() {
        let mut state = TableState::new(sample_records());
        state.set_group(Field::Workflow);
        assert_eq!(state.rows().len(), 9);
        assert_eq!(state.listed_count(), 5);
        assert_eq!(state.status_line(), "5 out of 5 records listed");

        state.clear_group();
        assert_eq!(state.rows().len(), 5);
    }

    #[test]
    fn test_distinct_values_follow_first_appearance() {
        let state = TableState::new(sample_records());
        assert_eq!(
            state.distinct_values(Field::Workflow),
            vec![
                "Stock Verification",
                "Confirmed Order",
                "Delivered Order",
                "Completed Order",
            ]
        );
        assert_eq!(
            state.distinct_values(Field::SalesRep),
            vec!["Bodini Carla", "Mollura Stefania", "Vanni Monica", "Pinna Diana"]
        );
    }

    #[test]
    fn test_tab_and_theme_toggles() {
        let mut state = TableState::new(sample_records());
        state.select_tab(TabId::Dashboard);
        assert_eq!(state.active_tab, TabId::Dashboard);

        assert_eq!(state.theme, ThemeMode::System);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Dark);
        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Light);
    }
}

//! Query state types: filters and sort.
//!
//! These are the UI-owned inputs to the query pipeline. The pipeline itself
//! lives in `tabula-query`; this module only defines the state shapes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::record::{Field, SaleRecord};

/// Per-field set of accepted values.
///
/// AND across fields, OR within a field: a record passes when, for every
/// constrained field, its value is a member of that field's accepted set.
/// A field that is absent, or mapped to an empty set, imposes no constraint.
///
/// Keys are fields and values are *actual field values* (per-value filter
/// checkboxes), never field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    accepted: HashMap<Field, BTreeSet<String>>,
}

impl FilterState {
    /// Create an empty filter state (everything passes).
    pub fn new() -> Self {
        Self::default()
    }

    /// The accepted-value set for a field, if one is present.
    pub fn accepted(&self, field: Field) -> Option<&BTreeSet<String>> {
        self.accepted.get(&field)
    }

    /// Whether a value is currently accepted for a field.
    pub fn is_accepted(&self, field: Field, value: &str) -> bool {
        self.accepted
            .get(&field)
            .is_some_and(|values| values.contains(value))
    }

    /// Toggle a value in a field's accepted set.
    ///
    /// Adding the first value constrains the field; removing the last one
    /// leaves an empty set, which is equivalent to no constraint.
    pub fn toggle(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let values = self.accepted.entry(field).or_default();
        if !values.remove(&value) {
            values.insert(value);
        }
    }

    /// Replace a field's accepted set wholesale.
    pub fn set(&mut self, field: Field, values: impl IntoIterator<Item = String>) {
        self.accepted.insert(field, values.into_iter().collect());
    }

    /// Drop all constraints for a field.
    pub fn clear(&mut self, field: Field) {
        self.accepted.remove(&field);
    }

    /// Fields that actually constrain (non-empty accepted set).
    pub fn constrained_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.accepted
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(field, _)| *field)
    }

    /// Whether no field is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.accepted.values().all(|values| values.is_empty())
    }

    /// Whether a record passes every constrained field.
    pub fn accepts(&self, record: &SaleRecord) -> bool {
        self.accepted.iter().all(|(field, values)| {
            values.is_empty() || values.contains(&field.value_of(record))
        })
    }
}

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Single-column sort: one field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort a field ascending.
    pub fn ascending(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// The next sort after a header click.
    ///
    /// Clicking the active column toggles its direction; clicking any other
    /// column replaces the sort with that column, ascending.
    pub fn toggled(current: Option<SortSpec>, field: Field) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.reversed(),
            },
            _ => SortSpec::ascending(field),
        }
    }
}

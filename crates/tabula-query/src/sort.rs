//! Sort stage: stable single-column ordering.

use std::cmp::Ordering;

use tabula_core::{Field, SaleRecord, SortDirection, SortSpec};

/// Order records by the configured column.
///
/// Completion compares numerically, every other field lexicographically by
/// its string value. The sort is stable: ties keep their relative input
/// order. Descending reverses the comparator, not the output, so tied runs
/// stay in input order either way.
pub fn sort_records(mut records: Vec<SaleRecord>, spec: &SortSpec) -> Vec<SaleRecord> {
    records.sort_by(|a, b| {
        let ord = compare_field(spec.field, a, b);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    records
}

/// Three-way comparison of two records on one field.
fn compare_field(field: Field, a: &SaleRecord, b: &SaleRecord) -> Ordering {
    if field.is_numeric() {
        a.completion.cmp(&b.completion)
    } else {
        field.value_of(a).cmp(&field.value_of(b))
    }
}

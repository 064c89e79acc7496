//! Filter stage: AND across fields, OR within a field's accepted set.

use tabula_core::{FilterState, SaleRecord};

/// Keep the records accepted by the filter state.
///
/// A record passes when, for every field with a non-empty accepted set, its
/// string value for that field is a member of the set. Unconstrained fields
/// impose nothing; an empty filter state passes everything.
pub fn filter_records(mut records: Vec<SaleRecord>, filters: &FilterState) -> Vec<SaleRecord> {
    if filters.is_unconstrained() {
        return records;
    }
    records.retain(|record| filters.accepts(record));
    records
}

//! Search stage: case-insensitive substring match across every field.

use tabula_core::{Field, SaleRecord};

/// Keep the records matching a search term.
///
/// An empty term passes everything through unchanged. Otherwise a record
/// survives iff at least one of its fields (completion as decimal text)
/// contains the term as a case-insensitive substring. Substring only, no
/// tokenizing or fuzziness.
pub fn search_records(mut records: Vec<SaleRecord>, term: &str) -> Vec<SaleRecord> {
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records.retain(|record| matches_term(record, &needle));
    records
}

/// Whether any field of the record contains the lowercased needle.
fn matches_term(record: &SaleRecord, needle: &str) -> bool {
    Field::ALL
        .iter()
        .any(|field| field.value_of(record).to_lowercase().contains(needle))
}

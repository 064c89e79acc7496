//! Group-and-flatten stage: bucket by key, emit headers between buckets.

use tabula_core::util::group_by_key;
use tabula_core::{DisplayRow, Field, SaleRecord};

/// Flatten records into display rows, optionally grouped by one field.
///
/// Without a group field every record is wrapped as a data row, order
/// untouched. With one, records are bucketed by the field's string value in
/// first-appearance order; each bucket emits a header row carrying the key
/// text, then its records in prior-stage order. Buckets are never re-sorted
/// by key, which is why sort has to run before this stage.
pub fn group_and_flatten(records: Vec<SaleRecord>, group: Option<Field>) -> Vec<DisplayRow> {
    let Some(field) = group else {
        return records.into_iter().map(DisplayRow::record).collect();
    };

    let buckets = group_by_key(records, |record| field.value_of(record));
    let mut rows = Vec::with_capacity(buckets.len() * 2);
    for (key, bucket) in buckets {
        rows.push(DisplayRow::header(key));
        rows.extend(bucket.into_iter().map(DisplayRow::record));
    }
    rows
}

//! Display rows: the unit the rendering layer consumes.

use serde::{Deserialize, Serialize};

use crate::record::SaleRecord;

/// An entry in the flattened display list.
///
/// Grouping produces a heterogeneous sequence: synthetic header rows
/// interleaved with data rows. Making the distinction a tagged variant (not
/// a shape check at render time) removes the "is this a header or a record"
/// class of bugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayRow {
    /// A synthetic group header carrying the group's key value.
    GroupHeader { label: String },

    /// A real data row.
    Record(SaleRecord),
}

impl DisplayRow {
    /// Wrap a record as a data row.
    pub fn record(record: SaleRecord) -> Self {
        DisplayRow::Record(record)
    }

    /// Build a group header row.
    pub fn header(label: impl Into<String>) -> Self {
        DisplayRow::GroupHeader {
            label: label.into(),
        }
    }

    /// Whether this row is a group header.
    pub fn is_header(&self) -> bool {
        matches!(self, DisplayRow::GroupHeader { .. })
    }

    /// The underlying record, if this is a data row.
    pub fn as_record(&self) -> Option<&SaleRecord> {
        match self {
            DisplayRow::Record(record) => Some(record),
            DisplayRow::GroupHeader { .. } => None,
        }
    }

    /// The header label, if this is a group header.
    pub fn as_header(&self) -> Option<&str> {
        match self {
            DisplayRow::GroupHeader { label } => Some(label),
            DisplayRow::Record(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_records;

    #[test]
    fn test_row_variant_accessors() {
        let record = sample_records().remove(0);
        let data = DisplayRow::record(record.clone());
        let header = DisplayRow::header("Stock Verification");

        assert!(!data.is_header());
        assert_eq!(data.as_record(), Some(&record));
        assert_eq!(data.as_header(), None);

        assert!(header.is_header());
        assert_eq!(header.as_header(), Some("Stock Verification"));
        assert_eq!(header.as_record(), None);
    }
}

//! Record sources: where the table's data comes from.
//!
//! The record set is loaded once at startup and treated as immutable for
//! the session. The trait keeps the loading mechanism out of the state
//! model and mockable for testing.

use std::path::PathBuf;

use tabula_core::{records_from_json, sample_records, DataError, SaleRecord};

/// A source of sale records.
pub trait RecordSource {
    /// Load the full record set.
    fn load(&self) -> Result<Vec<SaleRecord>, DataError>;
}

/// The built-in demo data set.
#[derive(Debug, Default)]
pub struct StaticRecords;

impl RecordSource for StaticRecords {
    fn load(&self) -> Result<Vec<SaleRecord>, DataError> {
        Ok(sample_records())
    }
}

/// Records read from a JSON file on disk.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFile {
    fn load(&self) -> Result<Vec<SaleRecord>, DataError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| DataError::Io(e.to_string()))?;
        records_from_json(&text)
    }
}

//! Core types for the Tabula sales pipeline table.
//!
//! This crate contains shared data structures used across all Tabula crates:
//! - Sale records and their queryable fields
//! - Filter and sort state
//! - Display rows (data rows and synthetic group headers)
//! - Configuration types
//! - Error types
//! - Formatting helpers

mod config;
mod display;
mod error;
mod query;
mod record;
mod samples;
pub mod util;

pub use config::{
    config_dir, config_path, ensure_config_dir, AppConfig, AppearanceConfig, SidebarConfig,
    ThemeMode,
};
pub use display::DisplayRow;
pub use error::{ConfigError, DataError};
pub use query::{FilterState, SortDirection, SortSpec};
pub use record::{Client, ClientStatus, Field, RecordId, SaleRecord, UnknownField};
pub use samples::{records_from_json, sample_records};

//! Query pipeline for the Tabula sales pipeline table.
//!
//! A pure transformation from (records, search term, filters, sort, group)
//! to a display sequence of data rows and synthetic group headers:
//!
//! ```text
//! records -> search -> filter -> sort -> group-and-flatten -> Vec<DisplayRow>
//! ```
//!
//! The rendering layer owns the mutable UI state and re-invokes
//! [`process`] with a fresh snapshot whenever that state changes.

mod debounce;
mod filter;
mod group;
mod pipeline;
mod search;
mod sort;

pub use debounce::SearchDebouncer;
pub use filter::filter_records;
pub use group::group_and_flatten;
pub use pipeline::{process, QueryState};
pub use search::search_records;
pub use sort::sort_records;

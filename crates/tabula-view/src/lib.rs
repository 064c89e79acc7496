//! Renderer-independent UI state model for the Tabula sales table.
//!
//! This crate owns the mutable state a rendering layer needs:
//! - TableState: search/filter/sort/group state plus the display list
//! - SidebarState and the static navigation routes
//! - RecordSource: the seam for loading the record set
//!
//! Everything here is plain data and methods, no rendering toolkit types,
//! so the whole layer is testable in isolation.

pub mod sidebar;
pub mod source;
pub mod state;

pub use sidebar::{NavEntry, SidebarState, NAV_ENTRIES};
pub use source::{JsonFile, RecordSource, StaticRecords};
pub use state::{TabId, TableState};

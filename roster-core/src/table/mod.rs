//! Sort/paginate engine
//!
//! Derives the visible page from the collection and keeps `page` / `limit`
//! in the location's query string.

pub mod indicators;
pub mod location;
pub mod view;

pub use indicators::{PageIndicator, visible_pages};
pub use location::{History, MemoryHistory};
pub use view::{DEFAULT_LIMIT, PageLimit, SortKey, TableView};

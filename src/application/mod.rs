//! Application layer: the search list extension itself.

pub mod prevdays;

pub use prevdays::{PrevDays, SEARCH_LIST_NAME, VERSION};

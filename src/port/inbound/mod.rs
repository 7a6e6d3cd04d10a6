//! Inbound ports (driving side): how the host report generator drives extensions.

pub mod generator;
pub mod search_list;

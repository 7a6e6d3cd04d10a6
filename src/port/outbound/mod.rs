//! Outbound ports (driven side): capabilities the host reporting engine provides.
//!
//! These contracts describe the data lookup, binder construction, and
//! rendering services the provider depends on but does not implement.

pub mod binder;
pub mod lookup;
pub mod render;

//! Outbound adapters (driven side).

pub mod binder;

//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`host`] - In-memory host doubles: `MemoryLookup`, `MemorySource`,
//!   `PlainFormatter`, `IdentityConverter`, and a ready-made generator context.
//! - [`domain`] - Builders for spans pinned to calendar dates.

pub mod domain;
pub mod host;

pub use host::{
    generator_context, generator_context_with_section, IdentityConverter, MemoryLookup,
    MemorySource, PlainFormatter, ScaledConverter,
};

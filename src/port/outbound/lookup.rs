//! Data lookup port.
//!
//! The host resolves a data-binding name to a live, queryable source. This
//! crate never opens a database itself.

use std::sync::Arc;

use crate::domain::{Aggregate, Measurement, TimeSpan};
use crate::error::Result;

/// Resolves a data-binding name to a queryable data source.
pub trait DataLookup: Send + Sync {
    /// Look up the source behind `data_binding`.
    ///
    /// Returns [`Error::UnknownBinding`](crate::error::Error::UnknownBinding)
    /// when the host has no such binding.
    fn lookup(&self, data_binding: &str) -> Result<Arc<dyn DataSource>>;
}

/// A source that evaluates aggregates over archived observations.
pub trait DataSource: Send + Sync {
    /// Evaluate `aggregate` of `obs_type` over `span`.
    ///
    /// Returns `Ok(None)` when the span holds no data for that type.
    fn aggregate(
        &self,
        obs_type: &str,
        aggregate: Aggregate,
        span: TimeSpan,
    ) -> Result<Option<Measurement>>;
}

//! Aggregate binder port.
//!
//! A binder is scoped to one time span and evaluates statistics only when a
//! template dereferences them. Construction must not query anything.

use std::fmt;
use std::sync::Arc;

use super::lookup::DataLookup;
use super::render::{Formatter, SkinConfig, UnitConverter};
use crate::domain::{Aggregate, Measurement, TimeSpan};
use crate::error::Result;

/// Everything a binder factory needs to scope a binder to a span.
#[derive(Clone)]
pub struct BindRequest {
    pub timespan: TimeSpan,
    pub lookup: Arc<dyn DataLookup>,
    /// Name of the period, e.g. `"week"`; handed to the formatter.
    pub context: String,
    pub data_binding: String,
    pub formatter: Arc<dyn Formatter>,
    pub converter: Arc<dyn UnitConverter>,
    pub skin: Arc<SkinConfig>,
}

impl fmt::Debug for BindRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindRequest")
            .field("timespan", &self.timespan)
            .field("context", &self.context)
            .field("data_binding", &self.data_binding)
            .finish_non_exhaustive()
    }
}

/// Lazy per-field aggregate access over a bound span.
pub trait Binder: fmt::Debug {
    /// The span statistics are evaluated over.
    fn timespan(&self) -> TimeSpan;

    /// Period name the binder was created for.
    fn context(&self) -> &str;

    /// Data binding the binder queries.
    fn data_binding(&self) -> &str;

    /// Evaluate one statistic, converted to the report's units.
    fn aggregate(&self, obs_type: &str, aggregate: Aggregate) -> Result<Option<Measurement>>;

    /// Evaluate and format one statistic.
    fn formatted(&self, obs_type: &str, aggregate: Aggregate) -> Result<String>;
}

/// Host-provided binder constructor.
pub trait BinderFactory: Send + Sync {
    fn bind(&self, request: BindRequest) -> Box<dyn Binder>;
}

//! Default lazy binder built on the host ports.
//!
//! Nothing is queried when a binder is created. Each statistic access
//! resolves the data binding through the host lookup, asks the source for
//! one aggregate over the bound span, and converts the result.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::domain::{Aggregate, Measurement, TimeSpan};
use crate::error::Result;
use crate::port::outbound::binder::{BindRequest, Binder, BinderFactory};

/// Binder that defers every query to field access.
pub struct LazySpanBinder {
    request: BindRequest,
}

impl LazySpanBinder {
    #[must_use]
    pub fn new(request: BindRequest) -> Self {
        Self { request }
    }
}

impl fmt::Debug for LazySpanBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySpanBinder")
            .field("timespan", &self.request.timespan)
            .field("context", &self.request.context)
            .field("data_binding", &self.request.data_binding)
            .finish()
    }
}

impl Binder for LazySpanBinder {
    fn timespan(&self) -> TimeSpan {
        self.request.timespan
    }

    fn context(&self) -> &str {
        &self.request.context
    }

    fn data_binding(&self) -> &str {
        &self.request.data_binding
    }

    fn aggregate(&self, obs_type: &str, aggregate: Aggregate) -> Result<Option<Measurement>> {
        trace!(
            binding = %self.request.data_binding,
            timespan = %self.request.timespan,
            obs_type,
            aggregate = %aggregate,
            "Evaluating aggregate"
        );
        let source = self.request.lookup.lookup(&self.request.data_binding)?;
        let value = source.aggregate(obs_type, aggregate, self.request.timespan)?;
        Ok(value.map(|m| self.request.converter.convert(m)))
    }

    fn formatted(&self, obs_type: &str, aggregate: Aggregate) -> Result<String> {
        let value = self.aggregate(obs_type, aggregate)?;
        Ok(self
            .request
            .formatter
            .format(value.as_ref(), &self.request.context))
    }
}

/// Factory producing [`LazySpanBinder`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyBinderFactory;

impl LazyBinderFactory {
    /// Shared handle suitable for a generator context.
    #[must_use]
    pub fn shared() -> Arc<dyn BinderFactory> {
        Arc::new(Self)
    }
}

impl BinderFactory for LazyBinderFactory {
    fn bind(&self, request: BindRequest) -> Box<dyn Binder> {
        Box::new(LazySpanBinder::new(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::port::outbound::lookup::{DataLookup, DataSource};
    use crate::testkit::{IdentityConverter, MemoryLookup, MemorySource, PlainFormatter, ScaledConverter};

    fn request(lookup: Arc<MemoryLookup>, binding: &str) -> BindRequest {
        BindRequest {
            timespan: TimeSpan::try_new(1_000, 2_000).unwrap(),
            lookup,
            context: "week".to_string(),
            data_binding: binding.to_string(),
            formatter: Arc::new(PlainFormatter),
            converter: Arc::new(IdentityConverter),
            skin: Arc::default(),
        }
    }

    fn lookup_with_temps() -> Arc<MemoryLookup> {
        let source = MemorySource::new()
            .with_unit("outTemp", "degree_C")
            .with_record(500, "outTemp", 30.0)
            .with_record(1_500, "outTemp", 10.0)
            .with_record(1_800, "outTemp", 14.0);
        Arc::new(MemoryLookup::new().with_source("wx_binding", source))
    }

    #[test]
    fn binding_does_not_touch_the_lookup() {
        let lookup = lookup_with_temps();
        let binder = LazyBinderFactory.bind(request(lookup.clone(), "wx_binding"));
        assert_eq!(binder.context(), "week");
        assert_eq!(binder.data_binding(), "wx_binding");
        assert_eq!(lookup.lookups(), 0);
    }

    #[test]
    fn each_field_access_queries_the_span() {
        let lookup = lookup_with_temps();
        let binder = LazyBinderFactory.bind(request(lookup.clone(), "wx_binding"));

        let max = binder.aggregate("outTemp", Aggregate::Max).unwrap().unwrap();
        assert_eq!(max, Measurement::new(14.0, "degree_C"));
        let avg = binder.aggregate("outTemp", Aggregate::Avg).unwrap().unwrap();
        assert_eq!(avg.value, 12.0);
        assert_eq!(lookup.lookups(), 2);
    }

    #[test]
    fn converter_is_applied_to_results() {
        let lookup = lookup_with_temps();
        let mut req = request(lookup, "wx_binding");
        req.converter = Arc::new(ScaledConverter::new(2.0, "half_degree_C"));
        let binder = LazyBinderFactory.bind(req);

        let min = binder.aggregate("outTemp", Aggregate::Min).unwrap().unwrap();
        assert_eq!(min, Measurement::new(20.0, "half_degree_C"));
    }

    #[test]
    fn formatted_uses_context_and_handles_missing_data() {
        let lookup = lookup_with_temps();
        let binder = LazyBinderFactory.bind(request(lookup, "wx_binding"));

        assert_eq!(
            binder.formatted("outTemp", Aggregate::Max).unwrap(),
            "14.0 degree_C (week)"
        );
        assert_eq!(binder.formatted("rain", Aggregate::Sum).unwrap(), "N/A (week)");
    }

    #[test]
    fn unknown_binding_surfaces_on_access() {
        let lookup = lookup_with_temps();
        let binder = LazyBinderFactory.bind(request(lookup, "missing_binding"));
        assert!(matches!(
            binder.aggregate("outTemp", Aggregate::Max),
            Err(Error::UnknownBinding { .. })
        ));
    }

    struct LockedArchive;

    impl DataLookup for LockedArchive {
        fn lookup(&self, _data_binding: &str) -> crate::error::Result<Arc<dyn DataSource>> {
            Err(Error::Database("database is locked".to_string()))
        }
    }

    #[test]
    fn source_failures_are_returned_to_the_caller() {
        let mut req = request(lookup_with_temps(), "wx_binding");
        req.lookup = Arc::new(LockedArchive);
        let binder = LazyBinderFactory.bind(req);

        assert!(matches!(
            binder.formatted("outTemp", Aggregate::Max),
            Err(Error::Database(_))
        ));
    }
}

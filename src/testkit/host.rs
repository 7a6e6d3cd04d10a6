//! In-memory stand-ins for the host reporting engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapter::outbound::binder::LazyBinderFactory;
use crate::domain::{Aggregate, Measurement, TimeSpan};
use crate::error::{Error, Result};
use crate::port::{DataLookup, DataSource, Formatter, GeneratorContext, UnitConverter};

/// Archive of `(timestamp, obs_type, value)` records.
///
/// Aggregates follow archive-interval semantics: a record stamped `ts`
/// belongs to a span when `start < ts <= stop`.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<(i64, String, f64)>,
    units: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, obs_type: &str, unit: &str) -> Self {
        self.units.insert(obs_type.to_string(), unit.to_string());
        self
    }

    pub fn with_record(mut self, ts: i64, obs_type: &str, value: f64) -> Self {
        self.records.push((ts, obs_type.to_string(), value));
        self
    }
}

impl DataSource for MemorySource {
    fn aggregate(
        &self,
        obs_type: &str,
        aggregate: Aggregate,
        span: TimeSpan,
    ) -> Result<Option<Measurement>> {
        let values: Vec<f64> = self
            .records
            .iter()
            .filter(|(ts, obs, _)| obs == obs_type && span.start() < *ts && *ts <= span.stop())
            .map(|(_, _, value)| *value)
            .collect();

        if aggregate == Aggregate::Count {
            return Ok(Some(Measurement::new(values.len() as f64, "count")));
        }
        if values.is_empty() {
            return Ok(None);
        }

        let value = match aggregate {
            Aggregate::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Aggregate::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Aggregate::Sum => values.iter().sum(),
            Aggregate::Avg => values.iter().sum::<f64>() / values.len() as f64,
            Aggregate::Count => values.len() as f64,
        };
        let unit = self.units.get(obs_type).cloned().unwrap_or_default();
        Ok(Some(Measurement::new(value, unit)))
    }
}

/// Lookup over named in-memory sources that counts how often it is consulted.
#[derive(Default)]
pub struct MemoryLookup {
    sources: HashMap<String, Arc<MemorySource>>,
    lookups: AtomicUsize,
}

impl MemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, binding: &str, source: MemorySource) -> Self {
        self.sources.insert(binding.to_string(), Arc::new(source));
        self
    }

    /// Number of `lookup` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl DataLookup for MemoryLookup {
    fn lookup(&self, data_binding: &str) -> Result<Arc<dyn DataSource>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.sources
            .get(data_binding)
            .map(|source| Arc::clone(source) as Arc<dyn DataSource>)
            .ok_or_else(|| Error::UnknownBinding {
                binding: data_binding.to_string(),
            })
    }
}

/// Formats as `"<value:.1> <unit> (<context>)"`, or `"N/A (<context>)"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, value: Option<&Measurement>, context: &str) -> String {
        match value {
            Some(m) => format!("{:.1} {} ({context})", m.value, m.unit),
            None => format!("N/A ({context})"),
        }
    }
}

/// Leaves measurements untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl UnitConverter for IdentityConverter {
    fn convert(&self, value: Measurement) -> Measurement {
        value
    }
}

/// Multiplies every value by a factor and relabels the unit.
#[derive(Debug, Clone)]
pub struct ScaledConverter {
    factor: f64,
    unit: String,
}

impl ScaledConverter {
    pub fn new(factor: f64, unit: &str) -> Self {
        Self {
            factor,
            unit: unit.to_string(),
        }
    }
}

impl UnitConverter for ScaledConverter {
    fn convert(&self, value: Measurement) -> Measurement {
        Measurement::new(value.value * self.factor, self.unit.clone())
    }
}

/// Generator context wired to the plain formatter, identity converter and lazy binders.
pub fn generator_context() -> GeneratorContext {
    GeneratorContext::new(
        Arc::new(PlainFormatter),
        Arc::new(IdentityConverter),
        LazyBinderFactory::shared(),
    )
}

/// Generator context whose host config carries the given `[PrevDay]` TOML section body.
pub fn generator_context_with_section(section: &str) -> GeneratorContext {
    let config: toml::Table = toml::from_str(&format!("[PrevDay]\n{section}"))
        .unwrap_or_else(|e| panic!("invalid test section: {e}"));
    generator_context().with_config(config)
}

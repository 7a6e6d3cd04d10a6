//! Search list extension contract.
//!
//! The host calls [`PageDataProvider::prepare`] once per report pass and
//! receives a [`SearchList`] of named tag sources. Templates then invoke
//! named accessors on those sources through [`TagSource::call`].

use std::sync::Arc;

use tracing::warn;

use crate::domain::TimeSpan;
use crate::error::Result;
use crate::port::outbound::binder::Binder;
use crate::port::outbound::lookup::DataLookup;

/// An argument passed from a template to an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagArg {
    Int(i64),
    Text(String),
}

impl From<i64> for TagArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for TagArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// What an accessor hands back to a template.
#[derive(Debug)]
pub enum TagValue {
    Text(String),
    Binder(Box<dyn Binder>),
}

impl TagValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binder(_) => None,
        }
    }

    #[must_use]
    pub fn into_binder(self) -> Option<Box<dyn Binder>> {
        match self {
            Self::Binder(binder) => Some(binder),
            Self::Text(_) => None,
        }
    }
}

/// Something templates can call named accessors on.
pub trait TagSource {
    /// Accessor names this source answers to.
    fn accessors(&self) -> &'static [&'static str];

    /// Invoke accessor `name` with template-supplied `args`.
    fn call(&self, name: &str, args: &[TagArg]) -> Result<TagValue>;
}

/// The page-data provider contract: `prepare` once, then any number of accessor calls.
pub trait PageDataProvider {
    fn prepare(&mut self, timespan: TimeSpan, lookup: Arc<dyn DataLookup>) -> SearchList<'_>;
}

/// Named tag sources returned from [`PageDataProvider::prepare`].
#[derive(Default)]
pub struct SearchList<'a> {
    entries: Vec<(&'static str, &'a dyn TagSource)>,
}

impl<'a> SearchList<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a named source, replacing any earlier source with the same name.
    #[must_use]
    pub fn with(mut self, name: &'static str, source: &'a dyn TagSource) -> Self {
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, source));
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a dyn TagSource> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, source)| *source)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Call an accessor, turning failure into a blank value for the template.
///
/// Errors are local to one statistic: they are logged and the pass goes on.
pub fn resolve(source: &dyn TagSource, name: &str, args: &[TagArg]) -> Option<TagValue> {
    match source.call(name, args) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(accessor = name, error = %e, "Tag unavailable, rendering blank");
            None
        }
    }
}

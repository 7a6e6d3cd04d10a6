//! The `prevdays` search list extension.
//!
//! [`PrevDays`] is constructed once per report pass from the host's
//! [`GeneratorContext`]. The host then calls [`PageDataProvider::prepare`]
//! with the current report span, after which templates can ask for binders
//! over earlier windows:
//!
//! | accessor | window |
//! |----------|--------|
//! | `prevday`, `prevweek`, `prevmonth`, `prevyear` | trailing, one unit |
//! | `days(n)`, `weeks(n)`, `months(n)`, `years(n)` | trailing, `n` units |
//! | `priorday`, `priorweek`, `priormonth`, `prioryear` | shifted, one unit |
//! | `version` | extension version string |
//!
//! Trailing windows start at local midnight `n` units before the current
//! stop and end at the current stop. Shifted windows are the current span
//! moved back by `n` units.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, TimeZone};
use tracing::{debug, info_span, Span};

use crate::domain::calendar::{previous_window, Anchor, CalendarUnit, Lookback};
use crate::domain::error::SpanError;
use crate::domain::span::TimeSpan;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::PrevDaysConfig;
use crate::port::inbound::generator::GeneratorContext;
use crate::port::inbound::search_list::{PageDataProvider, SearchList, TagArg, TagSource, TagValue};
use crate::port::outbound::binder::{BindRequest, Binder, BinderFactory};
use crate::port::outbound::lookup::DataLookup;
use crate::port::outbound::render::{Formatter, SkinConfig, UnitConverter};

/// Extension version reported by the `version` accessor.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name templates use to reach the extension.
pub const SEARCH_LIST_NAME: &str = "prevdays";

const ACCESSORS: &[&str] = &[
    "version",
    "prevday",
    "prevweek",
    "prevmonth",
    "prevyear",
    "days",
    "weeks",
    "months",
    "years",
    "priorday",
    "priorweek",
    "priormonth",
    "prioryear",
];

/// State captured by `prepare`.
struct Prepared {
    timespan: TimeSpan,
    lookup: Arc<dyn DataLookup>,
}

/// Previous-window provider for one report pass.
pub struct PrevDays<Tz: TimeZone = Local> {
    formatter: Arc<dyn Formatter>,
    converter: Arc<dyn UnitConverter>,
    skin: Arc<SkinConfig>,
    binders: Arc<dyn BinderFactory>,
    data_binding: String,
    tz: Tz,
    state: Option<Prepared>,
    span: Span,
}

impl PrevDays<Local> {
    /// Capture the host's rendering services and read the `[PrevDay]` section.
    ///
    /// Calendar arithmetic uses the local time zone; see [`PrevDays::with_timezone`].
    ///
    /// # Errors
    ///
    /// Returns a config error if the `[PrevDay]` section is malformed.
    pub fn new(ctx: &GeneratorContext) -> Result<Self> {
        let config = PrevDaysConfig::from_host(&ctx.config)?;
        let span = info_span!(parent: &ctx.span, "prevdays", binding = %config.data_binding);
        Ok(Self {
            formatter: Arc::clone(&ctx.formatter),
            converter: Arc::clone(&ctx.converter),
            skin: Arc::clone(&ctx.skin),
            binders: Arc::clone(&ctx.binders),
            data_binding: config.data_binding,
            tz: Local,
            state: None,
            span,
        })
    }
}

impl<Tz: TimeZone> PrevDays<Tz> {
    /// Do calendar arithmetic in `tz` instead.
    #[must_use]
    pub fn with_timezone<T: TimeZone>(self, tz: T) -> PrevDays<T> {
        PrevDays {
            formatter: self.formatter,
            converter: self.converter,
            skin: self.skin,
            binders: self.binders,
            data_binding: self.data_binding,
            tz,
            state: self.state,
            span: self.span,
        }
    }

    #[must_use]
    pub fn data_binding(&self) -> &str {
        &self.data_binding
    }

    /// True once `prepare` has been called.
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.state.is_some()
    }

    /// The current report span, if prepared.
    #[must_use]
    pub fn timespan(&self) -> Option<TimeSpan> {
        self.state.as_ref().map(|prepared| prepared.timespan)
    }

    #[must_use]
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Compute a previous window without binding it.
    ///
    /// # Errors
    ///
    /// Fails if not prepared, if `count` is not positive, or if the local
    /// clock conversion fails.
    pub fn window(&self, unit: CalendarUnit, count: i64, anchor: Anchor) -> Result<TimeSpan> {
        let prepared = self.prepared()?;
        let lookback = Lookback::new(unit, count)?;
        Ok(previous_window(prepared.timespan, lookback, anchor, &self.tz)?)
    }

    /// Binder over the trailing `days` days ending at the current stop.
    ///
    /// # Errors
    ///
    /// See [`PrevDays::window`].
    pub fn prev_days(&self, days: i64) -> Result<Box<dyn Binder>> {
        self.previous(CalendarUnit::Day, days)
    }

    /// Binder over a trailing window of `count` units.
    ///
    /// # Errors
    ///
    /// See [`PrevDays::window`].
    pub fn previous(&self, unit: CalendarUnit, count: i64) -> Result<Box<dyn Binder>> {
        self.bind(Lookback::new(unit, count), Anchor::Trailing)
    }

    /// Binder over the current span shifted back by `count` units.
    ///
    /// # Errors
    ///
    /// See [`PrevDays::window`].
    pub fn prior(&self, unit: CalendarUnit, count: i64) -> Result<Box<dyn Binder>> {
        self.bind(Lookback::new(unit, count), Anchor::Shifted)
    }

    pub fn prevday(&self) -> Result<Box<dyn Binder>> {
        self.bind(Ok(Lookback::one(CalendarUnit::Day)), Anchor::Trailing)
    }

    pub fn prevweek(&self) -> Result<Box<dyn Binder>> {
        self.bind(Ok(Lookback::one(CalendarUnit::Week)), Anchor::Trailing)
    }

    pub fn prevmonth(&self) -> Result<Box<dyn Binder>> {
        self.bind(Ok(Lookback::one(CalendarUnit::Month)), Anchor::Trailing)
    }

    pub fn prevyear(&self) -> Result<Box<dyn Binder>> {
        self.bind(Ok(Lookback::one(CalendarUnit::Year)), Anchor::Trailing)
    }

    fn prepared(&self) -> std::result::Result<&Prepared, SpanError> {
        self.state.as_ref().ok_or(SpanError::NotPrepared)
    }

    /// An unprepared provider reports `NotPrepared` before any lookback error.
    fn bind(
        &self,
        lookback: std::result::Result<Lookback, SpanError>,
        anchor: Anchor,
    ) -> Result<Box<dyn Binder>> {
        let _enter = self.span.enter();
        let prepared = self.prepared()?;
        let lookback = lookback?;
        let timespan = previous_window(prepared.timespan, lookback, anchor, &self.tz)?;
        debug!(%lookback, ?anchor, window = %timespan, "Bound previous window");

        Ok(self.binders.bind(BindRequest {
            timespan,
            lookup: Arc::clone(&prepared.lookup),
            context: lookback.unit().as_str().to_string(),
            data_binding: self.data_binding.clone(),
            formatter: Arc::clone(&self.formatter),
            converter: Arc::clone(&self.converter),
            skin: Arc::clone(&self.skin),
        }))
    }
}

impl<Tz: TimeZone> PageDataProvider for PrevDays<Tz> {
    fn prepare(&mut self, timespan: TimeSpan, lookup: Arc<dyn DataLookup>) -> SearchList<'_> {
        self.span.in_scope(|| {
            if self.state.is_some() {
                debug!("Replacing previously prepared span");
            }
            debug!(%timespan, "Prepared report span");
        });
        self.state = Some(Prepared { timespan, lookup });
        SearchList::new().with(SEARCH_LIST_NAME, &*self)
    }
}

/// Template accessors, parsed from their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accessor {
    Version,
    /// `prevweek` etc.
    Previous(CalendarUnit),
    /// `weeks(n)` etc.
    PreviousN(CalendarUnit),
    /// `priorweek` etc.
    Prior(CalendarUnit),
}

impl Accessor {
    fn parse(name: &str) -> Option<Self> {
        if name == "version" {
            return Some(Self::Version);
        }
        if let Some(unit) = name.strip_prefix("prior") {
            return unit_named(unit).map(Self::Prior);
        }
        if let Some(unit) = name.strip_prefix("prev") {
            return unit_named(unit).map(Self::Previous);
        }
        name.strip_suffix('s').and_then(unit_named).map(Self::PreviousN)
    }

    const fn arity(self) -> usize {
        match self {
            Self::PreviousN(_) => 1,
            Self::Version | Self::Previous(_) | Self::Prior(_) => 0,
        }
    }
}

fn unit_named(name: &str) -> Option<CalendarUnit> {
    CalendarUnit::ALL
        .into_iter()
        .find(|unit| unit.as_str() == name)
}

fn lookback_arg(unit: CalendarUnit, arg: &TagArg) -> std::result::Result<Lookback, SpanError> {
    match arg {
        TagArg::Int(count) => Lookback::new(unit, *count),
        TagArg::Text(count) => Lookback::parse(unit, count),
    }
}

impl<Tz: TimeZone> TagSource for PrevDays<Tz> {
    fn accessors(&self) -> &'static [&'static str] {
        ACCESSORS
    }

    fn call(&self, name: &str, args: &[TagArg]) -> Result<TagValue> {
        let accessor = Accessor::parse(name).ok_or_else(|| Error::UnknownAccessor {
            name: name.to_string(),
        })?;
        let binder = match (accessor, args) {
            (Accessor::Version, []) => return Ok(TagValue::Text(VERSION.to_string())),
            (Accessor::Previous(unit), []) => {
                self.bind(Ok(Lookback::one(unit)), Anchor::Trailing)?
            }
            (Accessor::Prior(unit), []) => self.bind(Ok(Lookback::one(unit)), Anchor::Shifted)?,
            (Accessor::PreviousN(unit), [count]) => {
                self.bind(lookback_arg(unit, count), Anchor::Trailing)?
            }
            _ => {
                return Err(Error::Arity {
                    name: name.to_string(),
                    expected: accessor.arity(),
                    got: args.len(),
                })
            }
        };
        Ok(TagValue::Binder(binder))
    }
}

impl<Tz: TimeZone> fmt::Debug for PrevDays<Tz> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrevDays")
            .field("data_binding", &self.data_binding)
            .field("timespan", &self.timespan())
            .finish_non_exhaustive()
    }
}

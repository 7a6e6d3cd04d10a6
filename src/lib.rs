//! prevdays - previous-period search list extension for weather reports.
//!
//! A report generator renders pages for a current time span (today, this
//! week, ...). This crate supplies the `prevdays` search list extension,
//! which lets templates put statistics for an earlier window next to the
//! current ones, e.g. this week's rainfall beside last week's.
//!
//! # Architecture
//!
//! The host reporting engine owns templating, data access, unit conversion,
//! and formatting. The crate reaches them only through ports:
//!
//! - **`port::inbound`** - How the host drives the extension
//!   - `PageDataProvider` - `prepare` once per pass, returning a `SearchList`
//!   - `TagSource` - Named accessors templates call
//! - **`port::outbound`** - Host capabilities the extension consumes
//!   - `DataLookup` / `DataSource` - Binding name to queryable source
//!   - `BinderFactory` / `Binder` - Lazy aggregate access over a span
//!   - `Formatter` / `UnitConverter` - Passed through to binders
//!
//! # Modules
//!
//! - [`domain`] - Time spans, calendar lookbacks, aggregates
//! - [`application`] - The [`PrevDays`](application::PrevDays) extension
//! - [`adapter`] - Default lazy binder and the diagnostic CLI
//! - [`infrastructure`] - `[PrevDay]` configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use prevdays::adapter::outbound::binder::LazyBinderFactory;
//! use prevdays::application::PrevDays;
//! use prevdays::domain::TimeSpan;
//! use prevdays::port::{DataLookup, Formatter, GeneratorContext, PageDataProvider, UnitConverter};
//!
//! fn render_pass(
//!     formatter: Arc<dyn Formatter>,
//!     converter: Arc<dyn UnitConverter>,
//!     lookup: Arc<dyn DataLookup>,
//! ) -> prevdays::error::Result<()> {
//!     let ctx = GeneratorContext::new(formatter, converter, LazyBinderFactory::shared());
//!     let mut prevdays = PrevDays::new(&ctx)?;
//!     let current = TimeSpan::try_new(1_705_190_400, 1_705_276_800)?;
//!     let search_list = prevdays.prepare(current, lookup);
//!     assert!(search_list.get("prevdays").is_some());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

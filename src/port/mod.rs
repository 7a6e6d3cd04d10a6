//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The reporting engine that hosts this extension owns templating, data
//! access, unit conversion, and formatting. Ports describe those
//! capabilities so the provider can be driven, and tested, without the host.
//!
//! ```text
//!            ┌──────────────────────┐
//!  host ───► │ inbound: prepare,    │
//!            │ TagSource::call      │
//!            ├──────────────────────┤
//!            │ PrevDays + domain    │
//!            ├──────────────────────┤
//!            │ outbound: lookup,    │ ───► host
//!            │ binder, formatting   │
//!            └──────────────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::generator::GeneratorContext;
pub use inbound::search_list::{resolve, PageDataProvider, SearchList, TagArg, TagSource, TagValue};
pub use outbound::binder::{BindRequest, Binder, BinderFactory};
pub use outbound::lookup::{DataLookup, DataSource};
pub use outbound::render::{Formatter, SkinConfig, UnitConverter};

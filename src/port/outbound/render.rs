//! Rendering ports: unit conversion, formatting, and skin configuration.
//!
//! These belong to the host. The provider only carries them through to the
//! binders it creates.

use crate::domain::Measurement;

/// Skin configuration as loaded by the host.
pub type SkinConfig = toml::Table;

/// Converts measurements into the unit system a report is rendered in.
pub trait UnitConverter: Send + Sync {
    fn convert(&self, value: Measurement) -> Measurement;
}

/// Formats a (possibly missing) measurement for display.
pub trait Formatter: Send + Sync {
    /// Render `value`; `None` means the statistic had no data.
    ///
    /// `context` names the span being rendered, e.g. `"week"`.
    fn format(&self, value: Option<&Measurement>, context: &str) -> String;
}

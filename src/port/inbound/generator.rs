//! What the host report generator hands a search list extension at construction.

use std::fmt;
use std::sync::Arc;

use tracing::Span;

use crate::port::outbound::binder::BinderFactory;
use crate::port::outbound::render::{Formatter, SkinConfig, UnitConverter};

/// Host generator state shared with every extension for one report pass.
///
/// `span` is the host's logging scope for the pass; extensions log inside a
/// child of it instead of configuring logging globally.
#[derive(Clone)]
pub struct GeneratorContext {
    pub formatter: Arc<dyn Formatter>,
    pub converter: Arc<dyn UnitConverter>,
    pub skin: Arc<SkinConfig>,
    /// Full host configuration; extensions read their own section from it.
    pub config: Arc<toml::Table>,
    pub binders: Arc<dyn BinderFactory>,
    pub span: Span,
}

impl GeneratorContext {
    /// Create a context with empty skin and host configuration.
    #[must_use]
    pub fn new(
        formatter: Arc<dyn Formatter>,
        converter: Arc<dyn UnitConverter>,
        binders: Arc<dyn BinderFactory>,
    ) -> Self {
        Self {
            formatter,
            converter,
            skin: Arc::new(SkinConfig::new()),
            config: Arc::new(toml::Table::new()),
            binders,
            span: Span::current(),
        }
    }

    #[must_use]
    pub fn with_skin(mut self, skin: SkinConfig) -> Self {
        self.skin = Arc::new(skin);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: toml::Table) -> Self {
        self.config = Arc::new(config);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Debug for GeneratorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorContext")
            .field("skin", &self.skin)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

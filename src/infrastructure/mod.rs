//! Infrastructure layer.
//!
//! Technical concerns that support the extension without containing its
//! logic: reading the host's configuration section and setting up logging
//! for the diagnostic binary.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
pub mod config;

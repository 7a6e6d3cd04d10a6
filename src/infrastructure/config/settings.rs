//! Extension configuration loading and validation.
//!
//! The extension reads one section, `[PrevDay]`, from the host's
//! configuration. Every key is optional; a host config without the section
//! gets the defaults.
//!
//! # Example
//!
//! ```
//! use prevdays::infrastructure::config::settings::PrevDaysConfig;
//!
//! let config = PrevDaysConfig::parse_toml("[PrevDay]\ndata_binding = \"archive\"\n").unwrap();
//! assert_eq!(config.data_binding, "archive");
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Host configuration section the extension reads.
pub const SECTION: &str = "PrevDay";

/// Binding queried when the section does not name one.
pub const DEFAULT_DATA_BINDING: &str = "weewxd_binding";

/// Settings from the `[PrevDay]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrevDaysConfig {
    /// Data binding whose source the previous-window binders query.
    pub data_binding: String,
}

impl Default for PrevDaysConfig {
    fn default() -> Self {
        Self {
            data_binding: DEFAULT_DATA_BINDING.to_string(),
        }
    }
}

impl PrevDaysConfig {
    /// Extract and validate the section from an already-parsed host config.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not a table, has mistyped values,
    /// or fails validation.
    pub fn from_host(host: &toml::Table) -> Result<Self> {
        let config = match host.get(SECTION) {
            None => Self::default(),
            Some(toml::Value::Table(section)) => toml::Value::Table(section.clone())
                .try_into::<Self>()
                .map_err(ConfigError::Parse)?,
            Some(_) => {
                return Err(ConfigError::InvalidValue {
                    field: SECTION,
                    reason: "must be a table".to_string(),
                }
                .into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a host configuration document and extract the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the section is invalid.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let host: toml::Table = toml::from_str(content).map_err(ConfigError::Parse)?;
        Self::from_host(&host)
    }

    /// Load a host configuration file and extract the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.data_binding.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data_binding",
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_section_uses_default_binding() {
        let config = PrevDaysConfig::parse_toml("[Station]\naltitude = 10\n").unwrap();
        assert_eq!(config.data_binding, DEFAULT_DATA_BINDING);
    }

    #[test]
    fn empty_section_uses_default_binding() {
        let config = PrevDaysConfig::parse_toml("[PrevDay]\n").unwrap();
        assert_eq!(config, PrevDaysConfig::default());
    }

    #[test]
    fn section_overrides_binding() {
        let config =
            PrevDaysConfig::parse_toml("[PrevDay]\ndata_binding = \"sysstat_binding\"\n").unwrap();
        assert_eq!(config.data_binding, "sysstat_binding");
    }

    #[test]
    fn unrelated_keys_in_section_are_ignored() {
        let config =
            PrevDaysConfig::parse_toml("[PrevDay]\nskin = \"Seasons\"\n").unwrap();
        assert_eq!(config.data_binding, DEFAULT_DATA_BINDING);
    }

    #[test]
    fn blank_binding_is_rejected() {
        let result = PrevDaysConfig::parse_toml("[PrevDay]\ndata_binding = \"  \"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "data_binding"
            }))
        ));
    }

    #[test]
    fn mistyped_binding_is_a_parse_error() {
        let result = PrevDaysConfig::parse_toml("[PrevDay]\ndata_binding = 7\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn non_table_section_is_rejected() {
        let result = PrevDaysConfig::parse_toml("PrevDay = \"weekly\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "PrevDay",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = PrevDaysConfig::parse_toml("[PrevDay\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}

//! Configuration for impress-isn
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! isbn13_prefix = "979"
//! strip_internal_whitespace = true
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::converters::{is_isbn13_prefix, DEFAULT_ISBN13_PREFIX};
use crate::error::{IsnError, Result};

/// Environment variable naming a config file for the CLI
pub const CONFIG_ENV_VAR: &str = "IMPRESS_ISN_CONFIG";

/// Tunable behavior for canonicalization and conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsnConfig {
    /// Prefix for ISBN-10 to ISBN-13 conversion
    pub isbn13_prefix: String,
    /// Also drop whitespace inside the identifier, not just around it
    pub strip_internal_whitespace: bool,
}

impl Default for IsnConfig {
    fn default() -> Self {
        Self {
            isbn13_prefix: DEFAULT_ISBN13_PREFIX.to_string(),
            strip_internal_whitespace: false,
        }
    }
}

impl IsnConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: IsnConfig =
            toml::from_str(content).map_err(|e| IsnError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| IsnError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_isbn13_prefix(&self.isbn13_prefix) {
            return Err(IsnError::InvalidPrefix(self.isbn13_prefix.clone()));
        }
        Ok(())
    }
}

//! Configuration file
//!
//! A single JSON object. Every field is optional:
//!
//! ```json
//! {
//!   "max_decode_depth": 256,
//!   "system_fields": ["_index", "_type", "_id"],
//!   "validate_system_metadata": false,
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{SystemFields, DEFAULT_SYSTEM_FIELDS};
use crate::observability::Severity;
use crate::stream::DecodeLimits;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON for [`Config`]
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Nesting limit the CLI applies to encoded files unless configured
pub const DEFAULT_MAX_DECODE_DEPTH: usize = 256;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// List/Map nesting limit while decoding
    #[serde(default = "default_max_decode_depth")]
    pub max_decode_depth: usize,

    /// Known system metadata field names
    #[serde(default = "default_system_fields")]
    pub system_fields: Vec<String>,

    /// Check system metadata keys against `system_fields` before encoding
    #[serde(default)]
    pub validate_system_metadata: bool,

    /// Minimum log severity: trace, info, warn, error or fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_decode_depth() -> usize {
    DEFAULT_MAX_DECODE_DEPTH
}
fn default_system_fields() -> Vec<String> {
    DEFAULT_SYSTEM_FIELDS.iter().map(|s| s.to_string()).collect()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_decode_depth: default_max_decode_depth(),
            system_fields: default_system_fields(),
            validate_system_metadata: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.max_decode_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_decode_depth",
                reason: "must be > 0".to_string(),
            });
        }

        if self.system_fields.is_empty() {
            return Err(ConfigError::Invalid {
                field: "system_fields",
                reason: "must name at least one field".to_string(),
            });
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!(
                    "'{}' is not one of trace, info, warn, error, fatal",
                    self.log_level
                ),
            });
        }

        Ok(())
    }

    /// Decode limits derived from this configuration
    pub fn decode_limits(&self) -> DecodeLimits {
        DecodeLimits::with_max_depth(self.max_decode_depth)
    }

    /// Known system field set
    pub fn system_fields(&self) -> SystemFields {
        SystemFields::new(self.system_fields.iter().cloned())
    }

    /// Minimum log severity; falls back to INFO for unvalidated values
    pub fn min_severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

//! Tax engine configuration
//!
//! ```toml
//! combined_rate = "18"
//! max_rate = "100"
//! default_classification_code = "998314"
//! words_suffix = "Rupees Only"
//! ```

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::types::{GstError, GstResult};
use crate::utils::words::DEFAULT_WORDS_SUFFIX;

/// HSN/SAC used when a catalog item carries no usable code (digital services)
pub const DEFAULT_CLASSIFICATION_CODE: &str = "998314";

/// Rates and fallbacks the engine applies to every invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GstConfig {
    /// Statutory combined rate in percent; split in half for CGST/SGST
    pub combined_rate: BigDecimal,
    /// Upper bound accepted for any single rate, in percent
    pub max_rate: BigDecimal,
    /// Classification code for items without one
    pub default_classification_code: String,
    /// Appended to the amount in words
    pub words_suffix: String,
}

impl Default for GstConfig {
    fn default() -> Self {
        Self {
            combined_rate: BigDecimal::from(18),
            max_rate: BigDecimal::from(100),
            default_classification_code: DEFAULT_CLASSIFICATION_CODE.to_string(),
            words_suffix: DEFAULT_WORDS_SUFFIX.to_string(),
        }
    }
}

impl GstConfig {
    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> GstResult<Self> {
        let config: GstConfig =
            toml::from_str(source).map_err(|e| GstError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GstResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| GstError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loading GST config");
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> GstResult<()> {
        let zero = BigDecimal::from(0);

        if self.max_rate <= zero {
            return Err(GstError::Config(format!(
                "max_rate must be positive, got {}",
                self.max_rate
            )));
        }

        if self.combined_rate < zero || self.combined_rate > self.max_rate {
            return Err(GstError::Config(format!(
                "combined_rate must be between 0 and {}, got {}",
                self.max_rate, self.combined_rate
            )));
        }

        if self.default_classification_code.trim().is_empty() {
            return Err(GstError::Config(
                "default_classification_code cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

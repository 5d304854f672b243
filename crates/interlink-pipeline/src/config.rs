//! Pipeline configuration

use crate::PipelineError;
use interlink_cluster::WeightTable;
use interlink_expansion::ExpansionStrategy;
use interlink_export::ExportConfig;
use serde::{Deserialize, Serialize};

/// Configuration for one export pipeline
///
/// # Examples
///
/// ```
/// use interlink_pipeline::PipelineConfig;
/// use interlink_expansion::ExpansionStrategy;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.expansion, ExpansionStrategy::Spoke);
/// assert!(config.validate().is_ok());
///
/// let text = config.to_toml()?;
/// let parsed = PipelineConfig::from_toml(&text)?;
/// assert_eq!(parsed, config);
/// # Ok::<(), interlink_pipeline::PipelineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Expansion strategy for records with more than two participants
    /// Default: spoke
    #[serde(default)]
    pub expansion: ExpansionStrategy,

    /// Expand and cluster on the rayon pool
    /// Default: false
    #[serde(default)]
    pub parallel: bool,

    /// Export rule chain
    #[serde(default)]
    pub export: ExportConfig,

    /// Scoring weights
    #[serde(default)]
    pub weights: WeightTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            expansion: ExpansionStrategy::Spoke,
            parallel: false,
            export: ExportConfig::default(),
            weights: WeightTable::default(),
        }
    }
}

impl PipelineConfig {
    /// Only true binary evidence, higher score threshold
    pub fn strict() -> Self {
        Self {
            expansion: ExpansionStrategy::None,
            export: ExportConfig::strict(),
            ..Self::default()
        }
    }

    /// Surrogate baits, lower threshold, unannotated methods exportable
    pub fn lenient() -> Self {
        Self {
            expansion: ExpansionStrategy::SpokeWithoutBait,
            export: ExportConfig::lenient(),
            ..Self::default()
        }
    }

    /// Named preset (`default`, `strict` or `lenient`)
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "lenient" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Parse a TOML document
    pub fn from_toml(text: &str) -> Result<Self, PipelineError> {
        toml::from_str(text).map_err(|e| PipelineError::Format(e.to_string()))
    }

    /// Render as a TOML document
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        toml::to_string_pretty(self).map_err(|e| PipelineError::Format(e.to_string()))
    }

    /// Validate weights and export rules
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.weights.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

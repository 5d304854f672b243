//! Export rule configuration

use crate::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in export rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Score at or above the threshold plus one direct, non-excluded entry
    ScoreThreshold,

    /// Per-method export dispositions with pruning of failing methods
    DetectionMethodAnnotation,
}

impl RuleKind {
    /// Configuration name of the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ScoreThreshold => "score_threshold",
            RuleKind::DetectionMethodAnnotation => "detection_method_annotation",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the export rule chain
///
/// # Examples
///
/// ```
/// use interlink_export::{ExportConfig, RuleKind};
///
/// let config = ExportConfig::default();
/// assert_eq!(config.score_threshold, 0.43);
/// assert_eq!(config.rules, vec![RuleKind::ScoreThreshold, RuleKind::DetectionMethodAnnotation]);
///
/// let config = ExportConfig::lenient();
/// assert_eq!(config.score_threshold, 0.40);
/// assert!(config.ignore_missing_annotations);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Minimum cluster score accepted by the score rule
    /// Default: 0.43
    pub score_threshold: f64,

    /// Detection method that never counts as qualifying evidence for the score rule
    /// Default: MI:0403 (colocalization)
    pub excluded_method_id: String,

    /// Treat methods without an annotation as exportable instead of blocked
    /// Default: false
    #[serde(default)]
    pub ignore_missing_annotations: bool,

    /// Rules evaluated in order; the first acceptance wins
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleKind>,
}

fn default_rules() -> Vec<RuleKind> {
    vec![RuleKind::ScoreThreshold, RuleKind::DetectionMethodAnnotation]
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.43,
            excluded_method_id: "MI:0403".to_string(),
            ignore_missing_annotations: false,
            rules: default_rules(),
        }
    }
}

impl ExportConfig {
    /// Higher threshold, annotations only count when present
    pub fn strict() -> Self {
        Self {
            score_threshold: 0.6,
            ..Self::default()
        }
    }

    /// Lower threshold, unannotated methods are exportable
    pub fn lenient() -> Self {
        Self {
            score_threshold: 0.40,
            ignore_missing_annotations: true,
            ..Self::default()
        }
    }

    /// Check the configuration before any cluster is evaluated
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.score_threshold.is_finite() || self.score_threshold < 0.0 {
            return Err(ExportError::InvalidThreshold(self.score_threshold));
        }
        if self.excluded_method_id.trim().is_empty() {
            return Err(ExportError::BlankExcludedMethod);
        }
        if self.rules.is_empty() {
            return Err(ExportError::NoRules);
        }
        Ok(())
    }
}

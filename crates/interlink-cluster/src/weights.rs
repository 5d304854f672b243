//! Term weights used for scoring

use crate::ClusterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-term weights and scoring constants
///
/// # Examples
///
/// ```
/// use interlink_cluster::WeightTable;
///
/// let weights = WeightTable::default();
/// assert_eq!(weights.method_weights.get("MI:0018"), Some(&1.0));
/// assert!(weights.validate().is_ok());
///
/// let custom = WeightTable::empty()
///     .with_method_weight("MI:0018", 0.8)
///     .with_type_weight("MI:0915", 0.5);
/// assert_eq!(custom.type_weights.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// Weight per interaction detection method term
    #[serde(default)]
    pub method_weights: BTreeMap<String, f64>,

    /// Weight per interaction type term
    #[serde(default)]
    pub type_weights: BTreeMap<String, f64>,

    /// Weight for a method with no weighted ancestor, or no method at all
    /// Default: 0.05
    #[serde(default = "default_unknown_weight")]
    pub unknown_method_weight: f64,

    /// Weight for an interaction type with no weighted ancestor
    /// Default: 0.05
    #[serde(default = "default_unknown_weight")]
    pub unknown_type_weight: f64,

    /// Added once per distinct publication in a cluster
    /// Default: 0.1
    #[serde(default = "default_publication_bonus")]
    pub publication_bonus: f64,

    /// Factor applied to evidence combinations backed by at least one
    /// non-spoke-expanded interaction
    /// Default: 1.5
    #[serde(default = "default_direct_multiplier")]
    pub direct_evidence_multiplier: f64,
}

fn default_unknown_weight() -> f64 {
    0.05
}

fn default_publication_bonus() -> f64 {
    0.1
}

fn default_direct_multiplier() -> f64 {
    1.5
}

impl Default for WeightTable {
    /// PSI-MI weights for common methods and types
    ///
    /// - Methods: biophysical, biochemical and two hybrid 1.0; complementation
    ///   and affinity chromatography 0.66; imaging 0.33; genetic interference 0.1
    /// - Types: direct interaction 1.0, physical association 0.66, association 0.33
    fn default() -> Self {
        let method_weights = [
            ("MI:0013", 1.0),  // biophysical
            ("MI:0018", 1.0),  // two hybrid
            ("MI:0401", 1.0),  // biochemical
            ("MI:0090", 0.66), // protein complementation assay
            ("MI:0004", 0.66), // affinity chromatography technology
            ("MI:0428", 0.33), // imaging technique
            ("MI:0254", 0.1),  // genetic interference
        ];
        let type_weights = [
            ("MI:0407", 1.0),  // direct interaction
            ("MI:0915", 0.66), // physical association
            ("MI:0914", 0.33), // association
            ("MI:0403", 0.33), // colocalization
        ];
        Self {
            method_weights: method_weights.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
            type_weights: type_weights.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
            unknown_method_weight: default_unknown_weight(),
            unknown_type_weight: default_unknown_weight(),
            publication_bonus: default_publication_bonus(),
            direct_evidence_multiplier: default_direct_multiplier(),
        }
    }
}

impl WeightTable {
    /// Table with no term weights and the default constants
    pub fn empty() -> Self {
        Self {
            method_weights: BTreeMap::new(),
            type_weights: BTreeMap::new(),
            ..Self::default()
        }
    }

    /// Set the weight of a detection method term
    pub fn with_method_weight(mut self, term: impl Into<String>, weight: f64) -> Self {
        self.method_weights.insert(term.into(), weight);
        self
    }

    /// Set the weight of an interaction type term
    pub fn with_type_weight(mut self, term: impl Into<String>, weight: f64) -> Self {
        self.type_weights.insert(term.into(), weight);
        self
    }

    /// Check every weight and constant
    ///
    /// Weights must be finite and non-negative, the direct-evidence multiplier
    /// at least 1.0. Either violation would let extra evidence lower a score.
    pub fn validate(&self) -> Result<(), ClusterError> {
        for (term, weight) in self.method_weights.iter().chain(self.type_weights.iter()) {
            if term.trim().is_empty() {
                return Err(ClusterError::BlankTerm);
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ClusterError::InvalidWeight {
                    term: term.clone(),
                    value: *weight,
                });
            }
        }

        check_at_least("unknown_method_weight", self.unknown_method_weight, 0.0)?;
        check_at_least("unknown_type_weight", self.unknown_type_weight, 0.0)?;
        check_at_least("publication_bonus", self.publication_bonus, 0.0)?;
        check_at_least("direct_evidence_multiplier", self.direct_evidence_multiplier, 1.0)?;
        Ok(())
    }
}

fn check_at_least(name: &'static str, value: f64, minimum: f64) -> Result<(), ClusterError> {
    if value.is_finite() && value >= minimum {
        Ok(())
    } else {
        Err(ClusterError::InvalidParameter { name, value, minimum })
    }
}

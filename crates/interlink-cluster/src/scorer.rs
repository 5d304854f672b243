//! Cluster scoring

use crate::{ClusterError, WeightTable};
use interlink_domain::{EvidenceCluster, TermId};
use interlink_ontology::OntologyLookup;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Scores evidence clusters from a validated weight table
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: WeightTable,
    lookup: Arc<OntologyLookup>,
}

impl Scorer {
    /// Create a scorer, validating the weight table first
    pub fn new(weights: WeightTable, lookup: Arc<OntologyLookup>) -> Result<Self, ClusterError> {
        weights.validate()?;
        Ok(Self { weights, lookup })
    }

    /// The weight table in use
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Weight of a detection method; a missing method gets the unknown weight
    pub fn method_weight(&self, method: Option<&TermId>) -> f64 {
        match method {
            Some(method) => self
                .inherited_weight(&self.weights.method_weights, method)
                .unwrap_or(self.weights.unknown_method_weight),
            None => self.weights.unknown_method_weight,
        }
    }

    /// Weight of an interaction type
    pub fn type_weight(&self, interaction_type: &TermId) -> f64 {
        self.inherited_weight(&self.weights.type_weights, interaction_type)
            .unwrap_or(self.weights.unknown_type_weight)
    }

    /// Score a cluster, reusing its cached score when the entries are unchanged
    pub fn score(&self, cluster: &mut EvidenceCluster) -> f64 {
        cluster.score_with(|c| self.compute(c))
    }

    /// Compute a cluster's score from scratch
    ///
    /// Each distinct (method, type, publication) combination contributes its
    /// method and type weight once, plus the multiplier's excess for every
    /// distinct direct interaction behind it. A combination backed by one
    /// direct interaction therefore scores `weight × multiplier`.
    pub fn compute(&self, cluster: &EvidenceCluster) -> f64 {
        // Distinct (method, type, publication) -> distinct direct interactions
        let mut combinations: BTreeMap<(Option<&TermId>, &TermId, &str), BTreeSet<&str>> = BTreeMap::new();
        for entry in cluster.entries() {
            let direct = combinations
                .entry((entry.detection_method.as_ref(), &entry.interaction_type, entry.publication.as_str()))
                .or_default();
            if entry.is_direct() {
                direct.insert(entry.interaction_id.as_str());
            }
        }

        let excess = self.weights.direct_evidence_multiplier - 1.0;
        let evidence: f64 = combinations
            .iter()
            .map(|((method, interaction_type, _), direct)| {
                let weight = self.method_weight(*method) * self.type_weight(interaction_type);
                weight * (1.0 + excess * direct.len() as f64)
            })
            .sum();

        let publications = cluster.publications().len() as f64;
        evidence + self.weights.publication_bonus * publications
    }

    /// Exact weight, else the highest weight at the nearest weighted ancestor level
    fn inherited_weight(&self, table: &BTreeMap<String, f64>, term: &TermId) -> Option<f64> {
        if let Some(weight) = table.get(term.as_str()) {
            return Some(*weight);
        }
        self.lookup
            .ancestors_by_distance(term)
            .into_iter()
            .skip(1)
            .find_map(|level: BTreeSet<TermId>| {
                level
                    .iter()
                    .filter_map(|ancestor| table.get(ancestor.as_str()).copied())
                    .fold(None, |best: Option<f64>, w| Some(best.map_or(w, |b| b.max(w))))
            })
    }
}

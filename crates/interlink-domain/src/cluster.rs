//! Evidence clusters - all binary evidence for one unordered interactor pair
//!
//! A cluster owns a single ordered list of [`EvidenceEntry`]. Every lookup
//! (publications, methods, types, interactions) is derived from that list on
//! demand, so removing entries can never leave orphaned references behind.
//! The cached score is dropped whenever the entry list changes.

use crate::{BinaryInteraction, InteractorRef, TermId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Order-independent key of an interactor pair
///
/// `PairKey::new("A", "B") == PairKey::new("B", "A")`; a self-interaction has
/// a single-element key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PairKey {
    /// Two distinct accessions, stored in ordinal order
    Pair(String, String),

    /// Self-interaction
    Single(String),
}

impl PairKey {
    /// Build the key for two accessions
    ///
    /// # Examples
    ///
    /// ```
    /// use interlink_domain::PairKey;
    ///
    /// assert_eq!(PairKey::new("Q9Y6K9", "O14920"), PairKey::new("O14920", "Q9Y6K9"));
    /// assert_eq!(PairKey::new("P12345", "P12345"), PairKey::Single("P12345".to_string()));
    /// ```
    pub fn new(a: &str, b: &str) -> Self {
        if a == b {
            PairKey::Single(a.to_string())
        } else if a < b {
            PairKey::Pair(a.to_string(), b.to_string())
        } else {
            PairKey::Pair(b.to_string(), a.to_string())
        }
    }

    /// Accessions in the key, in ordinal order
    pub fn accessions(&self) -> Vec<&str> {
        match self {
            PairKey::Pair(a, b) => vec![a.as_str(), b.as_str()],
            PairKey::Single(a) => vec![a.as_str()],
        }
    }

    /// True for self-interaction keys
    pub fn is_self(&self) -> bool {
        matches!(self, PairKey::Single(_))
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairKey::Pair(a, b) => write!(f, "{}-{}", a, b),
            PairKey::Single(a) => f.write_str(a),
        }
    }
}

/// One piece of binary evidence contributing to a cluster
///
/// Field order defines the canonical entry order inside a cluster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvidenceEntry {
    /// Originating interaction record
    pub interaction_id: String,

    /// Publication identifier
    pub publication: String,

    /// Detection method (curated or inferred); `None` when neither was possible
    pub detection_method: Option<TermId>,

    /// Interaction type
    pub interaction_type: TermId,

    /// Derived from an n-ary record by fan-out
    pub spoke_expanded: bool,

    /// Negative evidence
    pub negative: bool,
}

impl EvidenceEntry {
    /// Build an entry from a binary interaction and its resolved method
    pub fn from_binary(binary: &BinaryInteraction, detection_method: Option<TermId>) -> Self {
        Self {
            interaction_id: binary.interaction_id.clone(),
            publication: binary.publication.clone(),
            detection_method,
            interaction_type: binary.interaction_type.clone(),
            spoke_expanded: binary.spoke_expanded,
            negative: binary.negative,
        }
    }

    /// True when the entry is not the product of fan-out expansion
    pub fn is_direct(&self) -> bool {
        !self.spoke_expanded
    }
}

/// Descriptive data about one side of a cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractorSummary {
    /// External accession (never blank)
    pub accession: String,

    /// Display label
    pub label: Option<String>,

    /// Preferred gene name
    pub gene_name: Option<String>,

    /// NCBI taxonomy identifier
    pub taxid: Option<i32>,
}

impl InteractorSummary {
    /// Summarise an interactor, or `None` when its accession is unresolved
    pub fn from_interactor(interactor: &InteractorRef) -> Option<Self> {
        let accession = interactor.resolved_accession()?;
        Some(Self {
            accession: accession.to_string(),
            label: interactor.label.clone(),
            gene_name: interactor.gene_name.clone(),
            taxid: interactor.taxid,
        })
    }
}

/// Aggregate of all evidence for one unordered pair of interactors
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceCluster {
    key: PairKey,
    interactor_a: InteractorSummary,
    interactor_b: InteractorSummary,
    entries: Vec<EvidenceEntry>,
    score: Option<f64>,
}

impl EvidenceCluster {
    /// Create an empty cluster; sides are stored in key order
    pub fn new(a: InteractorSummary, b: InteractorSummary) -> Self {
        let key = PairKey::new(&a.accession, &b.accession);
        let (interactor_a, interactor_b) = if a.accession <= b.accession { (a, b) } else { (b, a) };
        Self {
            key,
            interactor_a,
            interactor_b,
            entries: Vec::new(),
            score: None,
        }
    }

    /// Pair key
    pub fn key(&self) -> &PairKey {
        &self.key
    }

    /// Side with the ordinal-first accession
    pub fn interactor_a(&self) -> &InteractorSummary {
        &self.interactor_a
    }

    /// Side with the ordinal-last accession (same as `a` for self-interactions)
    pub fn interactor_b(&self) -> &InteractorSummary {
        &self.interactor_b
    }

    /// Evidence entries
    pub fn entries(&self) -> &[EvidenceEntry] {
        &self.entries
    }

    /// Number of evidence entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cluster holds no evidence
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True for self-interaction clusters
    pub fn is_self(&self) -> bool {
        self.key.is_self()
    }

    /// True when any entry is negative evidence
    pub fn is_negative(&self) -> bool {
        self.entries.iter().any(|e| e.negative)
    }

    /// True when both sides carry a non-blank accession
    pub fn is_resolvable(&self) -> bool {
        !self.interactor_a.accession.trim().is_empty() && !self.interactor_b.accession.trim().is_empty()
    }

    /// Append an entry; invalidates the cached score
    pub fn push(&mut self, entry: EvidenceEntry) {
        self.entries.push(entry);
        self.score = None;
    }

    /// Keep only entries matching the predicate; returns how many were removed
    ///
    /// The cached score is dropped if anything was removed.
    pub fn retain_entries<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&EvidenceEntry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|e| keep(e));
        let removed = before - self.entries.len();
        if removed > 0 {
            self.score = None;
        }
        removed
    }

    /// Fold another cluster for the same pair into this one
    ///
    /// Returns the other cluster untouched if its key differs.
    pub fn merge(&mut self, other: EvidenceCluster) -> Result<(), EvidenceCluster> {
        if other.key != self.key {
            return Err(other);
        }
        if !other.entries.is_empty() {
            self.entries.extend(other.entries);
            self.score = None;
        }
        Ok(())
    }

    /// Put entries in canonical order
    ///
    /// Entry order carries no meaning; sorting only makes output reproducible.
    pub fn sort_entries(&mut self) {
        self.entries.sort();
    }

    /// Cached score, if computed since the last change
    pub fn cached_score(&self) -> Option<f64> {
        self.score
    }

    /// Return the cached score, computing and caching it first if needed
    pub fn score_with<F>(&mut self, compute: F) -> f64
    where
        F: FnOnce(&EvidenceCluster) -> f64,
    {
        if let Some(score) = self.score {
            return score;
        }
        let score = compute(self);
        self.score = Some(score);
        score
    }

    /// Distinct publications
    pub fn publications(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.publication.as_str()).collect()
    }

    /// Distinct detection methods (entries without a method are skipped)
    pub fn detection_methods(&self) -> BTreeSet<&TermId> {
        self.entries.iter().filter_map(|e| e.detection_method.as_ref()).collect()
    }

    /// Distinct interaction types
    pub fn interaction_types(&self) -> BTreeSet<&TermId> {
        self.entries.iter().map(|e| &e.interaction_type).collect()
    }

    /// Distinct originating interactions
    pub fn interaction_ids(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.interaction_id.as_str()).collect()
    }

    /// Distinct originating interactions per detection method
    pub fn interactions_by_method(&self) -> BTreeMap<Option<&TermId>, BTreeSet<&str>> {
        let mut by_method: BTreeMap<Option<&TermId>, BTreeSet<&str>> = BTreeMap::new();
        for entry in &self.entries {
            by_method
                .entry(entry.detection_method.as_ref())
                .or_default()
                .insert(entry.interaction_id.as_str());
        }
        by_method
    }

    /// De-duplicated (method, type, publication) combinations for display
    pub fn distinct_evidence(&self) -> BTreeSet<(Option<&TermId>, &TermId, &str)> {
        self.entries
            .iter()
            .map(|e| (e.detection_method.as_ref(), &e.interaction_type, e.publication.as_str()))
            .collect()
    }

    /// True when at least one entry is not spoke-expanded
    pub fn has_direct_evidence(&self) -> bool {
        self.entries.iter().any(EvidenceEntry::is_direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(acc: &str) -> InteractorSummary {
        InteractorSummary {
            accession: acc.to_string(),
            label: Some(acc.to_lowercase()),
            gene_name: None,
            taxid: Some(9606),
        }
    }

    fn entry(interaction: &str, publication: &str, method: Option<&str>) -> EvidenceEntry {
        EvidenceEntry {
            interaction_id: interaction.to_string(),
            publication: publication.to_string(),
            detection_method: method.map(TermId::new),
            interaction_type: TermId::new("MI:0915"),
            spoke_expanded: false,
            negative: false,
        }
    }

    #[test]
    fn test_sides_follow_key_order() {
        let cluster = EvidenceCluster::new(summary("Q2"), summary("P1"));
        assert_eq!(cluster.key(), &PairKey::Pair("P1".to_string(), "Q2".to_string()));
        assert_eq!(cluster.interactor_a().accession, "P1");
        assert_eq!(cluster.interactor_b().accession, "Q2");
    }

    #[test]
    fn test_self_cluster_has_single_key() {
        let cluster = EvidenceCluster::new(summary("P1"), summary("P1"));
        assert!(cluster.is_self());
        assert_eq!(cluster.key().accessions(), vec!["P1"]);
    }

    #[test]
    fn test_removal_leaves_no_orphans() {
        let mut cluster = EvidenceCluster::new(summary("P1"), summary("Q2"));
        cluster.push(entry("i1", "pub1", Some("MI:0018")));
        cluster.push(entry("i2", "pub2", Some("MI:0096")));
        cluster.push(entry("i3", "pub1", Some("MI:0096")));

        let removed = cluster.retain_entries(|e| e.detection_method != Some(TermId::new("MI:0096")));
        assert_eq!(removed, 2);
        assert_eq!(cluster.publications().into_iter().collect::<Vec<_>>(), vec!["pub1"]);
        assert_eq!(cluster.detection_methods().len(), 1);
        assert_eq!(cluster.interaction_ids().into_iter().collect::<Vec<_>>(), vec!["i1"]);
    }

    #[test]
    fn test_score_cache_invalidation() {
        let mut cluster = EvidenceCluster::new(summary("P1"), summary("Q2"));
        cluster.push(entry("i1", "pub1", Some("MI:0018")));

        let first = cluster.score_with(|c| c.len() as f64);
        assert_eq!(first, 1.0);
        assert_eq!(cluster.cached_score(), Some(1.0));

        cluster.push(entry("i2", "pub2", Some("MI:0018")));
        assert_eq!(cluster.cached_score(), None);
        assert_eq!(cluster.score_with(|c| c.len() as f64), 2.0);

        // A no-op retain keeps the cache
        assert_eq!(cluster.retain_entries(|_| true), 0);
        assert_eq!(cluster.cached_score(), Some(2.0));
    }

    #[test]
    fn test_merge_requires_same_key() {
        let mut left = EvidenceCluster::new(summary("P1"), summary("Q2"));
        left.push(entry("i1", "pub1", None));
        let mut right = EvidenceCluster::new(summary("Q2"), summary("P1"));
        right.push(entry("i2", "pub2", None));
        let other = EvidenceCluster::new(summary("P1"), summary("Z9"));

        assert!(left.merge(right).is_ok());
        assert_eq!(left.len(), 2);
        assert!(left.merge(other).is_err());
    }

    #[test]
    fn test_interactions_by_method_counts_distinct_interactions() {
        let mut cluster = EvidenceCluster::new(summary("P1"), summary("Q2"));
        cluster.push(entry("i1", "pub1", Some("MI:0018")));
        cluster.push(entry("i1", "pub1", Some("MI:0018")));
        cluster.push(entry("i2", "pub1", Some("MI:0018")));
        cluster.push(entry("i3", "pub1", None));

        let by_method = cluster.interactions_by_method();
        let m = TermId::new("MI:0018");
        assert_eq!(by_method.get(&Some(&m)).map(|s| s.len()), Some(2));
        assert_eq!(by_method.get(&None).map(|s| s.len()), Some(1));
        assert_eq!(cluster.distinct_evidence().len(), 2);
    }

    #[test]
    fn test_negative_and_direct_flags() {
        let mut cluster = EvidenceCluster::new(summary("P1"), summary("Q2"));
        let mut spoke = entry("i1", "pub1", None);
        spoke.spoke_expanded = true;
        cluster.push(spoke);
        assert!(!cluster.has_direct_evidence());
        assert!(!cluster.is_negative());

        let mut negative = entry("i2", "pub1", None);
        negative.negative = true;
        cluster.push(negative);
        assert!(cluster.has_direct_evidence());
        assert!(cluster.is_negative());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the key never depends on argument order
        #[test]
        fn test_pair_key_symmetry(a in "[A-Z][0-9A-Z]{5}", b in "[A-Z][0-9A-Z]{5}") {
            prop_assert_eq!(PairKey::new(&a, &b), PairKey::new(&b, &a));
            prop_assert_eq!(PairKey::new(&a, &b).is_self(), a == b);
        }
    }
}

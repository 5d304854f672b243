//! Evidence clustering

use interlink_domain::{BinaryInteraction, EvidenceCluster, EvidenceEntry, InteractorSummary, PairKey, TermId};
use interlink_ontology::OntologyLookup;
use rayon::prelude::*;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::AddAssign;
use std::sync::Arc;

/// Clusters keyed by unordered accession pair
pub type ClusterMap = BTreeMap<PairKey, EvidenceCluster>;

/// Counters collected while clustering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterStats {
    /// Binary interactions examined
    pub binaries_seen: usize,

    /// Binary interactions skipped because an interactor had no accession
    pub unresolved: usize,

    /// Entries whose detection method was taken from the participants
    pub methods_inferred: usize,

    /// Entries left without any detection method
    pub methods_missing: usize,
}

impl AddAssign for ClusterStats {
    fn add_assign(&mut self, other: Self) {
        self.binaries_seen += other.binaries_seen;
        self.unresolved += other.unresolved;
        self.methods_inferred += other.methods_inferred;
        self.methods_missing += other.methods_missing;
    }
}

/// Clusters plus the counters gathered while building them
#[derive(Debug, Clone, Default)]
pub struct ClusterOutcome {
    /// Clusters with entries in canonical order
    pub clusters: ClusterMap,

    /// Clustering counters
    pub stats: ClusterStats,
}

/// Groups binary interactions by interactor pair
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use interlink_cluster::Clusterer;
/// use interlink_domain::{BinaryInteraction, ExperimentalRole, InteractionRecord, InteractorRef, Participant};
/// use interlink_ontology::{OntologyLookup, TermGraph};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let lookup = Arc::new(OntologyLookup::new(TermGraph::from_terms(Vec::new())?)?);
/// let clusterer = Clusterer::new(lookup);
///
/// let x = Participant::new(InteractorRef::new("x").with_accession("P12345"), ExperimentalRole::Bait);
/// let y = Participant::new(InteractorRef::new("y").with_accession("Q67890"), ExperimentalRole::Prey);
/// let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915").with_detection_method("MI:0018");
///
/// let forward = BinaryInteraction::from_record(&record, x.clone(), y.clone(), false);
/// let reverse = BinaryInteraction::from_record(&record, y, x, false);
///
/// let outcome = clusterer.cluster(&[forward, reverse]);
/// assert_eq!(outcome.clusters.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Clusterer {
    lookup: Arc<OntologyLookup>,
}

impl Clusterer {
    /// Create a clusterer backed by an ontology lookup
    pub fn new(lookup: Arc<OntologyLookup>) -> Self {
        Self { lookup }
    }

    /// Cluster binary interactions in a single pass
    pub fn cluster<'a, I>(&self, binaries: I) -> ClusterOutcome
    where
        I: IntoIterator<Item = &'a BinaryInteraction>,
    {
        let mut clusters = ClusterMap::new();
        let mut stats = ClusterStats::default();
        for binary in binaries {
            self.add(&mut clusters, &mut stats, binary);
        }
        finish(clusters, stats)
    }

    /// Cluster binary interactions on the rayon pool
    ///
    /// Partial maps are merged by concatenating entries; entries are then put
    /// in canonical order, so the result equals [`Clusterer::cluster`].
    pub fn cluster_parallel(&self, binaries: &[BinaryInteraction]) -> ClusterOutcome {
        let (clusters, stats) = binaries
            .par_iter()
            .fold(
                || (ClusterMap::new(), ClusterStats::default()),
                |(mut clusters, mut stats), binary| {
                    self.add(&mut clusters, &mut stats, binary);
                    (clusters, stats)
                },
            )
            .reduce(
                || (ClusterMap::new(), ClusterStats::default()),
                |(left, mut left_stats), (right, right_stats)| {
                    left_stats += right_stats;
                    (merge_cluster_maps(left, right), left_stats)
                },
            );
        finish(clusters, stats)
    }

    /// Detection method for a binary interaction
    ///
    /// The interaction's own method wins. Otherwise the participants' methods
    /// are used: a single method as is, several through their lowest common
    /// ancestor. Returns `None` when nothing can be inferred.
    pub fn infer_method(&self, binary: &BinaryInteraction) -> Option<TermId> {
        if let Some(method) = binary.detection_method.as_ref().filter(|m| !m.is_blank()) {
            return Some(method.clone());
        }
        match binary.sibling_detection_methods.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            several => self.lookup.lowest_common_ancestor(several),
        }
    }

    fn add(&self, clusters: &mut ClusterMap, stats: &mut ClusterStats, binary: &BinaryInteraction) {
        stats.binaries_seen += 1;

        let (Some(a), Some(b)) = (
            InteractorSummary::from_interactor(&binary.a.interactor),
            InteractorSummary::from_interactor(&binary.b.interactor),
        ) else {
            stats.unresolved += 1;
            tracing::debug!(
                interaction = %binary.interaction_id,
                a = %binary.a.interactor.id,
                b = %binary.b.interactor.id,
                "Skipping binary interaction with unresolved accession"
            );
            return;
        };

        let had_method = binary.detection_method.as_ref().is_some_and(|m| !m.is_blank());
        let method = self.infer_method(binary);
        match (&method, had_method) {
            (None, _) => stats.methods_missing += 1,
            (Some(inferred), false) => {
                stats.methods_inferred += 1;
                tracing::debug!(
                    interaction = %binary.interaction_id,
                    method = %inferred,
                    "Inferred detection method from participants"
                );
            }
            (Some(_), true) => {}
        }

        let key = PairKey::new(&a.accession, &b.accession);
        clusters
            .entry(key)
            .or_insert_with(|| EvidenceCluster::new(a, b))
            .push(EvidenceEntry::from_binary(binary, method));
    }
}

/// Merge two cluster maps, concatenating the entries of shared keys
///
/// Each right-hand cluster is filed under its own pair key, so a cluster
/// stored under a foreign key is moved rather than lost.
pub fn merge_cluster_maps(mut left: ClusterMap, right: ClusterMap) -> ClusterMap {
    for (key, cluster) in right {
        if &key != cluster.key() {
            tracing::warn!(stored = %key, key = %cluster.key(), "Refiling cluster stored under a foreign key");
        }
        insert_cluster(&mut left, cluster);
    }
    left
}

fn insert_cluster(clusters: &mut ClusterMap, cluster: EvidenceCluster) {
    match clusters.entry(cluster.key().clone()) {
        Entry::Vacant(slot) => {
            slot.insert(cluster);
        }
        Entry::Occupied(mut slot) => {
            let merged = slot.get_mut().merge(cluster);
            debug_assert!(merged.is_ok(), "map key is taken from the cluster");
        }
    }
}

fn finish(mut clusters: ClusterMap, stats: ClusterStats) -> ClusterOutcome {
    for cluster in clusters.values_mut() {
        cluster.sort_entries();
    }
    ClusterOutcome { clusters, stats }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use interlink_domain::{ExperimentalRole, InteractionRecord, InteractorRef, Participant};
    use interlink_ontology::TermGraph;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_cluster_key_symmetry(
            pairs in prop::collection::vec(("[A-D][0-9]", "[A-D][0-9]", any::<bool>()), 1..20)
        ) {
            let lookup = Arc::new(OntologyLookup::new(TermGraph::from_terms(Vec::new()).unwrap()).unwrap());
            let clusterer = Clusterer::new(lookup);
            let record = InteractionRecord::new("i1", "pub1", "MI:0915");
            let side = |acc: &str| Participant::new(InteractorRef::new(acc).with_accession(acc), ExperimentalRole::Neutral);

            let forward: Vec<BinaryInteraction> = pairs
                .iter()
                .map(|(a, b, _)| BinaryInteraction::from_record(&record, side(a), side(b), false))
                .collect();
            let mixed: Vec<BinaryInteraction> = pairs
                .iter()
                .map(|(a, b, swap)| {
                    let (first, second) = if *swap { (b, a) } else { (a, b) };
                    BinaryInteraction::from_record(&record, side(first), side(second), false)
                })
                .collect();

            let left = clusterer.cluster(&forward).clusters;
            let right = clusterer.cluster(&mixed).clusters;
            prop_assert_eq!(left.keys().collect::<Vec<_>>(), right.keys().collect::<Vec<_>>());
            for (key, cluster) in &left {
                prop_assert_eq!(cluster.len(), right[key].len());
            }
        }
    }
}

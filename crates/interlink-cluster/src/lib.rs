//! Interlink Cluster
//!
//! Groups binary interactions into per-pair evidence clusters and scores them.
//!
//! # Clustering
//!
//! [`Clusterer`] walks binary interactions once. Records whose interactors have
//! no external accession are skipped. Every other record adds one
//! [`EvidenceEntry`](interlink_domain::EvidenceEntry) to the cluster keyed by
//! the unordered accession pair. A record without an interaction detection
//! method borrows one from its participants: the single participant method if
//! there is one, otherwise their lowest common ancestor in the vocabulary.
//!
//! # Scoring
//!
//! [`Scorer`] computes an unnormalised weighted sum over the distinct
//! (method, type, publication) combinations of a cluster:
//!
//! ```text
//! score = Σ method_weight × type_weight × (direct_multiplier if any direct entry)
//!       + publication_bonus × distinct publications
//! ```
//!
//! Weights for terms missing from the [`WeightTable`] come from the nearest
//! weighted ancestor, then from the table's unknown weight. Adding evidence
//! never lowers a score.

#![warn(missing_docs)]

mod clusterer;
mod error;
mod scorer;
mod weights;

pub use clusterer::{merge_cluster_maps, ClusterMap, ClusterOutcome, ClusterStats, Clusterer};
pub use error::ClusterError;
pub use scorer::Scorer;
pub use weights::WeightTable;

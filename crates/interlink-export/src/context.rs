//! Read-only lookup state shared by all rules during one export run

use interlink_domain::{EvidenceCluster, TermId};
use std::collections::{BTreeMap, BTreeSet};

/// Detection method and interaction type of one source interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionTerms {
    /// Detection method, possibly inferred
    pub detection_method: Option<TermId>,

    /// Interaction type
    pub interaction_type: TermId,
}

/// Per-run lookup tables built once from the clustered evidence
#[derive(Debug, Clone, Default)]
pub struct ExportContext {
    terms: BTreeMap<String, InteractionTerms>,
    spoke_expanded: BTreeSet<String>,
}

impl ExportContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the context from every entry of the given clusters
    pub fn from_clusters<'a, I>(clusters: I) -> Self
    where
        I: IntoIterator<Item = &'a EvidenceCluster>,
    {
        let mut context = Self::new();
        for cluster in clusters {
            for entry in cluster.entries() {
                context.record(
                    &entry.interaction_id,
                    entry.detection_method.clone(),
                    entry.interaction_type.clone(),
                    entry.spoke_expanded,
                );
            }
        }
        context
    }

    /// Register one interaction
    ///
    /// The first method and type seen for an id are kept. An interaction is
    /// spoke-expanded if any of its binary records was.
    pub fn record(
        &mut self,
        interaction_id: &str,
        detection_method: Option<TermId>,
        interaction_type: TermId,
        spoke_expanded: bool,
    ) {
        self.terms
            .entry(interaction_id.to_string())
            .or_insert(InteractionTerms {
                detection_method,
                interaction_type,
            });
        if spoke_expanded {
            self.spoke_expanded.insert(interaction_id.to_string());
        }
    }

    /// Method and type of an interaction
    pub fn terms_of(&self, interaction_id: &str) -> Option<&InteractionTerms> {
        self.terms.get(interaction_id)
    }

    /// True if the interaction was expanded from more than two participants
    pub fn is_spoke_expanded(&self, interaction_id: &str) -> bool {
        self.spoke_expanded.contains(interaction_id)
    }

    /// Number of interactions known to the context
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no interaction was recorded
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

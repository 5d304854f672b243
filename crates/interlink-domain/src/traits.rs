//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the export core and the
//! infrastructure around it. Implementations live in other crates.

use crate::{InteractionRecord, TermId};
use std::collections::BTreeSet;

/// Read-only access to a controlled-vocabulary graph
///
/// Terms form a directed acyclic graph where each term has zero or more
/// parents. Implemented by `interlink-ontology`.
pub trait OntologyGraph {
    /// Direct parents of a term (empty for roots and unknown terms)
    fn parents_of(&self, term: &TermId) -> BTreeSet<TermId>;

    /// Every term identifier known to the graph
    fn all_term_ids(&self) -> BTreeSet<TermId>;

    /// True if the graph knows the term
    fn contains(&self, term: &TermId) -> bool {
        self.all_term_ids().contains(term)
    }
}

/// Object store holding curated interaction records
///
/// The export core only reads from it; saving exists so loaders can populate
/// a store.
pub trait InteractionStore {
    /// Error type for store operations
    type Error;

    /// Load one record by identifier
    fn load_interaction(&self, id: &str) -> Result<Option<InteractionRecord>, Self::Error>;

    /// Save (insert or replace) a record
    fn save_interaction(&mut self, record: InteractionRecord) -> Result<(), Self::Error>;

    /// Identifiers of every stored record
    fn interaction_ids(&self) -> Result<Vec<String>, Self::Error>;
}

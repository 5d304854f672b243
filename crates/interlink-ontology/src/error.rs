//! Ontology error types

use interlink_domain::TermId;
use thiserror::Error;

/// Errors raised while building a term graph or lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OntologyError {
    /// The same term identifier was supplied twice
    #[error("Duplicate term: {0}")]
    DuplicateTerm(TermId),

    /// A term names a parent that is not part of the graph
    #[error("Term {term} references unknown parent {parent}")]
    UnknownParent {
        /// Child term
        term: TermId,
        /// Missing parent
        parent: TermId,
    },

    /// Parent edges form a cycle through the given term
    #[error("Cycle detected through term {0}")]
    Cycle(TermId),

    /// A term identifier was empty
    #[error("Blank term identifier")]
    BlankTerm,
}

//! Interlink Ontology
//!
//! Controlled-vocabulary lookups for the export pipeline.
//!
//! The crate provides:
//! - [`TermGraph`]: an in-memory term DAG implementing
//!   [`OntologyGraph`](interlink_domain::traits::OntologyGraph)
//! - [`OntologyLookup`]: ancestor sets, term depths and lowest-common-ancestor
//!   queries over any `OntologyGraph`
//!
//! # Examples
//!
//! ```
//! use interlink_ontology::{OntologyLookup, Term, TermGraph};
//! use interlink_domain::TermId;
//!
//! let graph = TermGraph::from_terms(vec![
//!     Term::new("MI:0001"),
//!     Term::new("MI:0045").with_parent("MI:0001"),
//!     Term::new("MI:0018").with_parent("MI:0045"),
//!     Term::new("MI:0096").with_parent("MI:0045"),
//! ])?;
//! let lookup = OntologyLookup::new(graph)?;
//!
//! let lca = lookup.lowest_common_ancestor(&[TermId::new("MI:0018"), TermId::new("MI:0096")]);
//! assert_eq!(lca, Some(TermId::new("MI:0045")));
//! # Ok::<(), interlink_ontology::OntologyError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod graph;
mod lookup;

pub use error::OntologyError;
pub use graph::{Term, TermGraph};
pub use lookup::OntologyLookup;

//! Interlink Domain Layer
//!
//! Core data model for the binary-interaction export pipeline. This crate has
//! no third-party dependencies: it defines the value objects every other crate
//! passes around, and the traits behind which external collaborators (the
//! controlled-vocabulary graph and the interaction store) are hidden.
//!
//! ## Key Concepts
//!
//! - **Interaction record**: one curated evidence item with one or more participants
//! - **Binary interaction**: an interaction reduced to exactly two participants
//! - **Evidence cluster**: all binary evidence observed for one unordered pair of interactors
//! - **Export disposition**: per-term policy deciding whether evidence may be republished
//!
//! ## Lifecycle
//!
//! Interaction records are read-only inputs. Binary interactions and evidence
//! clusters are created, mutated and discarded within a single export run.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod cluster;
pub mod disposition;
pub mod interaction;
pub mod interactor;
pub mod participant;
pub mod term;
pub mod traits;

// Re-exports for convenience
pub use binary::BinaryInteraction;
pub use cluster::{EvidenceCluster, EvidenceEntry, InteractorSummary, PairKey};
pub use disposition::ExportDisposition;
pub use interaction::{InteractionCategory, InteractionRecord};
pub use interactor::InteractorRef;
pub use participant::{ExperimentalRole, Participant};
pub use term::TermId;

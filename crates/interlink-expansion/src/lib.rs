//! Interlink Expansion
//!
//! Reduces curated interaction records of any arity to binary interactions.
//!
//! Four strategies are available:
//!
//! | Strategy | Binary / self records | Records with more than two participants |
//! |----------|-----------------------|------------------------------------------|
//! | `none` | pass through | skipped |
//! | `spoke` | pass through | bait fanned out to every other participant; skipped without a bait |
//! | `spoke_without_bait` | pass through | as `spoke`, the label-first participant stands in for a missing bait |
//! | `matrix` | pass through | every unordered participant pair |
//!
//! Expansion never fails: a record that cannot be expanded yields no binary
//! interactions and the caller decides how to report it.
//!
//! # Examples
//!
//! ```
//! use interlink_domain::{ExperimentalRole, InteractionRecord, InteractorRef, Participant};
//! use interlink_expansion::ExpansionStrategy;
//!
//! let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915")
//!     .with_participant(Participant::new(InteractorRef::new("x"), ExperimentalRole::Bait))
//!     .with_participant(Participant::new(InteractorRef::new("y"), ExperimentalRole::Prey))
//!     .with_participant(Participant::new(InteractorRef::new("z"), ExperimentalRole::Prey));
//!
//! let binaries = ExpansionStrategy::Spoke.expand(&record);
//! assert_eq!(binaries.len(), 2);
//! assert!(binaries.iter().all(|b| b.spoke_expanded));
//! ```

#![warn(missing_docs)]

mod batch;
mod strategy;

pub use batch::{expand_all, ExpandedRecord};
pub use strategy::ExpansionStrategy;

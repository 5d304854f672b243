//! Interlink Pipeline
//!
//! Runs one export: interaction records go through expansion, clustering,
//! scoring and the export rule chain, and come out as the set of clusters
//! eligible for republication.
//!
//! # Overview
//!
//! ```text
//! records ─► expand ─► binary interactions ─► cluster (positive / negative)
//!                                                    │
//!                    eligible clusters ◄─ rules ◄─ score
//! ```
//!
//! Every configuration problem (negative weights, bad threshold, empty rule
//! chain) is reported by [`ExportPipeline::new`], before any record is read.
//! Runs themselves never fail: unusable records and unresolved interactors
//! are skipped and counted in [`PipelineMetrics`].
//!
//! # Configuration
//!
//! ```toml
//! expansion = "spoke"
//! parallel = false
//!
//! [export]
//! score_threshold = 0.43
//! excluded_method_id = "MI:0403"
//! ignore_missing_annotations = false
//! rules = ["score_threshold", "detection_method_annotation"]
//!
//! [weights]
//! unknown_method_weight = 0.05
//! unknown_type_weight = 0.05
//! publication_bonus = 0.1
//! direct_evidence_multiplier = 1.5
//!
//! [weights.method_weights]
//! "MI:0018" = 1.0
//!
//! [weights.type_weights]
//! "MI:0407" = 1.0
//! ```
//!
//! # Presets
//!
//! ```
//! use interlink_pipeline::PipelineConfig;
//!
//! // Spoke expansion, threshold 0.43
//! let config = PipelineConfig::default();
//!
//! // Binary evidence only, threshold 0.6
//! let config = PipelineConfig::strict();
//!
//! // Surrogate baits, threshold 0.40, unannotated methods exportable
//! let config = PipelineConfig::lenient();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod pipeline;
mod store;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use metrics::PipelineMetrics;
pub use pipeline::{ExportPipeline, ExportRun};
pub use store::{MemoryStore, MemoryStoreError};

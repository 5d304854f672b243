//! Interlink Export
//!
//! Decides which evidence clusters may be republished.
//!
//! Rules implement [`ExportRule`] and are chained by an [`ExportEngine`]: a
//! cluster is exported as soon as one rule accepts it. Two rules ship:
//!
//! - [`ScoreThresholdRule`]: the cluster score reaches the threshold and at
//!   least one entry is direct evidence from a method other than the excluded
//!   one. The cluster is never modified.
//! - [`DetectionMethodAnnotationRule`]: each detection method carries an
//!   [`ExportDisposition`](interlink_domain::ExportDisposition). The cluster is
//!   accepted if any method passes; entries of the failing methods are
//!   removed.
//!
//! Negative clusters are rejected by both rules. Clusters without evidence or
//! with an unresolved interactor never reach the rules.
//!
//! # Configuration
//!
//! ```toml
//! [export]
//! score_threshold = 0.43
//! excluded_method_id = "MI:0403"
//! ignore_missing_annotations = false
//! rules = ["score_threshold", "detection_method_annotation"]
//! ```

#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod error;
mod rules;

pub use config::{ExportConfig, RuleKind};
pub use context::{ExportContext, InteractionTerms};
pub use engine::{ExportDecision, ExportEngine, ExportSelection, ExportStatus, RuleRejection};
pub use error::ExportError;
pub use rules::{
    parse_dispositions, DetectionMethodAnnotationRule, ExportRule, RejectionReason, ScoreThresholdRule, Verdict,
};

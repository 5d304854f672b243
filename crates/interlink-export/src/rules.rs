//! Export rules

use crate::ExportContext;
use interlink_cluster::Scorer;
use interlink_domain::{EvidenceCluster, EvidenceEntry, ExportDisposition, TermId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Outcome of one rule for one cluster
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The cluster may be exported
    Accept,

    /// The cluster is not exported by this rule
    Reject(RejectionReason),
}

impl Verdict {
    /// True for [`Verdict::Accept`]
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Why a cluster was not exported
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// The cluster carries negative evidence
    Negative,

    /// The cluster has no evidence entries
    Empty,

    /// An interactor of the pair has no accession
    Unresolvable,

    /// Score below the configured threshold
    BelowThreshold {
        /// Cluster score
        score: f64,
        /// Required score
        threshold: f64,
    },

    /// No entry is both direct and detected by a method other than the excluded one
    NoQualifyingEvidence,

    /// No detection method in the cluster permits export
    NoExportableMethod {
        /// Methods present in the cluster
        methods: Vec<String>,
    },

    /// An accepting rule pruned the cluster down to nothing
    PrunedToEmpty,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::Negative => f.write_str("negative evidence"),
            RejectionReason::Empty => f.write_str("no evidence"),
            RejectionReason::Unresolvable => f.write_str("unresolved interactor accession"),
            RejectionReason::BelowThreshold { score, threshold } => {
                write!(f, "score {:.3} below threshold {:.3}", score, threshold)
            }
            RejectionReason::NoQualifyingEvidence => f.write_str("no direct evidence from a qualifying method"),
            RejectionReason::NoExportableMethod { methods } if methods.is_empty() => {
                f.write_str("no detection method")
            }
            RejectionReason::NoExportableMethod { methods } => {
                write!(f, "no exportable detection method among {}", methods.join(", "))
            }
            RejectionReason::PrunedToEmpty => f.write_str("all evidence pruned"),
        }
    }
}

/// A single eligibility rule
///
/// Rules must not fail. A rule that rejects leaves the cluster untouched; an
/// accepting rule may remove entries that do not qualify.
pub trait ExportRule: Send + Sync {
    /// Short rule name used in reports and logs
    fn name(&self) -> &'static str;

    /// Decide on one cluster
    fn decide(&self, cluster: &mut EvidenceCluster, context: &ExportContext) -> Verdict;
}

/// Accepts clusters with a high enough score and direct, non-excluded evidence
pub struct ScoreThresholdRule {
    scorer: Arc<Scorer>,
    threshold: f64,
    excluded_method: TermId,
}

impl ScoreThresholdRule {
    /// Create the rule
    pub fn new(scorer: Arc<Scorer>, threshold: f64, excluded_method: impl Into<TermId>) -> Self {
        Self {
            scorer,
            threshold,
            excluded_method: excluded_method.into(),
        }
    }

    fn qualifies(&self, entry: &EvidenceEntry, context: &ExportContext) -> bool {
        if entry.spoke_expanded || context.is_spoke_expanded(&entry.interaction_id) {
            return false;
        }
        let method = entry.detection_method.as_ref().or_else(|| {
            context
                .terms_of(&entry.interaction_id)
                .and_then(|terms| terms.detection_method.as_ref())
        });
        method.is_some_and(|m| *m != self.excluded_method)
    }
}

impl ExportRule for ScoreThresholdRule {
    fn name(&self) -> &'static str {
        "score_threshold"
    }

    fn decide(&self, cluster: &mut EvidenceCluster, context: &ExportContext) -> Verdict {
        if cluster.is_negative() {
            return Verdict::Reject(RejectionReason::Negative);
        }

        let score = self.scorer.score(cluster);
        if score < self.threshold {
            return Verdict::Reject(RejectionReason::BelowThreshold {
                score,
                threshold: self.threshold,
            });
        }

        if cluster.entries().iter().any(|e| self.qualifies(e, context)) {
            Verdict::Accept
        } else {
            Verdict::Reject(RejectionReason::NoQualifyingEvidence)
        }
    }
}

/// Accepts clusters on per-method export dispositions
///
/// Every method is checked against its disposition using the number of
/// distinct interactions that report it. If at least one method passes, the
/// cluster is accepted and the entries of every failing method (including
/// entries without a method) are removed.
pub struct DetectionMethodAnnotationRule {
    dispositions: BTreeMap<TermId, ExportDisposition>,
    fallback: ExportDisposition,
}

impl DetectionMethodAnnotationRule {
    /// Create the rule from parsed dispositions
    ///
    /// Methods missing from the table are blocked, or exported when
    /// `ignore_missing` is set.
    pub fn new(dispositions: BTreeMap<TermId, ExportDisposition>, ignore_missing: bool) -> Self {
        let fallback = if ignore_missing {
            ExportDisposition::Export
        } else {
            ExportDisposition::DoNotExport
        };
        Self { dispositions, fallback }
    }

    /// Disposition applied to a method
    pub fn disposition_of(&self, method: &TermId) -> ExportDisposition {
        self.dispositions.get(method).copied().unwrap_or(self.fallback)
    }
}

impl ExportRule for DetectionMethodAnnotationRule {
    fn name(&self) -> &'static str {
        "detection_method_annotation"
    }

    fn decide(&self, cluster: &mut EvidenceCluster, _context: &ExportContext) -> Verdict {
        if cluster.is_negative() {
            return Verdict::Reject(RejectionReason::Negative);
        }

        let mut passing: BTreeSet<TermId> = BTreeSet::new();
        let mut methods = Vec::new();
        for (method, interactions) in cluster.interactions_by_method() {
            let Some(method) = method else { continue };
            methods.push(method.to_string());
            if self.disposition_of(method).permits(interactions.len()) {
                passing.insert(method.clone());
            }
        }

        if passing.is_empty() {
            return Verdict::Reject(RejectionReason::NoExportableMethod { methods });
        }

        let removed = cluster.retain_entries(|e| e.detection_method.as_ref().is_some_and(|m| passing.contains(m)));
        if removed > 0 {
            tracing::debug!(key = %cluster.key(), removed, "Pruned evidence from non-exportable methods");
        }
        Verdict::Accept
    }
}

/// Parse raw annotation text (`yes`, `no` or a count) per detection method
///
/// Unparseable annotations are logged and left out, so the rule treats those
/// methods as unannotated.
pub fn parse_dispositions<'a, I>(annotations: I) -> BTreeMap<TermId, ExportDisposition>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut dispositions = BTreeMap::new();
    for (term, text) in annotations {
        if term.trim().is_empty() {
            tracing::warn!(annotation = text, "Ignoring export annotation without a term");
            continue;
        }
        match text.parse::<ExportDisposition>() {
            Ok(disposition) => {
                dispositions.insert(TermId::new(term.trim()), disposition);
            }
            Err(e) => tracing::warn!(term, error = %e, "Ignoring export annotation"),
        }
    }
    dispositions
}

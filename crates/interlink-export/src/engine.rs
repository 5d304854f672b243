//! OR-chain of export rules

use crate::rules::{DetectionMethodAnnotationRule, ExportRule, RejectionReason, ScoreThresholdRule, Verdict};
use crate::{ExportConfig, ExportContext, ExportError, RuleKind};
use interlink_cluster::{ClusterMap, Scorer};
use interlink_domain::{EvidenceCluster, ExportDisposition, PairKey, TermId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Final status of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportStatus {
    /// Accepted and kept in the eligible set
    Accepted,

    /// Rejected by every rule, or before any rule ran
    Rejected,

    /// Accepted, but pruning left no evidence, so excluded
    Downgraded,
}

impl ExportStatus {
    /// Lowercase status name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportStatus::Accepted => "accepted",
            ExportStatus::Rejected => "rejected",
            ExportStatus::Downgraded => "downgraded",
        }
    }
}

/// One rule's rejection of a cluster
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRejection {
    /// Rule name, or `engine` for checks made before any rule runs
    pub rule: &'static str,

    /// Why the rule rejected
    pub reason: RejectionReason,
}

/// Decision for one cluster with the reasons behind it
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecision {
    /// Pair the decision is about
    pub key: PairKey,

    /// Final status
    pub status: ExportStatus,

    /// Rule that accepted the cluster
    pub accepted_by: Option<&'static str>,

    /// Rejections collected before acceptance (all of them when rejected)
    pub reasons: Vec<RuleRejection>,

    /// Evidence entries removed by the accepting rule
    pub pruned_entries: usize,

    /// Cluster score, if a rule computed it
    pub score: Option<f64>,
}

impl ExportDecision {
    /// True if the cluster is exported
    pub fn is_accepted(&self) -> bool {
        self.status == ExportStatus::Accepted
    }
}

/// Clusters selected for export together with every decision
#[derive(Debug, Clone, Default)]
pub struct ExportSelection {
    /// Clusters that may be exported
    pub eligible: ClusterMap,

    /// One decision per evaluated cluster, in evaluation order
    pub decisions: Vec<ExportDecision>,
}

impl ExportSelection {
    /// Decisions with the given status
    pub fn with_status(&self, status: ExportStatus) -> impl Iterator<Item = &ExportDecision> {
        self.decisions.iter().filter(move |d| d.status == status)
    }
}

/// Evaluates rules in order; a cluster is exported if any rule accepts it
///
/// Clusters with an unresolved interactor or without evidence are rejected
/// before any rule runs.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use interlink_domain::{EvidenceCluster, EvidenceEntry, ExportDisposition, InteractorSummary, TermId};
/// use interlink_export::{DetectionMethodAnnotationRule, ExportContext, ExportEngine, ExportStatus};
///
/// let side = |acc: &str| InteractorSummary {
///     accession: acc.to_string(),
///     label: None,
///     gene_name: None,
///     taxid: None,
/// };
/// let mut cluster = EvidenceCluster::new(side("P12345"), side("Q67890"));
/// cluster.push(EvidenceEntry {
///     interaction_id: "EBI-1".to_string(),
///     publication: "pubmed:1".to_string(),
///     detection_method: Some(TermId::new("MI:0018")),
///     interaction_type: TermId::new("MI:0915"),
///     spoke_expanded: false,
///     negative: false,
/// });
///
/// let dispositions = BTreeMap::from([(TermId::new("MI:0018"), ExportDisposition::Export)]);
/// let engine = ExportEngine::new().with_rule(DetectionMethodAnnotationRule::new(dispositions, false));
///
/// let decision = engine.evaluate(&mut cluster, &ExportContext::new());
/// assert_eq!(decision.status, ExportStatus::Accepted);
/// assert_eq!(decision.accepted_by, Some("detection_method_annotation"));
/// ```
#[derive(Default)]
pub struct ExportEngine {
    rules: Vec<Box<dyn ExportRule>>,
}

impl ExportEngine {
    /// Engine with no rules; every cluster is rejected until rules are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configured rule chain
    ///
    /// Dispositions are resolved here, once, for the whole run.
    pub fn from_config(
        config: &ExportConfig,
        scorer: Arc<Scorer>,
        dispositions: &BTreeMap<TermId, ExportDisposition>,
    ) -> Result<Self, ExportError> {
        config.validate()?;
        let mut engine = Self::new();
        for kind in &config.rules {
            engine = match kind {
                RuleKind::ScoreThreshold => engine.with_rule(ScoreThresholdRule::new(
                    Arc::clone(&scorer),
                    config.score_threshold,
                    config.excluded_method_id.trim(),
                )),
                RuleKind::DetectionMethodAnnotation => engine.with_rule(DetectionMethodAnnotationRule::new(
                    dispositions.clone(),
                    config.ignore_missing_annotations,
                )),
            };
        }
        Ok(engine)
    }

    /// Append a rule to the chain
    pub fn with_rule<R: ExportRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Decide on one cluster, pruning it if the accepting rule does
    pub fn evaluate(&self, cluster: &mut EvidenceCluster, context: &ExportContext) -> ExportDecision {
        let mut decision = ExportDecision {
            key: cluster.key().clone(),
            status: ExportStatus::Rejected,
            accepted_by: None,
            reasons: Vec::new(),
            pruned_entries: 0,
            score: None,
        };

        let precheck = if !cluster.is_resolvable() {
            Some(RejectionReason::Unresolvable)
        } else if cluster.is_empty() {
            Some(RejectionReason::Empty)
        } else {
            None
        };
        if let Some(reason) = precheck {
            decision.reasons.push(RuleRejection { rule: "engine", reason });
            return decision;
        }

        for rule in &self.rules {
            let before = cluster.len();
            match rule.decide(cluster, context) {
                Verdict::Accept => {
                    decision.accepted_by = Some(rule.name());
                    decision.pruned_entries = before.saturating_sub(cluster.len());
                    decision.status = if cluster.is_empty() {
                        decision.reasons.push(RuleRejection {
                            rule: rule.name(),
                            reason: RejectionReason::PrunedToEmpty,
                        });
                        ExportStatus::Downgraded
                    } else {
                        ExportStatus::Accepted
                    };
                    break;
                }
                Verdict::Reject(reason) => decision.reasons.push(RuleRejection {
                    rule: rule.name(),
                    reason,
                }),
            }
        }

        decision.score = cluster.cached_score();
        tracing::debug!(
            key = %decision.key,
            status = ?decision.status,
            accepted_by = decision.accepted_by.unwrap_or("-"),
            pruned = decision.pruned_entries,
            "Cluster evaluated"
        );
        decision
    }

    /// Evaluate every cluster and keep the accepted ones
    pub fn select(&self, clusters: ClusterMap, context: &ExportContext) -> ExportSelection {
        let mut selection = ExportSelection::default();
        for (key, mut cluster) in clusters {
            let decision = self.evaluate(&mut cluster, context);
            if decision.is_accepted() {
                selection.eligible.insert(key, cluster);
            }
            selection.decisions.push(decision);
        }
        selection
    }
}

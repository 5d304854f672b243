//! Metrics collected during an export run

use interlink_cluster::ClusterStats;
use interlink_export::{ExportDecision, ExportStatus};
use std::collections::BTreeMap;

/// Counters for one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineMetrics {
    /// Interaction records read
    pub records_read: usize,

    /// Records listed by a store but missing when loaded
    pub records_missing: usize,

    /// Records that produced no binary interaction
    pub records_skipped: usize,

    /// Binary interactions produced by expansion
    pub binaries_produced: usize,

    /// Binary interactions dropped for an unresolved accession
    pub binaries_unresolved: usize,

    /// Entries whose detection method came from the participants
    pub methods_inferred: usize,

    /// Entries without any detection method
    pub methods_missing: usize,

    /// Clusters built from positive evidence
    pub clusters_built: usize,

    /// Clusters built from negative evidence
    pub negative_clusters: usize,

    /// Accepted clusters per accepting rule
    pub accepted: BTreeMap<String, usize>,

    /// Clusters rejected by every rule
    pub rejected: usize,

    /// Clusters accepted but pruned to nothing
    pub downgraded: usize,

    /// Evidence entries removed by accepting rules
    pub entries_pruned: usize,

    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl PipelineMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of expanding one record
    pub fn record_expansion(&mut self, binaries: usize) {
        self.records_read += 1;
        if binaries == 0 {
            self.records_skipped += 1;
        }
        self.binaries_produced += binaries;
    }

    /// Record a record id the store could not load
    pub fn record_missing(&mut self) {
        self.records_missing += 1;
    }

    /// Fold in clustering counters
    pub fn record_clustering(&mut self, stats: &ClusterStats, clusters: usize, negative: bool) {
        self.binaries_unresolved += stats.unresolved;
        self.methods_inferred += stats.methods_inferred;
        self.methods_missing += stats.methods_missing;
        if negative {
            self.negative_clusters += clusters;
        } else {
            self.clusters_built += clusters;
        }
    }

    /// Record one export decision
    pub fn record_decision(&mut self, decision: &ExportDecision) {
        match decision.status {
            ExportStatus::Accepted => {
                let rule = decision.accepted_by.unwrap_or("unknown");
                *self.accepted.entry(rule.to_string()).or_insert(0) += 1;
            }
            ExportStatus::Rejected => self.rejected += 1,
            ExportStatus::Downgraded => self.downgraded += 1,
        }
        self.entries_pruned += decision.pruned_entries;
    }

    /// Total accepted clusters across all rules
    pub fn total_accepted(&self) -> usize {
        self.accepted.values().sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Export Run Summary".to_string(),
            "==================".to_string(),
            format!("Records read: {}", self.records_read),
            format!("Records skipped: {}", self.records_skipped),
        ];
        if self.records_missing > 0 {
            lines.push(format!("Records missing from store: {}", self.records_missing));
        }
        lines.extend([
            format!("Binary interactions: {}", self.binaries_produced),
            format!("Unresolved binary interactions: {}", self.binaries_unresolved),
            format!(
                "Detection methods inferred: {} (missing: {})",
                self.methods_inferred, self.methods_missing
            ),
            format!("Clusters: {} (negative: {})", self.clusters_built, self.negative_clusters),
            String::new(),
        ]);

        if !self.accepted.is_empty() {
            lines.push("Accepted by rule:".to_string());
            for (rule, count) in &self.accepted {
                lines.push(format!("  {}: {}", rule, count));
            }
            lines.push(format!("  Total: {}", self.total_accepted()));
        }
        lines.push(format!("Rejected: {}", self.rejected));
        lines.push(format!("Downgraded: {}", self.downgraded));
        lines.push(format!("Entries pruned: {}", self.entries_pruned));
        lines.push(format!("Elapsed: {}ms", self.elapsed_ms));

        lines.join("\n")
    }
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use interlink_domain::{EvidenceCluster, InteractorSummary, TermId};
use interlink_expansion::ExpandedRecord;
use interlink_export::{ExportDecision, ExportStatus};
use interlink_pipeline::ExportRun;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self { format, color_enabled }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an export run.
    pub fn format_run(&self, run: &ExportRun, show_rejected: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_run_json(run, show_rejected),
            OutputFormat::Table => Ok(self.format_run_table(run, show_rejected)),
            OutputFormat::Quiet => Ok(run.eligible.keys().map(|k| k.to_string()).collect::<Vec<_>>().join("\n")),
        }
    }

    fn format_run_json(&self, run: &ExportRun, show_rejected: bool) -> Result<String> {
        let clusters: Vec<serde_json::Value> = run.eligible.values().map(cluster_json).collect();
        let mut value = json!({
            "run_id": run.run_id.to_string(),
            "clusters": clusters,
            "metrics": {
                "records_read": run.metrics.records_read,
                "records_skipped": run.metrics.records_skipped,
                "binaries_produced": run.metrics.binaries_produced,
                "binaries_unresolved": run.metrics.binaries_unresolved,
                "clusters_built": run.metrics.clusters_built,
                "negative_clusters": run.metrics.negative_clusters,
                "accepted": run.metrics.accepted,
                "rejected": run.metrics.rejected,
                "downgraded": run.metrics.downgraded,
                "entries_pruned": run.metrics.entries_pruned,
                "elapsed_ms": run.metrics.elapsed_ms,
            },
        });
        if show_rejected {
            let decisions: Vec<serde_json::Value> = run
                .decisions
                .iter()
                .filter(|d| !d.is_accepted())
                .map(decision_json)
                .collect();
            value["not_exported"] = serde_json::Value::Array(decisions);
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_run_table(&self, run: &ExportRun, show_rejected: bool) -> String {
        let mut sections = Vec::new();

        if run.eligible.is_empty() {
            sections.push(self.colorize("No clusters eligible for export.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Pair", "Interactor A", "Interactor B", "Interactions", "Publications", "Score"]);
            for cluster in run.eligible.values() {
                builder.push_record([
                    cluster.key().to_string(),
                    interactor_cell(cluster.interactor_a()),
                    interactor_cell(cluster.interactor_b()),
                    cluster.interaction_ids().len().to_string(),
                    cluster.publications().len().to_string(),
                    score_cell(cluster.cached_score()),
                ]);
            }
            sections.push(render(builder));
        }

        if show_rejected {
            let mut builder = Builder::default();
            builder.push_record(["Pair", "Status", "Reasons"]);
            let mut any = false;
            for decision in run.decisions.iter().filter(|d| !d.is_accepted()) {
                any = true;
                let status = match decision.status {
                    ExportStatus::Downgraded => self.colorize(decision.status.as_str(), "yellow"),
                    _ => self.colorize(decision.status.as_str(), "red"),
                };
                builder.push_record([decision.key.to_string(), status, reasons_cell(decision)]);
            }
            if any {
                sections.push(render(builder));
            }
        }

        sections.push(run.metrics.summary());
        sections.push(self.info(&format!("Run {}", run.run_id)));
        sections.join("\n\n")
    }

    /// Format expansion results.
    pub fn format_expansion(&self, expanded: &[ExpandedRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<serde_json::Value> = expanded
                    .iter()
                    .map(|record| {
                        let binaries: Vec<serde_json::Value> = record
                            .binaries
                            .iter()
                            .map(|b| {
                                json!({
                                    "a": b.a.interactor.id,
                                    "b": b.b.interactor.id,
                                    "detection_method": b.detection_method.as_ref().map(TermId::as_str),
                                    "spoke_expanded": b.spoke_expanded,
                                })
                            })
                            .collect();
                        json!({ "interaction_id": record.interaction_id, "binaries": binaries })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Quiet => Ok(expanded
                .iter()
                .flat_map(|r| {
                    r.binaries
                        .iter()
                        .map(move |b| format!("{}\t{}\t{}", r.interaction_id, b.a.interactor.id, b.b.interactor.id))
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if expanded.iter().all(ExpandedRecord::is_skipped) {
                    return Ok(self.colorize("No binary interactions produced.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Interaction", "A", "B", "Method", "Spoke"]);
                for record in expanded {
                    for binary in &record.binaries {
                        builder.push_record([
                            record.interaction_id.clone(),
                            binary.a.interactor.id.clone(),
                            binary.b.interactor.id.clone(),
                            binary
                                .detection_method
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| "-".to_string()),
                            if binary.spoke_expanded { "yes" } else { "no" }.to_string(),
                        ]);
                    }
                }
                let skipped = expanded.iter().filter(|r| r.is_skipped()).count();
                let mut out = render(builder);
                if skipped > 0 {
                    out.push_str("\n\n");
                    out.push_str(&self.warning(&format!("{} record(s) produced no binary interactions", skipped)));
                }
                Ok(out)
            }
        }
    }

    /// Format a lowest-common-ancestor answer.
    pub fn format_lca(&self, terms: &[TermId], lca: Option<&TermId>, name: Option<&str>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "terms": terms.iter().map(TermId::as_str).collect::<Vec<_>>(),
                "lowest_common_ancestor": lca.map(TermId::as_str),
                "name": name,
            }))?),
            OutputFormat::Quiet => Ok(lca.map(|t| t.to_string()).unwrap_or_default()),
            OutputFormat::Table => Ok(match (lca, name) {
                (Some(term), Some(name)) => self.success(&format!("{} ({})", term, name)),
                (Some(term), None) => self.success(&term.to_string()),
                (None, _) => self.warning("No common ancestor below the root"),
            }),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn interactor_cell(interactor: &InteractorSummary) -> String {
    match &interactor.label {
        Some(label) => format!("{} ({})", interactor.accession, label),
        None => interactor.accession.clone(),
    }
}

fn score_cell(score: Option<f64>) -> String {
    score.map(|s| format!("{:.3}", s)).unwrap_or_else(|| "-".to_string())
}

fn reasons_cell(decision: &ExportDecision) -> String {
    decision
        .reasons
        .iter()
        .map(|r| format!("{}: {}", r.rule, r.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

fn interactor_json(interactor: &InteractorSummary) -> serde_json::Value {
    json!({
        "accession": interactor.accession,
        "label": interactor.label,
        "gene_name": interactor.gene_name,
        "taxid": interactor.taxid,
    })
}

fn cluster_json(cluster: &EvidenceCluster) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = cluster
        .entries()
        .iter()
        .map(|e| {
            json!({
                "interaction_id": e.interaction_id,
                "publication": e.publication,
                "detection_method": e.detection_method.as_ref().map(TermId::as_str),
                "interaction_type": e.interaction_type.as_str(),
                "spoke_expanded": e.spoke_expanded,
            })
        })
        .collect();
    json!({
        "key": cluster.key().to_string(),
        "interactor_a": interactor_json(cluster.interactor_a()),
        "interactor_b": interactor_json(cluster.interactor_b()),
        "score": cluster.cached_score(),
        "evidence": entries,
    })
}

fn decision_json(decision: &ExportDecision) -> serde_json::Value {
    let reasons: Vec<serde_json::Value> = decision
        .reasons
        .iter()
        .map(|r| json!({ "rule": r.rule, "reason": r.reason.to_string() }))
        .collect();
    json!({
        "key": decision.key.to_string(),
        "status": decision.status.as_str(),
        "accepted_by": decision.accepted_by,
        "score": decision.score,
        "reasons": reasons,
    })
}

//! Export run orchestration

use crate::{PipelineConfig, PipelineError, PipelineMetrics};
use interlink_cluster::{ClusterMap, ClusterOutcome, Clusterer, Scorer};
use interlink_domain::traits::InteractionStore;
use interlink_domain::{BinaryInteraction, ExportDisposition, InteractionRecord, PairKey, TermId};
use interlink_expansion::expand_all;
use interlink_export::{ExportContext, ExportDecision, ExportEngine, ExportStatus};
use interlink_ontology::OntologyLookup;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Result of one export run
#[derive(Debug, Clone)]
pub struct ExportRun {
    /// Run identifier (UUIDv7), also attached to the run's log span
    pub run_id: Uuid,

    /// Clusters eligible for export, scored
    pub eligible: ClusterMap,

    /// Decision for every evaluated cluster, positive clusters first
    pub decisions: Vec<ExportDecision>,

    /// Run counters
    pub metrics: PipelineMetrics,
}

impl ExportRun {
    /// Keys of clusters with the given status
    pub fn keys_with_status(&self, status: ExportStatus) -> Vec<&PairKey> {
        self.decisions
            .iter()
            .filter(|d| d.status == status)
            .map(|d| &d.key)
            .collect()
    }
}

/// Expand, cluster, score and select interaction evidence for export
///
/// All configuration is checked when the pipeline is built; a run itself
/// cannot fail. Runs share no state.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
/// use interlink_domain::{ExperimentalRole, ExportDisposition, InteractionRecord, InteractorRef, Participant, TermId};
/// use interlink_ontology::{OntologyLookup, TermGraph};
/// use interlink_pipeline::{ExportPipeline, PipelineConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let lookup = Arc::new(OntologyLookup::new(TermGraph::from_terms(Vec::new())?)?);
/// let dispositions = BTreeMap::from([(TermId::new("MI:0018"), ExportDisposition::Export)]);
/// let pipeline = ExportPipeline::new(PipelineConfig::default(), lookup, dispositions)?;
///
/// let side = |id: &str, acc: &str, role| Participant::new(InteractorRef::new(id).with_accession(acc), role);
/// let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915")
///     .with_detection_method("MI:0018")
///     .with_participant(side("x", "P12345", ExperimentalRole::Bait))
///     .with_participant(side("y", "Q67890", ExperimentalRole::Prey));
///
/// let run = pipeline.run(&[record]);
/// assert_eq!(run.eligible.len(), 1);
/// println!("{}", run.metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct ExportPipeline {
    config: PipelineConfig,
    clusterer: Clusterer,
    scorer: Arc<Scorer>,
    engine: ExportEngine,
}

impl ExportPipeline {
    /// Build a pipeline, validating the whole configuration up front
    pub fn new(
        config: PipelineConfig,
        lookup: Arc<OntologyLookup>,
        dispositions: BTreeMap<TermId, ExportDisposition>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let scorer = Arc::new(Scorer::new(config.weights.clone(), Arc::clone(&lookup))?);
        let engine = ExportEngine::from_config(&config.export, Arc::clone(&scorer), &dispositions)?;
        tracing::debug!(
            expansion = %config.expansion,
            rules = ?engine.rule_names(),
            dispositions = dispositions.len(),
            "Export pipeline ready"
        );
        Ok(Self {
            config,
            clusterer: Clusterer::new(lookup),
            scorer,
            engine,
        })
    }

    /// The validated configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The scorer used by the pipeline
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Run the pipeline over records, in input order
    pub fn run(&self, records: &[InteractionRecord]) -> ExportRun {
        self.run_with_metrics(records, PipelineMetrics::new())
    }

    /// Load every record from a store, in identifier order, and run the pipeline
    ///
    /// Identifiers the store lists but cannot load are counted and skipped.
    pub fn run_store<S: InteractionStore>(&self, store: &S) -> Result<ExportRun, PipelineError>
    where
        S::Error: std::fmt::Display,
    {
        let mut ids = store
            .interaction_ids()
            .map_err(|e| PipelineError::Store(e.to_string()))?;
        ids.sort();

        let mut metrics = PipelineMetrics::new();
        let mut records = Vec::with_capacity(ids.len());
        for id in &ids {
            match store
                .load_interaction(id)
                .map_err(|e| PipelineError::Store(e.to_string()))?
            {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(interaction = %id, "Interaction listed by store but not found");
                    metrics.record_missing();
                }
            }
        }
        Ok(self.run_with_metrics(&records, metrics))
    }

    fn run_with_metrics(&self, records: &[InteractionRecord], mut metrics: PipelineMetrics) -> ExportRun {
        let run_id = Uuid::now_v7();
        let span = tracing::info_span!("export_run", run_id = %run_id);
        let _guard = span.enter();
        let start = Instant::now();

        tracing::info!(records = records.len(), strategy = %self.config.expansion, "Starting export run");

        let expanded = expand_all(self.config.expansion, records, self.config.parallel);
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for record in expanded {
            metrics.record_expansion(record.binaries.len());
            for binary in record.binaries {
                if binary.negative {
                    negative.push(binary);
                } else {
                    positive.push(binary);
                }
            }
        }

        let positive = self.cluster(&positive);
        let negative = self.cluster(&negative);
        metrics.record_clustering(&positive.stats, positive.clusters.len(), false);
        metrics.record_clustering(&negative.stats, negative.clusters.len(), true);

        let context = ExportContext::from_clusters(positive.clusters.values().chain(negative.clusters.values()));

        let mut selection = self.engine.select(positive.clusters, &context);
        // Negative clusters only contribute decisions; every rule rejects them
        let negative_selection = self.engine.select(negative.clusters, &context);
        selection.decisions.extend(negative_selection.decisions);

        for cluster in selection.eligible.values_mut() {
            self.scorer.score(cluster);
        }
        for decision in &selection.decisions {
            metrics.record_decision(decision);
        }

        metrics.elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(
            eligible = selection.eligible.len(),
            rejected = metrics.rejected,
            downgraded = metrics.downgraded,
            elapsed_ms = metrics.elapsed_ms,
            "Export run complete"
        );

        ExportRun {
            run_id,
            eligible: selection.eligible,
            decisions: selection.decisions,
            metrics,
        }
    }

    fn cluster(&self, binaries: &[BinaryInteraction]) -> ClusterOutcome {
        if self.config.parallel {
            self.clusterer.cluster_parallel(binaries)
        } else {
            self.clusterer.cluster(binaries)
        }
    }
}

//! End-to-end export runs

use interlink_domain::traits::InteractionStore;
use interlink_domain::{
    ExperimentalRole, ExportDisposition, InteractionRecord, InteractorRef, PairKey, Participant, TermId,
};
use interlink_expansion::ExpansionStrategy;
use interlink_export::{ExportStatus, RuleKind};
use interlink_ontology::{OntologyLookup, Term, TermGraph};
use interlink_pipeline::{ExportPipeline, MemoryStore, PipelineConfig, PipelineError};
use std::collections::BTreeMap;
use std::sync::Arc;

fn lookup() -> Arc<OntologyLookup> {
    let graph = TermGraph::from_terms(vec![
        Term::new("MI:0001").with_name("interaction detection method"),
        Term::new("MI:0045").with_name("experimental interaction detection").with_parent("MI:0001"),
        Term::new("MI:0018").with_name("two hybrid").with_parent("MI:0045"),
        Term::new("MI:0096").with_name("pull down").with_parent("MI:0045"),
        Term::new("MI:0428").with_name("imaging technique").with_parent("MI:0045"),
        Term::new("MI:0190").with_name("interaction type"),
        Term::new("MI:0914").with_name("association").with_parent("MI:0190"),
        Term::new("MI:0915").with_name("physical association").with_parent("MI:0914"),
    ])
    .unwrap();
    Arc::new(OntologyLookup::new(graph).unwrap())
}

fn participant(id: &str, role: ExperimentalRole) -> Participant {
    Participant::new(
        InteractorRef::new(id)
            .with_label(id.to_lowercase())
            .with_accession(id)
            .with_taxid(9606),
        role,
    )
}

/// Bait X with preys Y and Z, detected by M1
fn spoke_record(id: &str, method: &str) -> InteractionRecord {
    InteractionRecord::new(id, "pubmed:100", "MI:0915")
        .with_detection_method(method)
        .with_participant(participant("X", ExperimentalRole::Bait))
        .with_participant(participant("Y", ExperimentalRole::Prey))
        .with_participant(participant("Z", ExperimentalRole::Prey))
}

/// Only the annotation rule, so the outcome depends on dispositions alone
fn annotation_only() -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.export.rules = vec![RuleKind::DetectionMethodAnnotation];
    config
}

#[test]
fn test_spoke_record_exports_both_pairs() {
    let dispositions = BTreeMap::from([(TermId::new("M1"), ExportDisposition::Export)]);
    let pipeline = ExportPipeline::new(annotation_only(), lookup(), dispositions).unwrap();

    let run = pipeline.run(&[spoke_record("EBI-1", "M1")]);

    assert_eq!(run.metrics.binaries_produced, 2);
    assert_eq!(run.metrics.clusters_built, 2);
    assert_eq!(run.eligible.len(), 2);
    assert!(run.eligible.contains_key(&PairKey::new("X", "Y")));
    assert!(run.eligible.contains_key(&PairKey::new("X", "Z")));
    assert_eq!(run.metrics.accepted.get("detection_method_annotation"), Some(&2));
}

#[test]
fn test_spoke_evidence_alone_fails_score_rule() {
    let mut config = PipelineConfig::default();
    config.export.rules = vec![RuleKind::ScoreThreshold];
    let pipeline = ExportPipeline::new(config, lookup(), BTreeMap::new()).unwrap();

    let run = pipeline.run(&[spoke_record("EBI-1", "MI:0018")]);
    assert!(run.eligible.is_empty());
    assert_eq!(run.keys_with_status(ExportStatus::Rejected).len(), 2);
}

#[test]
fn test_partial_invalidation_through_pipeline() {
    let dispositions = BTreeMap::from([
        (TermId::new("MI:0018"), ExportDisposition::Export),
        (TermId::new("MI:0096"), ExportDisposition::ConditionalExport(2)),
    ]);
    let pipeline = ExportPipeline::new(annotation_only(), lookup(), dispositions).unwrap();

    let pair = |id: &str, method: &str, publication: &str| {
        InteractionRecord::new(id, publication, "MI:0915")
            .with_detection_method(method)
            .with_participant(participant("P1", ExperimentalRole::Bait))
            .with_participant(participant("Q2", ExperimentalRole::Prey))
    };
    let run = pipeline.run(&[
        pair("EBI-1", "MI:0018", "pubmed:1"),
        pair("EBI-2", "MI:0096", "pubmed:2"),
        pair("EBI-3", "MI:0428", "pubmed:3"),
    ]);

    let cluster = &run.eligible[&PairKey::new("P1", "Q2")];
    assert_eq!(cluster.interaction_ids().into_iter().collect::<Vec<_>>(), vec!["EBI-1"]);
    assert_eq!(cluster.publications().into_iter().collect::<Vec<_>>(), vec!["pubmed:1"]);
    assert_eq!(run.metrics.entries_pruned, 2);
    assert!(cluster.cached_score().is_some());
}

#[test]
fn test_repeated_runs_are_identical() {
    let dispositions = BTreeMap::from([(TermId::new("MI:0018"), ExportDisposition::Export)]);
    let mut config = PipelineConfig::lenient();
    config.expansion = ExpansionStrategy::Matrix;
    let pipeline = ExportPipeline::new(config, lookup(), dispositions).unwrap();
    let records = vec![spoke_record("EBI-1", "MI:0018"), spoke_record("EBI-2", "MI:0096")];

    let first = pipeline.run(&records);
    let second = pipeline.run(&records);
    assert_eq!(first.eligible, second.eligible);
    assert_eq!(first.decisions, second.decisions);
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn test_parallel_run_matches_sequential() {
    let records: Vec<InteractionRecord> = (0..30)
        .map(|i| {
            let method = if i % 3 == 0 { "MI:0018" } else { "MI:0096" };
            let mut record = InteractionRecord::new(format!("EBI-{}", i), format!("pubmed:{}", i % 4), "MI:0915")
                .with_detection_method(method);
            for j in 0..(2 + i % 4) {
                let role = if j == 0 { ExperimentalRole::Bait } else { ExperimentalRole::Prey };
                record = record.with_participant(participant(&format!("P{}", (i + j) % 7), role));
            }
            record
        })
        .collect();

    let dispositions = BTreeMap::from([(TermId::new("MI:0096"), ExportDisposition::ConditionalExport(2))]);
    let sequential = ExportPipeline::new(PipelineConfig::default(), lookup(), dispositions.clone()).unwrap();
    let mut config = PipelineConfig::default();
    config.parallel = true;
    let parallel = ExportPipeline::new(config, lookup(), dispositions).unwrap();

    let left = sequential.run(&records);
    let right = parallel.run(&records);
    assert_eq!(left.eligible, right.eligible);
    assert_eq!(left.decisions, right.decisions);
}

#[test]
fn test_missing_method_inferred_from_participants() {
    let dispositions = BTreeMap::from([(TermId::new("MI:0045"), ExportDisposition::Export)]);
    let pipeline = ExportPipeline::new(annotation_only(), lookup(), dispositions).unwrap();

    let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915")
        .with_participant(participant("P1", ExperimentalRole::Bait).with_detection_method("MI:0018"))
        .with_participant(participant("Q2", ExperimentalRole::Prey).with_detection_method("MI:0096"));
    let run = pipeline.run(&[record]);

    assert_eq!(run.metrics.methods_inferred, 1);
    let cluster = &run.eligible[&PairKey::new("P1", "Q2")];
    assert_eq!(cluster.entries()[0].detection_method, Some(TermId::new("MI:0045")));
}

#[test]
fn test_self_interaction_exported() {
    let dispositions = BTreeMap::from([(TermId::new("MI:0018"), ExportDisposition::Export)]);
    let pipeline = ExportPipeline::new(annotation_only(), lookup(), dispositions).unwrap();
    let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915")
        .with_detection_method("MI:0018")
        .with_participant(participant("P1", ExperimentalRole::SelfRole));

    let run = pipeline.run(&[record]);
    assert!(run.eligible[&PairKey::Single("P1".to_string())].is_self());
}

#[test]
fn test_unresolved_participant_skipped() {
    let pipeline = ExportPipeline::new(PipelineConfig::default(), lookup(), BTreeMap::new()).unwrap();
    let record = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915")
        .with_detection_method("MI:0018")
        .with_participant(participant("P1", ExperimentalRole::Bait))
        .with_participant(Participant::new(InteractorRef::new("orphan"), ExperimentalRole::Prey));

    let run = pipeline.run(&[record]);
    assert_eq!(run.metrics.binaries_unresolved, 1);
    assert!(run.eligible.is_empty());
    assert!(run.decisions.is_empty());
}

#[test]
fn test_invalid_configuration_fails_before_running() {
    let mut config = PipelineConfig::default();
    config.weights.method_weights.insert("MI:0018".to_string(), -1.0);
    assert!(matches!(
        ExportPipeline::new(config, lookup(), BTreeMap::new()),
        Err(PipelineError::Weights(_))
    ));

    let mut config = PipelineConfig::default();
    config.export.score_threshold = f64::NAN;
    assert!(matches!(
        ExportPipeline::new(config, lookup(), BTreeMap::new()),
        Err(PipelineError::Export(_))
    ));

    let mut config = PipelineConfig::default();
    config.export.rules.clear();
    assert!(ExportPipeline::new(config, lookup(), BTreeMap::new()).is_err());
}

#[test]
fn test_run_from_store() {
    let mut store = MemoryStore::new();
    store.save_interaction(spoke_record("EBI-2", "M1")).unwrap();
    store.save_interaction(spoke_record("EBI-1", "M1")).unwrap();

    let dispositions = BTreeMap::from([(TermId::new("M1"), ExportDisposition::ConditionalExport(2))]);
    let pipeline = ExportPipeline::new(annotation_only(), lookup(), dispositions).unwrap();
    let run = pipeline.run_store(&store).unwrap();

    assert_eq!(run.metrics.records_read, 2);
    assert_eq!(run.eligible.len(), 2);
    for cluster in run.eligible.values() {
        assert_eq!(cluster.interaction_ids().len(), 2);
    }
}

//! Commands run against files on disk

use interlink_cli::cli::{ExpandArgs, ExportArgs, LcaArgs, StrategyArg};
use interlink_cli::config::OutputFormat;
use interlink_cli::{commands, input, CliError, Config, Formatter};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const RECORDS: &str = r#"[
    {
        "id": "EBI-1",
        "publication": "pubmed:100",
        "interaction_type": "MI:0915",
        "detection_method": "MI:0018",
        "participants": [
            {"id": "x", "accession": "P11111", "role": "bait"},
            {"id": "y", "accession": "P22222", "role": "prey"},
            {"id": "z", "accession": "P33333", "role": "prey"}
        ]
    },
    {
        "id": "EBI-2",
        "publication": "pubmed:200",
        "interaction_type": "MI:0915",
        "participants": [
            {"id": "x", "accession": "P11111", "role": "bait", "detection_methods": ["MI:0018"]},
            {"id": "y", "accession": "P22222", "role": "prey", "detection_methods": ["MI:0096"]}
        ]
    }
]"#;

const ONTOLOGY: &str = r#"[
    {"id": "MI:0001", "name": "interaction detection method"},
    {"id": "MI:0045", "name": "experimental interaction detection", "parents": ["MI:0001"]},
    {"id": "MI:0018", "name": "two hybrid", "parents": ["MI:0045"]},
    {"id": "MI:0096", "name": "pull down", "parents": ["MI:0045"]}
]"#;

const ANNOTATIONS: &str = r#"{"MI:0018": "yes", "MI:0045": 2}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn export_args(dir: &TempDir) -> ExportArgs {
    ExportArgs {
        records: write(dir, "records.json", RECORDS),
        ontology: Some(write(dir, "ontology.json", ONTOLOGY)),
        annotations: Some(write(dir, "annotations.json", ANNOTATIONS)),
        preset: None,
        strategy: None,
        threshold: None,
        parallel: false,
        show_rejected: true,
    }
}

#[test]
fn test_export_command_runs() {
    let dir = TempDir::new().unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);
    commands::execute_export(export_args(&dir), &Config::default(), &formatter).unwrap();
}

#[test]
fn test_export_command_with_preset_and_strategy() {
    let dir = TempDir::new().unwrap();
    let mut args = export_args(&dir);
    args.preset = Some("lenient".to_string());
    args.strategy = Some(StrategyArg::Matrix);
    args.parallel = true;
    let formatter = Formatter::new(OutputFormat::Table, false);
    commands::execute_export(args, &Config::default(), &formatter).unwrap();
}

#[test]
fn test_export_command_reports_bad_records() {
    let dir = TempDir::new().unwrap();
    let mut args = export_args(&dir);
    args.records = write(&dir, "broken.json", "[{\"id\": 1}]");
    let formatter = Formatter::new(OutputFormat::Quiet, false);
    let err = commands::execute_export(args, &Config::default(), &formatter).unwrap_err();
    assert!(matches!(err, CliError::Input(_)));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_export_command_rejects_unknown_preset() {
    let dir = TempDir::new().unwrap();
    let mut args = export_args(&dir);
    args.preset = Some("aggressive".to_string());
    let formatter = Formatter::new(OutputFormat::Quiet, false);
    assert!(matches!(
        commands::execute_export(args, &Config::default(), &formatter),
        Err(CliError::Config(_))
    ));
}

#[test]
fn test_expand_command_runs() {
    let dir = TempDir::new().unwrap();
    let args = ExpandArgs {
        records: write(&dir, "records.json", RECORDS),
        strategy: Some(StrategyArg::Binary),
    };
    let formatter = Formatter::new(OutputFormat::Table, false);
    commands::execute_expand(args, &Config::default(), &formatter).unwrap();
}

#[test]
fn test_lca_command() {
    let dir = TempDir::new().unwrap();
    let ontology = write(&dir, "ontology.json", ONTOLOGY);
    let formatter = Formatter::new(OutputFormat::Quiet, false);

    let args = LcaArgs {
        ontology: ontology.clone(),
        terms: vec!["MI:0018".to_string(), "MI:0096".to_string()],
    };
    commands::execute_lca(args, &formatter).unwrap();

    let args = LcaArgs {
        ontology,
        terms: vec!["MI:0018".to_string(), "MI:9999".to_string()],
    };
    assert!(matches!(
        commands::execute_lca(args, &formatter),
        Err(CliError::InvalidInput(_))
    ));
}

#[test]
fn test_inputs_feed_pipeline() {
    use interlink_domain::{PairKey, TermId};
    use interlink_pipeline::{ExportPipeline, PipelineConfig};
    use std::sync::Arc;

    let dir = TempDir::new().unwrap();
    let records = input::load_records(&write(&dir, "records.json", RECORDS)).unwrap();
    let lookup = input::load_ontology(Some(write(&dir, "ontology.json", ONTOLOGY).as_path())).unwrap();
    let dispositions = input::load_annotations(Some(write(&dir, "annotations.json", ANNOTATIONS).as_path())).unwrap();

    let mut config = PipelineConfig::default();
    config.export.rules = vec![interlink_export::RuleKind::DetectionMethodAnnotation];
    let run = ExportPipeline::new(config, Arc::new(lookup), dispositions).unwrap().run(&records);

    // EBI-2 falls back to MI:0045, which needs two interactions, so only EBI-1 survives
    let xy = &run.eligible[&PairKey::new("P11111", "P22222")];
    assert_eq!(xy.interaction_ids().into_iter().collect::<Vec<_>>(), vec!["EBI-1"]);
    assert_eq!(run.metrics.methods_inferred, 1);
    assert!(run.eligible.contains_key(&PairKey::new("P11111", "P33333")));
    assert!(xy
        .entries()
        .iter()
        .all(|e| e.detection_method == Some(TermId::new("MI:0018"))));
}

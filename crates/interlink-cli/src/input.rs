//! JSON input files: interaction records, ontology terms and export annotations.

use anyhow::{bail, Context};
use interlink_domain::{
    ExperimentalRole, ExportDisposition, InteractionRecord, InteractorRef, Participant, TermId,
};
use interlink_export::parse_dispositions;
use interlink_ontology::{OntologyLookup, Term, TermGraph};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One curated interaction record as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordInput {
    /// Record identifier
    pub id: String,

    /// Publication the record was curated from
    pub publication: String,

    /// Interaction type term
    pub interaction_type: String,

    /// Interaction-level detection method term
    #[serde(default)]
    pub detection_method: Option<String>,

    /// Negative evidence flag
    #[serde(default)]
    pub negative: bool,

    /// Participants in curation order
    #[serde(default)]
    pub participants: Vec<ParticipantInput>,
}

/// One participant of a record.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantInput {
    /// Interactor identifier
    pub id: String,

    /// Short label
    #[serde(default)]
    pub label: Option<String>,

    /// Database accession
    #[serde(default)]
    pub accession: Option<String>,

    /// Gene name
    #[serde(default)]
    pub gene_name: Option<String>,

    /// NCBI taxonomy identifier
    #[serde(default)]
    pub taxid: Option<i32>,

    /// Experimental role name
    #[serde(default)]
    pub role: String,

    /// Stoichiometry
    #[serde(default = "default_stoichiometry")]
    pub stoichiometry: u32,

    /// Participant-level detection methods
    #[serde(default)]
    pub detection_methods: Vec<String>,
}

fn default_stoichiometry() -> u32 {
    1
}

impl ParticipantInput {
    fn into_participant(self) -> anyhow::Result<Participant> {
        let role = ExperimentalRole::parse(&self.role)
            .with_context(|| format!("participant {} has unknown role '{}'", self.id, self.role))?;

        let mut interactor = InteractorRef::new(self.id);
        if let Some(label) = self.label {
            interactor = interactor.with_label(label);
        }
        if let Some(accession) = self.accession {
            interactor = interactor.with_accession(accession);
        }
        if let Some(gene_name) = self.gene_name {
            interactor = interactor.with_gene_name(gene_name);
        }
        if let Some(taxid) = self.taxid {
            interactor = interactor.with_taxid(taxid);
        }

        let mut participant = Participant::new(interactor, role).with_stoichiometry(self.stoichiometry);
        for method in self.detection_methods {
            participant = participant.with_detection_method(method);
        }
        Ok(participant)
    }
}

impl TryFrom<RecordInput> for InteractionRecord {
    type Error = anyhow::Error;

    fn try_from(input: RecordInput) -> anyhow::Result<Self> {
        if input.id.trim().is_empty() {
            bail!("record with blank id");
        }
        let id = input.id;
        let mut record = InteractionRecord::new(id.clone(), input.publication, input.interaction_type)
            .with_negative(input.negative);
        if let Some(method) = input.detection_method {
            record = record.with_detection_method(method);
        }
        for participant in input.participants {
            let participant = participant
                .into_participant()
                .with_context(|| format!("in record {}", id))?;
            record = record.with_participant(participant);
        }
        Ok(record)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load interaction records from a JSON array.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<InteractionRecord>> {
    let inputs: Vec<RecordInput> = read_json(path)?;
    let records = inputs
        .into_iter()
        .map(InteractionRecord::try_from)
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("invalid record in {}", path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded interaction records");
    Ok(records)
}

/// Load ontology terms from a JSON array; no file gives an empty graph.
pub fn load_term_graph(path: Option<&Path>) -> anyhow::Result<TermGraph> {
    let Some(path) = path else {
        return Ok(TermGraph::default());
    };
    let terms: Vec<Term> = read_json(path)?;
    let graph = TermGraph::from_terms(terms).with_context(|| format!("invalid ontology {}", path.display()))?;
    tracing::info!(path = %path.display(), terms = graph.len(), "Loaded ontology");
    Ok(graph)
}

/// Load ontology terms and prepare ancestor and depth lookups.
pub fn load_ontology(path: Option<&Path>) -> anyhow::Result<OntologyLookup> {
    let graph = load_term_graph(path)?;
    OntologyLookup::new(graph).context("ontology is not a directed acyclic graph")
}

/// Annotation value: text (`yes`, `no`, a count) or a bare count.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AnnotationValue {
    Count(u32),
    Text(String),
}

/// Load export annotations from a JSON object of method term to disposition.
///
/// Entries that do not parse are logged and skipped.
pub fn load_annotations(path: Option<&Path>) -> anyhow::Result<BTreeMap<TermId, ExportDisposition>> {
    let Some(path) = path else {
        return Ok(BTreeMap::new());
    };
    let raw: BTreeMap<String, AnnotationValue> = read_json(path)?;
    let texts: Vec<(String, String)> = raw
        .into_iter()
        .map(|(term, value)| {
            let text = match value {
                AnnotationValue::Count(n) => n.to_string(),
                AnnotationValue::Text(text) => text,
            };
            (term, text)
        })
        .collect();
    let dispositions = parse_dispositions(texts.iter().map(|(t, v)| (t.as_str(), v.as_str())));
    tracing::info!(path = %path.display(), annotations = dispositions.len(), "Loaded export annotations");
    Ok(dispositions)
}

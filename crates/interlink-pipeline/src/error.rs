//! Pipeline error types

use interlink_cluster::ClusterError;
use interlink_export::ExportError;
use interlink_ontology::OntologyError;
use thiserror::Error;

/// Errors that can occur while setting up or feeding an export run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid weight table
    #[error("Weight configuration error: {0}")]
    Weights(#[from] ClusterError),

    /// Invalid export rule configuration
    #[error("Export configuration error: {0}")]
    Export(#[from] ExportError),

    /// Ontology could not be loaded
    #[error("Ontology error: {0}")]
    Ontology(#[from] OntologyError),

    /// Configuration text could not be parsed or rendered
    #[error("Configuration format error: {0}")]
    Format(String),

    /// Interaction store failure
    #[error("Store error: {0}")]
    Store(String),
}

//! Export error types

use thiserror::Error;

/// Errors raised while configuring the export rule engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Score threshold is negative or not a number
    #[error("Invalid score threshold: {0} (must be finite and >= 0)")]
    InvalidThreshold(f64),

    /// Excluded detection method id is blank
    #[error("Excluded detection method id must not be blank")]
    BlankExcludedMethod,

    /// No rule configured, so nothing could ever be exported
    #[error("At least one export rule must be configured")]
    NoRules,
}

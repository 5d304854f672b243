//! Cluster error types

use thiserror::Error;

/// Errors raised while configuring scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A term weight is negative or not a number
    #[error("Invalid weight for {term}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// Term the weight belongs to
        term: String,
        /// Rejected value
        value: f64,
    },

    /// A scoring parameter is out of range
    #[error("Invalid {name}: {value} (must be finite and >= {minimum})")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
        /// Smallest accepted value
        minimum: f64,
    },

    /// The weight table contains a blank term id
    #[error("Weight table contains a blank term id")]
    BlankTerm,
}

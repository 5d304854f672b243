//! Controlled-vocabulary term identifiers

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a controlled-vocabulary term (e.g. `MI:0018`)
///
/// Ordering is plain ordinal string ordering, which is what every
/// deterministic tie-break in the pipeline relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId(String);

impl TermId {
    /// Create a term identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use interlink_domain::TermId;
    ///
    /// let id = TermId::new("MI:0018");
    /// assert_eq!(id.as_str(), "MI:0018");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TermId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TermId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

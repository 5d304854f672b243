//! Participants - an interactor's role within one interaction record

use crate::{InteractorRef, TermId};

/// Experimental role of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentalRole {
    /// The molecule used to capture its partners
    Bait,

    /// A molecule captured by the bait
    Prey,

    /// Neither bait nor prey (e.g. co-purified complex members)
    Neutral,

    /// The molecule interacts with itself
    SelfRole,

    /// No role was curated
    Unspecified,
}

impl ExperimentalRole {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentalRole::Bait => "bait",
            ExperimentalRole::Prey => "prey",
            ExperimentalRole::Neutral => "neutral",
            ExperimentalRole::SelfRole => "self",
            ExperimentalRole::Unspecified => "unspecified",
        }
    }

    /// Parse a role from its name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bait" => Some(ExperimentalRole::Bait),
            "prey" => Some(ExperimentalRole::Prey),
            "neutral" | "neutral component" => Some(ExperimentalRole::Neutral),
            "self" => Some(ExperimentalRole::SelfRole),
            "unspecified" | "unspecified role" | "" => Some(ExperimentalRole::Unspecified),
            _ => None,
        }
    }
}

impl std::str::FromStr for ExperimentalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid experimental role: {}", s))
    }
}

/// A molecule's participation in one interaction record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    /// The molecule
    pub interactor: InteractorRef,

    /// Experimental role
    pub role: ExperimentalRole,

    /// Number of copies of the molecule (0 when unknown or when the
    /// participant is the duplicated side of an intra-molecular self pair)
    pub stoichiometry: u32,

    /// Participant identification methods curated on this participant
    pub detection_methods: Vec<TermId>,
}

impl Participant {
    /// Create a participant with stoichiometry 1 and no detection methods
    pub fn new(interactor: InteractorRef, role: ExperimentalRole) -> Self {
        Self {
            interactor,
            role,
            stoichiometry: 1,
            detection_methods: Vec::new(),
        }
    }

    /// Set the stoichiometry
    pub fn with_stoichiometry(mut self, stoichiometry: u32) -> Self {
        self.stoichiometry = stoichiometry;
        self
    }

    /// Add a participant-level detection method
    pub fn with_detection_method(mut self, method: impl Into<TermId>) -> Self {
        self.detection_methods.push(method.into());
        self
    }

    /// Display label of the underlying interactor
    pub fn label(&self) -> Option<&str> {
        self.interactor.label.as_deref()
    }

    /// True if this participant is tagged as bait
    pub fn is_bait(&self) -> bool {
        self.role == ExperimentalRole::Bait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        for role in [
            ExperimentalRole::Bait,
            ExperimentalRole::Prey,
            ExperimentalRole::Neutral,
            ExperimentalRole::SelfRole,
            ExperimentalRole::Unspecified,
        ] {
            assert_eq!(ExperimentalRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_is_lenient() {
        assert_eq!(ExperimentalRole::parse("BAIT"), Some(ExperimentalRole::Bait));
        assert_eq!(ExperimentalRole::parse(""), Some(ExperimentalRole::Unspecified));
        assert!("ancillary".parse::<ExperimentalRole>().is_err());
    }

    #[test]
    fn test_default_stoichiometry() {
        let p = Participant::new(InteractorRef::new("EBI-1"), ExperimentalRole::Prey);
        assert_eq!(p.stoichiometry, 1);
        assert!(!p.is_bait());
    }
}

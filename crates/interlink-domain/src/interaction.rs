//! Interaction records as curated

use crate::{ExperimentalRole, Participant, TermId};

/// Shape of an interaction record, decided before expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionCategory {
    /// Exactly two participants
    Binary,

    /// One participant with the `self` role: the molecule binds itself
    SelfIntraMolecular,

    /// One non-`self` participant with stoichiometry of two or more (homo-oligomer)
    SelfInterMolecular,

    /// More than two participants
    NAry,
}

/// One curated evidence item describing an interaction
///
/// Records are owned by the external store and are never mutated by the
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    /// Opaque identifier
    pub id: String,

    /// Participants in curation order
    pub participants: Vec<Participant>,

    /// Interaction detection method, if curated at interaction level
    pub detection_method: Option<TermId>,

    /// Interaction type
    pub interaction_type: TermId,

    /// Publication identifier (e.g. a PubMed id)
    pub publication: String,

    /// Negative evidence: the interaction was shown NOT to occur
    pub negative: bool,
}

impl InteractionRecord {
    /// Create a record without participants
    pub fn new(
        id: impl Into<String>,
        publication: impl Into<String>,
        interaction_type: impl Into<TermId>,
    ) -> Self {
        Self {
            id: id.into(),
            participants: Vec::new(),
            detection_method: None,
            interaction_type: interaction_type.into(),
            publication: publication.into(),
            negative: false,
        }
    }

    /// Add a participant
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// Set the interaction detection method
    pub fn with_detection_method(mut self, method: impl Into<TermId>) -> Self {
        self.detection_method = Some(method.into());
        self
    }

    /// Mark the record as negative evidence
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// True if this is already a true pairwise interaction:
    /// two participants, not both tagged `self`
    pub fn is_binary(&self) -> bool {
        match self.participants.as_slice() {
            [a, b] => !(a.role == ExperimentalRole::SelfRole && b.role == ExperimentalRole::SelfRole),
            _ => false,
        }
    }

    /// Classify the record, or `None` when it fits no category
    ///
    /// # Examples
    ///
    /// ```
    /// use interlink_domain::{InteractionCategory, InteractionRecord};
    ///
    /// let empty = InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915");
    /// assert_eq!(empty.category(), None);
    /// ```
    pub fn category(&self) -> Option<InteractionCategory> {
        match self.participants.as_slice() {
            [] => None,
            [single] => {
                if single.role == ExperimentalRole::SelfRole {
                    Some(InteractionCategory::SelfIntraMolecular)
                } else if single.stoichiometry >= 2 {
                    Some(InteractionCategory::SelfInterMolecular)
                } else {
                    None
                }
            }
            [_, _] => Some(InteractionCategory::Binary),
            _ => Some(InteractionCategory::NAry),
        }
    }

    /// First participant tagged as bait, in curation order
    pub fn bait(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_bait())
    }

    /// Distinct participant-level detection methods across all participants,
    /// in identifier order
    pub fn participant_detection_methods(&self) -> Vec<TermId> {
        let mut methods: Vec<TermId> = self
            .participants
            .iter()
            .flat_map(|p| p.detection_methods.iter().cloned())
            .filter(|m| !m.is_blank())
            .collect();
        methods.sort();
        methods.dedup();
        methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InteractorRef;

    fn participant(id: &str, role: ExperimentalRole) -> Participant {
        Participant::new(InteractorRef::new(id), role)
    }

    #[test]
    fn test_category_binary() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Bait))
            .with_participant(participant("b", ExperimentalRole::Prey));
        assert_eq!(record.category(), Some(InteractionCategory::Binary));
        assert!(record.is_binary());
    }

    #[test]
    fn test_category_self() {
        let intra = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::SelfRole));
        assert_eq!(intra.category(), Some(InteractionCategory::SelfIntraMolecular));
        assert!(!intra.is_binary());

        let inter = InteractionRecord::new("i2", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Neutral).with_stoichiometry(2));
        assert_eq!(inter.category(), Some(InteractionCategory::SelfInterMolecular));
    }

    #[test]
    fn test_category_self_role_wins_over_stoichiometry() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::SelfRole).with_stoichiometry(2));
        assert_eq!(record.category(), Some(InteractionCategory::SelfIntraMolecular));
    }

    #[test]
    fn test_category_unclassifiable_single() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Prey));
        assert_eq!(record.category(), None);
    }

    #[test]
    fn test_category_n_ary() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Neutral))
            .with_participant(participant("b", ExperimentalRole::Neutral))
            .with_participant(participant("c", ExperimentalRole::Neutral));
        assert_eq!(record.category(), Some(InteractionCategory::NAry));
        assert!(!record.is_binary());
    }

    #[test]
    fn test_double_self_is_not_binary() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::SelfRole))
            .with_participant(participant("a", ExperimentalRole::SelfRole));
        assert!(!record.is_binary());
    }

    #[test]
    fn test_first_bait_wins() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Prey))
            .with_participant(participant("b", ExperimentalRole::Bait))
            .with_participant(participant("c", ExperimentalRole::Bait));
        assert_eq!(record.bait().map(|p| p.interactor.id.as_str()), Some("b"));
    }

    #[test]
    fn test_participant_methods_are_distinct_and_sorted() {
        let record = InteractionRecord::new("i1", "p1", "MI:0915")
            .with_participant(participant("a", ExperimentalRole::Bait).with_detection_method("MI:0113"))
            .with_participant(
                participant("b", ExperimentalRole::Prey)
                    .with_detection_method("MI:0096")
                    .with_detection_method("MI:0113"),
            );
        assert_eq!(
            record.participant_detection_methods(),
            vec![TermId::new("MI:0096"), TermId::new("MI:0113")]
        );
    }
}

//! Binary interactions - output of the expansion step

use crate::{InteractionRecord, Participant, TermId};

/// An interaction reduced to exactly two participants
///
/// `a` and `b` may reference the same molecule for self-interactions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryInteraction {
    /// First participant
    pub a: Participant,

    /// Second participant
    pub b: Participant,

    /// Identifier of the originating interaction record
    pub interaction_id: String,

    /// Interaction detection method of the originating record
    pub detection_method: Option<TermId>,

    /// Interaction type of the originating record
    pub interaction_type: TermId,

    /// Publication of the originating record
    pub publication: String,

    /// True when derived from an n-ary record through spoke or matrix fan-out
    pub spoke_expanded: bool,

    /// Negative evidence flag of the originating record
    pub negative: bool,

    /// Distinct participant-level detection methods of every participant in
    /// the originating record, used to infer a missing interaction method
    pub sibling_detection_methods: Vec<TermId>,
}

impl BinaryInteraction {
    /// Build a binary interaction from its originating record
    pub fn from_record(
        record: &InteractionRecord,
        a: Participant,
        b: Participant,
        spoke_expanded: bool,
    ) -> Self {
        Self {
            a,
            b,
            interaction_id: record.id.clone(),
            detection_method: record.detection_method.clone(),
            interaction_type: record.interaction_type.clone(),
            publication: record.publication.clone(),
            spoke_expanded,
            negative: record.negative,
            sibling_detection_methods: record.participant_detection_methods(),
        }
    }

    /// True when both sides reference the same interactor
    pub fn is_self(&self) -> bool {
        self.a.interactor.id == self.b.interactor.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExperimentalRole, InteractorRef};

    #[test]
    fn test_from_record_copies_evidence() {
        let a = Participant::new(InteractorRef::new("a"), ExperimentalRole::Bait)
            .with_detection_method("MI:0113");
        let b = Participant::new(InteractorRef::new("b"), ExperimentalRole::Prey);
        let record = InteractionRecord::new("EBI-9", "pubmed:42", "MI:0915")
            .with_detection_method("MI:0018")
            .with_negative(true)
            .with_participant(a.clone())
            .with_participant(b.clone());

        let binary = BinaryInteraction::from_record(&record, a, b, false);
        assert_eq!(binary.interaction_id, "EBI-9");
        assert_eq!(binary.publication, "pubmed:42");
        assert_eq!(binary.detection_method, Some(TermId::new("MI:0018")));
        assert!(binary.negative);
        assert!(!binary.spoke_expanded);
        assert!(!binary.is_self());
        assert_eq!(binary.sibling_detection_methods, vec![TermId::new("MI:0113")]);
    }
}

//! Batch expansion over many records

use crate::ExpansionStrategy;
use interlink_domain::{BinaryInteraction, InteractionRecord};
use rayon::prelude::*;

/// Binary interactions produced from one source record
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRecord {
    /// Identifier of the source record
    pub interaction_id: String,

    /// Binary interactions derived from it (empty when the record was skipped)
    pub binaries: Vec<BinaryInteraction>,
}

impl ExpandedRecord {
    /// True if the strategy produced nothing for this record
    pub fn is_skipped(&self) -> bool {
        self.binaries.is_empty()
    }
}

/// Expand every record, keeping input order
///
/// Records are independent, so with `parallel` set the work is spread over
/// the rayon pool; the result is identical either way.
pub fn expand_all(strategy: ExpansionStrategy, records: &[InteractionRecord], parallel: bool) -> Vec<ExpandedRecord> {
    let expand_one = |record: &InteractionRecord| {
        let binaries = strategy.expand(record);
        if binaries.is_empty() {
            tracing::debug!(
                interaction = %record.id,
                participants = record.participants.len(),
                strategy = %strategy,
                "Record produced no binary interactions"
            );
        }
        ExpandedRecord {
            interaction_id: record.id.clone(),
            binaries,
        }
    };

    if parallel {
        records.par_iter().map(expand_one).collect()
    } else {
        records.iter().map(expand_one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlink_domain::{ExperimentalRole, InteractorRef, Participant};

    fn records() -> Vec<InteractionRecord> {
        (0..20)
            .map(|i| {
                let mut record = InteractionRecord::new(format!("EBI-{}", i), "pubmed:1", "MI:0915");
                for j in 0..(i % 5) {
                    let role = if j == 0 { ExperimentalRole::Bait } else { ExperimentalRole::Prey };
                    record = record.with_participant(Participant::new(InteractorRef::new(format!("p{}", j)), role));
                }
                record
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = records();
        let sequential = expand_all(ExpansionStrategy::Spoke, &input, false);
        let parallel = expand_all(ExpansionStrategy::Spoke, &input, true);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), input.len());
    }

    #[test]
    fn test_skipped_records_are_kept_in_place() {
        let input = records();
        let expanded = expand_all(ExpansionStrategy::Spoke, &input, false);

        // 0 participants and a lone bait cannot be expanded
        assert!(expanded[0].is_skipped());
        assert!(expanded[1].is_skipped());
        assert_eq!(expanded[2].binaries.len(), 1);
        assert_eq!(expanded[4].binaries.len(), 3);
        assert_eq!(expanded[4].interaction_id, "EBI-4");
    }
}

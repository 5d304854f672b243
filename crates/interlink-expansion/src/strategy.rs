//! Expansion strategies
//!
//! All strategies share the same handling of records that are already binary
//! or self-interactions; they only differ on records with more than two
//! participants.

use interlink_domain::{BinaryInteraction, InteractionCategory, InteractionRecord, Participant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for turning one interaction record into binary interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionStrategy {
    /// Only records that are already binary (or self-interactions)
    None,

    /// Fan out from the bait participant
    #[default]
    Spoke,

    /// Fan out from the bait, or from the label-first participant when no bait exists
    SpokeWithoutBait,

    /// Every unordered pair of participants
    Matrix,
}

impl ExpansionStrategy {
    /// Configuration name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionStrategy::None => "none",
            ExpansionStrategy::Spoke => "spoke",
            ExpansionStrategy::SpokeWithoutBait => "spoke_without_bait",
            ExpansionStrategy::Matrix => "matrix",
        }
    }

    /// Expand one record into binary interactions
    ///
    /// Returns an empty vector when the record has no participants, cannot be
    /// classified, or the strategy does not apply to it.
    pub fn expand(&self, record: &InteractionRecord) -> Vec<BinaryInteraction> {
        let Some(category) = record.category() else {
            return Vec::new();
        };

        match category {
            InteractionCategory::Binary => binary_pass_through(record),
            InteractionCategory::SelfIntraMolecular => self_pair(record, false),
            InteractionCategory::SelfInterMolecular => self_pair(record, true),
            InteractionCategory::NAry => match self {
                ExpansionStrategy::None => Vec::new(),
                ExpansionStrategy::Spoke => record
                    .participants
                    .iter()
                    .position(Participant::is_bait)
                    .map(|bait| fan_out(record, bait))
                    .unwrap_or_default(),
                ExpansionStrategy::SpokeWithoutBait => {
                    let bait = record
                        .participants
                        .iter()
                        .position(Participant::is_bait)
                        .or_else(|| surrogate_bait(&record.participants));
                    bait.map(|bait| fan_out(record, bait)).unwrap_or_default()
                }
                ExpansionStrategy::Matrix => all_pairs(record),
            },
        }
    }
}

impl fmt::Display for ExpansionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpansionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "none" => Ok(ExpansionStrategy::None),
            "spoke" => Ok(ExpansionStrategy::Spoke),
            "spoke_without_bait" => Ok(ExpansionStrategy::SpokeWithoutBait),
            "matrix" => Ok(ExpansionStrategy::Matrix),
            _ => Err(format!("Invalid expansion strategy: {}", s)),
        }
    }
}

fn binary_pass_through(record: &InteractionRecord) -> Vec<BinaryInteraction> {
    match record.participants.as_slice() {
        [a, b] => vec![BinaryInteraction::from_record(record, a.clone(), b.clone(), false)],
        _ => Vec::new(),
    }
}

/// Pair a single participant with a copy of itself
///
/// The copy keeps the stoichiometry only for inter-molecular self pairs.
fn self_pair(record: &InteractionRecord, keep_stoichiometry: bool) -> Vec<BinaryInteraction> {
    match record.participants.as_slice() {
        [single] => {
            let stoichiometry = if keep_stoichiometry { single.stoichiometry } else { 0 };
            let duplicate = single.clone().with_stoichiometry(stoichiometry);
            vec![BinaryInteraction::from_record(record, single.clone(), duplicate, false)]
        }
        _ => Vec::new(),
    }
}

/// Star expansion around the participant at `hub`
fn fan_out(record: &InteractionRecord, hub: usize) -> Vec<BinaryInteraction> {
    let Some(centre) = record.participants.get(hub) else {
        return Vec::new();
    };
    let spoke_expanded = record.participants.len() > 2;
    record
        .participants
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != hub)
        .map(|(_, other)| BinaryInteraction::from_record(record, centre.clone(), other.clone(), spoke_expanded))
        .collect()
}

/// Index of the participant that sorts first by label
///
/// Missing labels sort before any label. Interactor id and accession break
/// ties so the choice does not depend on participant order.
fn surrogate_bait(participants: &[Participant]) -> Option<usize> {
    participants
        .iter()
        .enumerate()
        .min_by(|(_, x), (_, y)| {
            x.label()
                .cmp(&y.label())
                .then_with(|| x.interactor.id.cmp(&y.interactor.id))
                .then_with(|| x.interactor.accession.cmp(&y.interactor.accession))
        })
        .map(|(index, _)| index)
}

fn all_pairs(record: &InteractionRecord) -> Vec<BinaryInteraction> {
    let participants = &record.participants;
    let mut pairs = Vec::with_capacity(participants.len() * participants.len().saturating_sub(1) / 2);
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            pairs.push(BinaryInteraction::from_record(record, first.clone(), second.clone(), true));
        }
    }
    pairs
}

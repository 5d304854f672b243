//! In-memory interaction store

use interlink_domain::traits::InteractionStore;
use interlink_domain::InteractionRecord;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by [`MemoryStore`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryStoreError {
    /// Records must have a non-blank identifier
    #[error("Interaction record has a blank identifier")]
    BlankId,
}

/// Interaction store backed by a sorted map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, InteractionRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl InteractionStore for MemoryStore {
    type Error = MemoryStoreError;

    fn load_interaction(&self, id: &str) -> Result<Option<InteractionRecord>, Self::Error> {
        Ok(self.records.get(id).cloned())
    }

    fn save_interaction(&mut self, record: InteractionRecord) -> Result<(), Self::Error> {
        if record.id.trim().is_empty() {
            return Err(MemoryStoreError::BlankId);
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn interaction_ids(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.records.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        store
            .save_interaction(InteractionRecord::new("EBI-2", "pubmed:1", "MI:0915"))
            .unwrap();
        store
            .save_interaction(InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915"))
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.interaction_ids().unwrap(), vec!["EBI-1", "EBI-2"]);
        assert!(store.load_interaction("EBI-1").unwrap().is_some());
        assert!(store.load_interaction("EBI-3").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing() {
        let mut store = MemoryStore::new();
        store
            .save_interaction(InteractionRecord::new("EBI-1", "pubmed:1", "MI:0915"))
            .unwrap();
        store
            .save_interaction(InteractionRecord::new("EBI-1", "pubmed:2", "MI:0915"))
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load_interaction("EBI-1").unwrap().unwrap().publication, "pubmed:2");
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut store = MemoryStore::new();
        let result = store.save_interaction(InteractionRecord::new(" ", "pubmed:1", "MI:0915"));
        assert_eq!(result, Err(MemoryStoreError::BlankId));
    }
}

//! In-memory term graph

use crate::OntologyError;
use interlink_domain::traits::OntologyGraph;
use interlink_domain::TermId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A controlled-vocabulary term as loaded from an ontology dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Term identifier
    pub id: String,

    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifiers of direct parents
    #[serde(default)]
    pub parents: Vec<String>,
}

impl Term {
    /// Create a root term
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            parents: Vec::new(),
        }
    }

    /// Set the term name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a direct parent
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
struct TermNode {
    name: Option<String>,
    parents: BTreeSet<TermId>,
    children: BTreeSet<TermId>,
}

/// Directed acyclic graph of controlled-vocabulary terms
#[derive(Debug, Clone, Default)]
pub struct TermGraph {
    nodes: BTreeMap<TermId, TermNode>,
}

impl TermGraph {
    /// Build a graph, rejecting duplicates, dangling parents and cycles
    pub fn from_terms<I>(terms: I) -> Result<Self, OntologyError>
    where
        I: IntoIterator<Item = Term>,
    {
        let mut nodes: BTreeMap<TermId, TermNode> = BTreeMap::new();

        for term in terms {
            let id = TermId::new(term.id.trim());
            if id.is_blank() {
                return Err(OntologyError::BlankTerm);
            }
            if nodes.contains_key(&id) {
                return Err(OntologyError::DuplicateTerm(id));
            }
            let parents = term
                .parents
                .iter()
                .map(|p| TermId::new(p.trim()))
                .collect::<BTreeSet<_>>();
            if parents.contains(&id) {
                return Err(OntologyError::Cycle(id));
            }
            nodes.insert(
                id,
                TermNode {
                    name: term.name,
                    parents,
                    children: BTreeSet::new(),
                },
            );
        }

        // Wire child edges once every term is known
        let edges: Vec<(TermId, TermId)> = nodes
            .iter()
            .flat_map(|(id, node)| node.parents.iter().map(move |p| (id.clone(), p.clone())))
            .collect();
        for (child, parent) in edges {
            match nodes.get_mut(&parent) {
                Some(parent_node) => {
                    parent_node.children.insert(child);
                }
                None => {
                    return Err(OntologyError::UnknownParent { term: child, parent });
                }
            }
        }

        let graph = Self { nodes };
        graph.check_acyclic()?;
        tracing::debug!(terms = graph.len(), "Built term graph");
        Ok(graph)
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph holds no terms
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of a term
    pub fn name(&self, term: &TermId) -> Option<&str> {
        self.nodes.get(term).and_then(|n| n.name.as_deref())
    }

    /// Direct children of a term
    pub fn children_of(&self, term: &TermId) -> BTreeSet<TermId> {
        self.nodes
            .get(term)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Terms without parents
    pub fn roots(&self) -> Vec<&TermId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parents.is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// Kahn's algorithm: every term must be reachable in topological order
    fn check_acyclic(&self) -> Result<(), OntologyError> {
        let mut pending: BTreeMap<&TermId, usize> = self
            .nodes
            .iter()
            .map(|(id, node)| (id, node.parents.len()))
            .collect();
        let mut ready: Vec<&TermId> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut visited = 0usize;

        while let Some(id) = ready.pop() {
            visited += 1;
            if let Some(node) = self.nodes.get(id) {
                for child in &node.children {
                    if let Some(count) = pending.get_mut(child) {
                        *count -= 1;
                        if *count == 0 {
                            ready.push(child);
                        }
                    }
                }
            }
        }

        if visited == self.nodes.len() {
            return Ok(());
        }
        let stuck = pending
            .into_iter()
            .find(|(_, count)| *count > 0)
            .map(|(id, _)| id.clone());
        match stuck {
            Some(id) => Err(OntologyError::Cycle(id)),
            None => Ok(()),
        }
    }
}

impl OntologyGraph for TermGraph {
    fn parents_of(&self, term: &TermId) -> BTreeSet<TermId> {
        self.nodes
            .get(term)
            .map(|n| n.parents.clone())
            .unwrap_or_default()
    }

    fn all_term_ids(&self) -> BTreeSet<TermId> {
        self.nodes.keys().cloned().collect()
    }

    fn contains(&self, term: &TermId) -> bool {
        self.nodes.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_are_wired() {
        let graph = TermGraph::from_terms(vec![
            Term::new("1"),
            Term::new("2").with_parent("1"),
            Term::new("3").with_parent("1"),
        ])
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.children_of(&TermId::new("1")).len(), 2);
        assert_eq!(graph.roots(), vec![&TermId::new("1")]);
        assert!(graph.contains(&TermId::new("3")));
        assert!(!graph.contains(&TermId::new("4")));
    }

    #[test]
    fn test_parents_declared_before_or_after() {
        let graph = TermGraph::from_terms(vec![Term::new("2").with_parent("1"), Term::new("1")]);
        assert!(graph.is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = TermGraph::from_terms(vec![Term::new("1"), Term::new("1")]).unwrap_err();
        assert_eq!(err, OntologyError::DuplicateTerm(TermId::new("1")));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let err = TermGraph::from_terms(vec![Term::new("2").with_parent("1")]).unwrap_err();
        assert!(matches!(err, OntologyError::UnknownParent { .. }));
    }

    #[test]
    fn test_cycle_rejected() {
        let err = TermGraph::from_terms(vec![
            Term::new("root"),
            Term::new("a").with_parent("root").with_parent("b"),
            Term::new("b").with_parent("a"),
        ])
        .unwrap_err();
        assert!(matches!(err, OntologyError::Cycle(_)));

        let self_loop = TermGraph::from_terms(vec![Term::new("a").with_parent("a")]).unwrap_err();
        assert_eq!(self_loop, OntologyError::Cycle(TermId::new("a")));
    }

    #[test]
    fn test_term_deserializes_without_optional_fields() {
        let term: Term = serde_json::from_str(r#"{"id": "MI:0001"}"#).unwrap();
        assert_eq!(term, Term::new("MI:0001"));

        let named: Term =
            serde_json::from_str(r#"{"id": "MI:0018", "name": "two hybrid", "parents": ["MI:0001"]}"#).unwrap();
        assert_eq!(named.name.as_deref(), Some("two hybrid"));
        assert_eq!(named.parents, vec!["MI:0001".to_string()]);
    }
}

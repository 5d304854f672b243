//! Ancestor and lowest-common-ancestor queries

use crate::OntologyError;
use interlink_domain::traits::OntologyGraph;
use interlink_domain::TermId;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Query layer over an ontology graph
///
/// Term depths are computed once at construction; after that every query is
/// read-only, so a lookup can be shared across threads behind an `Arc`.
pub struct OntologyLookup {
    graph: Arc<dyn OntologyGraph + Send + Sync>,
    depths: HashMap<TermId, usize>,
}

impl fmt::Debug for OntologyLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntologyLookup")
            .field("terms", &self.depths.len())
            .finish()
    }
}

impl OntologyLookup {
    /// Build a lookup over a graph
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Cycle`] if parent edges are not acyclic.
    pub fn new<G>(graph: G) -> Result<Self, OntologyError>
    where
        G: OntologyGraph + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(graph))
    }

    /// Build a lookup over a graph that is already shared
    pub fn from_shared(graph: Arc<dyn OntologyGraph + Send + Sync>) -> Result<Self, OntologyError> {
        let depths = compute_depths(graph.as_ref())?;
        Ok(Self { graph, depths })
    }

    /// The underlying graph
    pub fn graph(&self) -> &dyn OntologyGraph {
        self.graph.as_ref()
    }

    /// Longest parent-path length from the term to a root (roots have depth 0)
    pub fn depth(&self, term: &TermId) -> Option<usize> {
        self.depths.get(term).copied()
    }

    /// True for terms without parents, including terms unknown to the graph
    pub fn is_root(&self, term: &TermId) -> bool {
        self.graph.parents_of(term).is_empty()
    }

    /// The term plus all of its transitive parents
    pub fn ancestors(&self, term: &TermId) -> BTreeSet<TermId> {
        let mut visited = BTreeSet::new();
        let mut stack = vec![term.clone()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for parent in self.graph.parents_of(&current) {
                if !visited.contains(&parent) {
                    stack.push(parent);
                }
            }
        }
        visited
    }

    /// Ancestors grouped by shortest distance: index 0 holds the term itself,
    /// index 1 its parents, and so on
    pub fn ancestors_by_distance(&self, term: &TermId) -> Vec<BTreeSet<TermId>> {
        let mut levels = Vec::new();
        let mut seen: BTreeSet<TermId> = BTreeSet::new();
        let mut frontier: BTreeSet<TermId> = BTreeSet::from([term.clone()]);

        while !frontier.is_empty() {
            seen.extend(frontier.iter().cloned());
            let next: BTreeSet<TermId> = frontier
                .iter()
                .flat_map(|t| self.graph.parents_of(t))
                .filter(|p| !seen.contains(p))
                .collect();
            levels.push(frontier);
            frontier = next;
        }
        levels
    }

    /// True if `ancestor` is the term itself or one of its transitive parents
    pub fn is_a(&self, term: &TermId, ancestor: &TermId) -> bool {
        self.ancestors(term).contains(ancestor)
    }

    /// Most specific term that is an ancestor of every given term
    ///
    /// Ancestor sets include the terms themselves. Roots never qualify: the
    /// top of a vocabulary carries no classification. Among the common
    /// ancestors the deepest wins; equal depths fall back to identifier order.
    /// Returns `None` for an empty input or when nothing but roots is shared.
    pub fn lowest_common_ancestor(&self, terms: &[TermId]) -> Option<TermId> {
        let (first, rest) = terms.split_first()?;
        let mut common = self.ancestors(first);
        for term in rest {
            let ancestors = self.ancestors(term);
            common.retain(|t| ancestors.contains(t));
            if common.is_empty() {
                return None;
            }
        }

        let mut best: Option<(usize, &TermId)> = None;
        for candidate in common.iter().filter(|t| !self.is_root(t)) {
            let depth = self.depth(candidate).unwrap_or(0);
            // BTreeSet iterates in identifier order, so a strict comparison
            // keeps the first identifier on ties
            match best {
                Some((best_depth, _)) if depth <= best_depth => {}
                _ => best = Some((depth, candidate)),
            }
        }
        best.map(|(_, term)| term.clone())
    }
}

/// Topological pass assigning each term its longest distance from a root
fn compute_depths(graph: &dyn OntologyGraph) -> Result<HashMap<TermId, usize>, OntologyError> {
    let mut parents: BTreeMap<TermId, BTreeSet<TermId>> = BTreeMap::new();
    for term in graph.all_term_ids() {
        let term_parents = graph.parents_of(&term);
        for parent in &term_parents {
            parents.entry(parent.clone()).or_default();
        }
        parents.insert(term, term_parents);
    }

    let mut children: BTreeMap<&TermId, Vec<&TermId>> = BTreeMap::new();
    let mut pending: BTreeMap<&TermId, usize> = BTreeMap::new();
    for (term, term_parents) in &parents {
        pending.insert(term, term_parents.len());
        for parent in term_parents {
            children.entry(parent).or_default().push(term);
        }
    }

    let mut depths: HashMap<TermId, usize> = HashMap::with_capacity(parents.len());
    let mut ready: Vec<&TermId> = pending
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(term, _)| *term)
        .collect();
    for root in &ready {
        depths.insert((*root).clone(), 0);
    }

    while let Some(term) = ready.pop() {
        let depth = depths.get(term).copied().unwrap_or(0);
        for child in children.get(term).into_iter().flatten() {
            let entry = depths.entry((*child).clone()).or_insert(0);
            *entry = (*entry).max(depth + 1);
            if let Some(count) = pending.get_mut(*child) {
                *count -= 1;
                if *count == 0 {
                    ready.push(child);
                }
            }
        }
    }

    if let Some((term, _)) = pending.iter().find(|(_, count)| **count > 0) {
        return Err(OntologyError::Cycle((*term).clone()));
    }
    Ok(depths)
}

//! Graph construction from a filtered ontology view

use crate::ontology::{Entity, FilteredOntology, Identifier, Relation};
use std::collections::{HashMap, HashSet};

/// Rule mapping an entity's relations to graph edges of interest
///
/// Pluggable the same way a view predicate is: the ontology stores every
/// relation, a strategy decides which kind becomes an edge.
pub trait EdgeStrategy: Send + Sync {
    /// Candidate target identifiers, in relation insertion order
    fn targets(&self, entity: &Entity) -> Vec<Identifier>;
}

/// Every `LinksTo` relation becomes an edge
#[derive(Debug, Default)]
pub struct LinkEdges;

impl EdgeStrategy for LinkEdges {
    fn targets(&self, entity: &Entity) -> Vec<Identifier> {
        entity.link_targets().cloned().collect()
    }
}

/// Every `IsA` relation becomes an edge
#[derive(Debug, Default)]
pub struct IsAEdges;

impl EdgeStrategy for IsAEdges {
    fn targets(&self, entity: &Entity) -> Vec<Identifier> {
        entity
            .relations()
            .filter_map(|r| match r {
                Relation::IsA(target) => Some(target.clone()),
                _ => None,
            })
            .collect()
    }
}

/// An immutable directed adjacency structure over entity identifiers
///
/// Built once from a filtered view plus an edge strategy; never mutated
/// afterwards, so it can be read concurrently. Invariant: every edge's
/// source and target belong to the included set; candidate targets that
/// were filtered out, or never existed, are silently dropped.
#[derive(Debug)]
pub struct Graph {
    included: HashSet<Identifier>,
    adjacency: HashMap<Identifier, Vec<Identifier>>,
    edge_count: usize,
}

impl Graph {
    /// Build the graph for everything visible through `view`
    ///
    /// Adjacency lists follow relation insertion order with duplicates
    /// removed, so the same ontology, predicate, and strategy always
    /// produce a structurally identical graph.
    pub fn build(view: &FilteredOntology<'_>, strategy: &dyn EdgeStrategy) -> Self {
        let included: HashSet<Identifier> =
            view.iter().map(|e| e.identifier().clone()).collect();

        let mut adjacency: HashMap<Identifier, Vec<Identifier>> = HashMap::new();
        let mut edge_count = 0;
        for entity in view.iter() {
            let mut neighbors = Vec::new();
            for target in strategy.targets(entity) {
                if included.contains(&target) && !neighbors.contains(&target) {
                    neighbors.push(target);
                }
            }
            edge_count += neighbors.len();
            adjacency.insert(entity.identifier().clone(), neighbors);
        }

        Self {
            included,
            adjacency,
            edge_count,
        }
    }

    /// Whether an identifier is in the included set
    pub fn contains(&self, id: &Identifier) -> bool {
        self.included.contains(id)
    }

    /// Outgoing neighbors of a node, in deterministic order
    pub fn neighbors(&self, id: &Identifier) -> &[Identifier] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate all included identifiers
    pub fn nodes(&self) -> impl Iterator<Item = &Identifier> {
        self.included.iter()
    }

    /// Number of included nodes
    pub fn node_count(&self) -> usize {
        self.included.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

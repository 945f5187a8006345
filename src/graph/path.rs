//! Shortest-path queries over a built graph

use super::build::Graph;
use crate::ontology::Identifier;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Raised when a query endpoint is not in the graph's included set
///
/// Distinct from a not-found path result: the entity does not exist in
/// this filter at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity not found in this filter: {0}")]
pub struct EntityNotFound(pub Identifier);

/// Result of a path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Identifiers from source to target (inclusive); empty when not found
    pub path: Vec<Identifier>,
    /// Path length in hops (`nodes - 1`); 0 for the same-node case
    pub length: usize,
}

impl PathResult {
    /// No route between the endpoints
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            length: 0,
        }
    }

    /// A concrete path; length is the hop count
    pub fn found(path: Vec<Identifier>) -> Self {
        let length = path.len().saturating_sub(1);
        Self {
            found: true,
            path,
            length,
        }
    }
}

/// Query for the shortest path between two entities
///
/// Unweighted breadth-first search over outgoing edges. Each node is
/// discovered at most once and records a single predecessor,
/// first-discovered-wins; combined with the graph's deterministic
/// adjacency order, the reported path is reproducible, not merely
/// "some shortest path".
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source identifier
    pub source: Identifier,
    /// Target identifier
    pub target: Identifier,
}

impl PathQuery {
    /// Create a query between two entities
    pub fn between(source: Identifier, target: Identifier) -> Self {
        Self { source, target }
    }

    /// Execute the query against a graph
    ///
    /// - an endpoint outside the included set → `Err(EntityNotFound)`
    /// - `source == target` → a single-node path of length 0
    /// - no route → `Ok(PathResult::not_found())`, empty path
    ///
    /// Read-only: queries may run concurrently against the same graph.
    pub fn execute(&self, graph: &Graph) -> Result<PathResult, EntityNotFound> {
        if !graph.contains(&self.source) {
            return Err(EntityNotFound(self.source.clone()));
        }
        if !graph.contains(&self.target) {
            return Err(EntityNotFound(self.target.clone()));
        }
        if self.source == self.target {
            return Ok(PathResult::found(vec![self.source.clone()]));
        }

        let mut visited: HashSet<&Identifier> = HashSet::new();
        let mut queue: VecDeque<&Identifier> = VecDeque::new();
        let mut predecessors: HashMap<&Identifier, &Identifier> = HashMap::new();

        visited.insert(&self.source);
        queue.push_back(&self.source);

        'search: while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                predecessors.insert(neighbor, current);
                if *neighbor == self.target {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }

        if !predecessors.contains_key(&self.target) {
            return Ok(PathResult::not_found());
        }

        // Walk predecessor links back from the target, then reverse
        let mut path = vec![self.target.clone()];
        let mut current = &self.target;
        while let Some(&pred) = predecessors.get(current) {
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();

        Ok(PathResult::found(path))
    }
}

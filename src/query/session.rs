//! Query parsing and the filter-to-graph session state

use super::registry::FilterRegistry;
use crate::graph::{EdgeStrategy, Graph, PathQuery, PathResult};
use crate::ontology::{FilteredOntology, Identifier, Ontology};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Query-time user errors; all recoverable, the loop continues
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The line does not have the `<filter> <from> <to>` shape
    #[error("invalid input")]
    Malformed,

    /// No graph is registered under this filter name
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// The entity is not in the chosen filter's graph
    #[error("entity does not exist in filter '{filter}': {title}")]
    UnknownEntity { title: Identifier, filter: String },
}

/// A parsed query tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Filter name, lowercased for lookup
    pub filter: String,
    /// Source entity title
    pub from: Identifier,
    /// Target entity title
    pub to: Identifier,
}

impl Query {
    /// Parse a `<filterName> <fromTitle> <toTitle>` line
    ///
    /// Exactly three whitespace-separated tokens; anything else is
    /// malformed. Blank-line session termination is the caller's job.
    pub fn parse(line: &str) -> Result<Self, QueryError> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(filter), Some(from), Some(to), None) => Ok(Self {
                filter: filter.to_lowercase(),
                from: Identifier::from(from),
                to: Identifier::from(to),
            }),
            _ => Err(QueryError::Malformed),
        }
    }
}

/// The named-filter graph cache
///
/// One graph per registered filter, built once before any query is
/// served and never rebuilt. The map is concurrent-read safe, so the
/// steady-state query path needs no locking discipline.
pub struct GraphSet {
    graphs: DashMap<String, Arc<Graph>>,
}

impl GraphSet {
    /// Build one graph per filter in `registry`
    pub fn build_all(
        ontology: &Ontology,
        registry: &FilterRegistry,
        strategy: &dyn EdgeStrategy,
    ) -> Self {
        let graphs = DashMap::new();
        for (name, filter) in registry.iter() {
            let view = FilteredOntology::new(ontology, filter.as_ref());
            let graph = Graph::build(&view, strategy);
            debug!(
                filter = name,
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "graph built"
            );
            graphs.insert(name.to_string(), Arc::new(graph));
        }
        Self { graphs }
    }

    /// Look up a graph by filter name, case-insensitively
    pub fn get(&self, name: &str) -> Option<Arc<Graph>> {
        self.graphs.get(&name.to_lowercase()).map(|g| g.clone())
    }

    /// Number of cached graphs
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Whether no graphs are cached
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Resolves query tuples against the graph cache
///
/// The session is the application-state value the query loop threads
/// through: no ambient globals, just the prebuilt graphs.
pub struct QuerySession {
    graphs: GraphSet,
}

impl QuerySession {
    /// Create a session over a prebuilt graph cache
    pub fn new(graphs: GraphSet) -> Self {
        Self { graphs }
    }

    /// Resolve and run one query
    pub fn run(&self, query: &Query) -> Result<PathResult, QueryError> {
        let graph = self
            .graphs
            .get(&query.filter)
            .ok_or_else(|| QueryError::UnknownFilter(query.filter.clone()))?;

        PathQuery::between(query.from.clone(), query.to.clone())
            .execute(&graph)
            .map_err(|e| QueryError::UnknownEntity {
                title: e.0,
                filter: query.filter.clone(),
            })
    }

    /// Parse a line and run it
    pub fn run_line(&self, line: &str) -> Result<PathResult, QueryError> {
        self.run(&Query::parse(line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LinkEdges;
    use crate::pipeline::{Article, OntologyBuilder};
    use crate::importer::VecSource;

    fn session() -> QuerySession {
        let mut source = VecSource::new(vec![
            Article::new("A", "[[B]]"),
            Article::new("B", "[[C]] [[Category:Physicists]]"),
            Article::new("C", ""),
        ]);
        let ontology = OntologyBuilder::standard().build(&mut source).unwrap();
        let registry = FilterRegistry::with_defaults();
        QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges))
    }

    #[test]
    fn test_parse_requires_exactly_three_tokens() {
        assert!(Query::parse("all A").is_err());
        assert!(Query::parse("all A B C").is_err());
        assert!(Query::parse("").is_err());

        let query = Query::parse("  ALL   A  B ").unwrap();
        assert_eq!(query.filter, "all");
        assert_eq!(query.from, Identifier::from("A"));
    }

    #[test]
    fn test_unknown_filter_reported_without_running() {
        let session = session();
        let err = session.run_line("nosuch A B").unwrap_err();
        assert_eq!(err, QueryError::UnknownFilter("nosuch".into()));
    }

    #[test]
    fn test_unknown_entity_names_filter_and_side() {
        let session = session();
        // C is not a physicist, so it is absent from that graph
        let err = session.run_line("physicist B C").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownEntity {
                title: Identifier::from("C"),
                filter: "physicist".into(),
            }
        );
    }

    #[test]
    fn test_query_through_cached_graph() {
        let session = session();
        let result = session.run_line("all A C").unwrap();
        assert!(result.found);
        assert_eq!(result.length, 2);
    }

    #[test]
    fn test_filter_name_lookup_is_case_insensitive() {
        let session = session();
        assert!(session.run_line("ALL A C").is_ok());
    }
}

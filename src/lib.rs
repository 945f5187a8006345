//! Wikigraph: wiki ontology extraction with shortest-path queries
//!
//! Builds a typed entity-relation graph (an "ontology") from a stream of
//! encyclopedia-style articles, derives relations through classification
//! heuristics, projects the result through named filters into directed
//! graphs, and answers shortest-path queries between entities.
//!
//! # Core Concepts
//!
//! - **Entities**: one per accepted article, keyed by title
//! - **Relations**: typed directed edges (`IsA`, `LinksTo`) derived by analyses
//! - **Filtered views**: predicate-restricted projections of the ontology
//! - **Graphs**: immutable adjacency structures, one per named filter
//!
//! # Example
//!
//! ```
//! use wikigraph::importer::VecSource;
//! use wikigraph::pipeline::{Article, OntologyBuilder};
//! use wikigraph::graph::LinkEdges;
//! use wikigraph::query::{FilterRegistry, GraphSet, QuerySession};
//!
//! let mut source = VecSource::new(vec![
//!     Article::new("A", "Links to [[B]]."),
//!     Article::new("B", "Links to [[C]]."),
//!     Article::new("C", "No outgoing links."),
//! ]);
//! let ontology = OntologyBuilder::standard().build(&mut source).unwrap();
//!
//! let registry = FilterRegistry::with_defaults();
//! let session = QuerySession::new(GraphSet::build_all(&ontology, &registry, &LinkEdges));
//! let result = session.run_line("all A C").unwrap();
//! assert_eq!(result.length, 2);
//! ```

pub mod graph;
pub mod importer;
pub mod ontology;
pub mod pipeline;
pub mod query;

pub use graph::{EdgeStrategy, Graph, LinkEdges, PathQuery, PathResult};
pub use importer::{ArticleSource, SourceError, VecSource, XmlDumpReader};
pub use ontology::{Entity, EntityFilter, FilteredOntology, Identifier, Ontology, Relation};
pub use pipeline::{Article, ArticleSink, OntologyBuilder};
pub use query::{FilterRegistry, GraphSet, Query, QueryError, QuerySession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

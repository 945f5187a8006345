//! Article classification pipeline
//!
//! Turns a stream of raw articles into the entity-relation ontology:
//! an inclusion filter chain decides which articles become entities, and
//! an ordered list of analyses derives each entity's relations.

pub mod analyzers;
mod article;
mod builder;
mod filters;
mod markup;
mod traits;

pub use article::{Article, ArticleSink, CollectingSink, NullSink};
pub use builder::OntologyBuilder;
pub use filters::{NamespaceFilter, PersonFilter, RedirectFilter};
pub use traits::{Analysis, ArticleFilter};

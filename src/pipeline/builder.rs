//! The classification pipeline

use super::analyzers::{LinkExtractor, PhysicistClassifier};
use super::article::{Article, ArticleSink, NullSink};
use super::filters::{NamespaceFilter, RedirectFilter};
use super::traits::{Analysis, ArticleFilter};
use crate::importer::{ArticleSource, SourceError};
use crate::ontology::{Entity, Ontology};
use tracing::{debug, info};

/// Builds an [`Ontology`] from a stream of articles
///
/// For each article, in source order:
/// 1. evaluate the filter chain (logical AND of all registered filters);
///    on failure, forward the article to the rejected sink and skip it
/// 2. create an entity keyed by the article title
/// 3. run every registered analysis in registration order
/// 4. insert the entity; duplicate titles overwrite (last wins)
///
/// The builder owns the ontology while it runs; [`build`](Self::build) and
/// [`finish`](Self::finish) hand it over by value, so consumers only ever
/// see an immutable one.
pub struct OntologyBuilder {
    filters: Vec<Box<dyn ArticleFilter>>,
    analyses: Vec<Box<dyn Analysis>>,
    sink: Box<dyn ArticleSink>,
    ontology: Ontology,
    rejected: usize,
}

impl Default for OntologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OntologyBuilder {
    /// Create a builder with no filters, no analyses, and a discarding sink
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            analyses: Vec::new(),
            sink: Box::new(NullSink),
            ontology: Ontology::new(),
            rejected: 0,
        }
    }

    /// Create a builder with the standard configuration
    ///
    /// Filters: main-namespace titles only, no redirect stubs.
    /// Analyses: link extraction, then physicist classification.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        builder.add_filter(NamespaceFilter);
        builder.add_filter(RedirectFilter);
        builder.add_analysis(LinkExtractor::new());
        builder.add_analysis(PhysicistClassifier::new());
        builder
    }

    /// Register an inclusion filter
    pub fn add_filter<F: ArticleFilter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    /// Register an analysis; analyses run in registration order
    pub fn add_analysis<A: Analysis + 'static>(&mut self, analysis: A) {
        self.analyses.push(Box::new(analysis));
    }

    /// Set the receiver for rejected articles
    pub fn set_rejected_sink<S: ArticleSink + 'static>(&mut self, sink: S) {
        self.sink = Box::new(sink);
    }

    /// Number of articles rejected by the filter chain so far
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Number of entities accumulated so far
    pub fn entity_count(&self) -> usize {
        self.ontology.len()
    }

    /// Classify a single article
    ///
    /// Returns `true` if the article was accepted into the ontology.
    pub fn consume(&mut self, article: Article) -> bool {
        if !self.filters.iter().all(|f| f.accepts(&article)) {
            debug!(title = %article.title, "article rejected by filter chain");
            self.rejected += 1;
            self.sink.accept(&article);
            return false;
        }

        let mut entity = Entity::new(article.identifier());
        for analysis in &self.analyses {
            analysis.analyze(&article, &mut entity, &self.ontology);
        }

        debug!(
            title = %article.title,
            relations = entity.relation_count(),
            "article classified"
        );
        if self.ontology.insert(entity).is_some() {
            debug!(title = %article.title, "duplicate title, previous entity replaced");
        }
        true
    }

    /// Drain a source and return the built ontology
    ///
    /// Back-pressure is preserved: each article is fully classified before
    /// the next one is pulled. A source failure aborts the build: no
    /// partial ontology is returned.
    pub fn build(mut self, source: &mut dyn ArticleSource) -> Result<Ontology, SourceError> {
        while let Some(article) = source.next_article()? {
            self.consume(article);
        }
        info!(
            entities = self.ontology.len(),
            rejected = self.rejected,
            "ontology built"
        );
        Ok(self.ontology)
    }

    /// Hand over the ontology accumulated through [`consume`](Self::consume)
    pub fn finish(self) -> Ontology {
        self.ontology
    }
}

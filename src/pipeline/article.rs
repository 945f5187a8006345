//! Raw article records and the rejected-article sink

use crate::ontology::Identifier;
use serde::{Deserialize, Serialize};

/// An encyclopedia-style article as produced by an article source
///
/// The title doubles as the entity key; the text is raw wiki markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title, unique within a dump
    pub title: String,
    /// Raw article body
    pub text: String,
}

impl Article {
    /// Create an article
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// The identifier this article's entity would be keyed by
    pub fn identifier(&self) -> Identifier {
        Identifier::from_title(self.title.clone())
    }
}

/// Receiver for articles rejected by the inclusion filter chain
///
/// A narrow single-method interface: the pipeline forwards each rejected
/// article exactly once and keeps going.
pub trait ArticleSink {
    /// Accept a rejected article
    fn accept(&mut self, article: &Article);
}

/// Sink that discards rejected articles
///
/// The default when no sink is registered.
#[derive(Debug, Default)]
pub struct NullSink;

impl ArticleSink for NullSink {
    fn accept(&mut self, _article: &Article) {}
}

/// Sink that records rejected titles, mainly for tests and reporting
#[derive(Debug, Default)]
pub struct CollectingSink {
    titles: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles seen so far, in rejection order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl ArticleSink for CollectingSink {
    fn accept(&mut self, article: &Article) {
        self.titles.push(article.title.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_identifier_is_title() {
        let article = Article::new("Marie Curie", "…");
        assert_eq!(article.identifier(), Identifier::from("Marie Curie"));
    }

    #[test]
    fn test_collecting_sink_records_order() {
        let mut sink = CollectingSink::new();
        sink.accept(&Article::new("B", ""));
        sink.accept(&Article::new("A", ""));
        assert_eq!(sink.titles(), ["B", "A"]);
    }
}

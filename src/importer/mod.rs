//! Article ingestion boundary
//!
//! Sources are pull-style and single-pass: the pipeline fully classifies
//! one article before asking for the next, so back-pressure is inherent.

mod xml;

pub use xml::XmlDumpReader;

use crate::pipeline::Article;
use thiserror::Error;

/// Errors raised by an article source
///
/// Any source error is fatal to the import: the pipeline aborts rather
/// than serving queries over a partial ontology.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read the input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dump at line {line}: {msg}")]
    Parse { line: u64, msg: String },
}

/// A single-pass, non-restartable sequence of articles
pub trait ArticleSource {
    /// Pull the next article, `Ok(None)` at end of input
    fn next_article(&mut self) -> Result<Option<Article>, SourceError>;
}

/// In-memory source, mainly for tests and embedding
#[derive(Debug)]
pub struct VecSource {
    articles: std::vec::IntoIter<Article>,
}

impl VecSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: articles.into_iter(),
        }
    }
}

impl ArticleSource for VecSource {
    fn next_article(&mut self) -> Result<Option<Article>, SourceError> {
        Ok(self.articles.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_is_single_pass() {
        let mut source = VecSource::new(vec![
            Article::new("A", "one"),
            Article::new("B", "two"),
        ]);
        assert_eq!(source.next_article().unwrap().unwrap().title, "A");
        assert_eq!(source.next_article().unwrap().unwrap().title, "B");
        assert!(source.next_article().unwrap().is_none());
        assert!(source.next_article().unwrap().is_none());
    }
}

//! Filter and analysis traits for the classification pipeline

use super::article::Article;
use crate::ontology::{Entity, Ontology};

/// Inclusion test over a raw article
///
/// The pipeline evaluates the logical AND of every registered filter;
/// an article failing any filter is forwarded to the rejected-article
/// sink and never becomes an entity. Implementations are stateless
/// immutable values constructed once at configuration time.
pub trait ArticleFilter: Send + Sync {
    /// Whether the article should enter the ontology
    fn accepts(&self, article: &Article) -> bool;
}

impl<F> ArticleFilter for F
where
    F: Fn(&Article) -> bool + Send + Sync,
{
    fn accepts(&self, article: &Article) -> bool {
        self(article)
    }
}

/// A derivation step that appends relations to an entity under construction
///
/// Analyses run in registration order; a later analysis may read relations
/// added by an earlier one on the same entity, and may consult the ontology
/// built so far (entities from earlier articles only). An analysis must be
/// idempotent: relation insertion is set-keyed, so running twice adds
/// nothing, but analyses should not rely on that for correctness.
pub trait Analysis: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Derive relations from the article and append them to `entity`
    fn analyze(&self, article: &Article, entity: &mut Entity, ontology: &Ontology);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::{Identifier, Relation};

    struct LinkToSelf;

    impl Analysis for LinkToSelf {
        fn name(&self) -> &str {
            "link-to-self"
        }

        fn analyze(&self, article: &Article, entity: &mut Entity, _ontology: &Ontology) {
            entity.add_relation(Relation::LinksTo(article.identifier()));
        }
    }

    #[test]
    fn test_closure_is_an_article_filter() {
        let non_empty = |a: &Article| !a.text.is_empty();
        assert!(non_empty.accepts(&Article::new("A", "body")));
        assert!(!non_empty.accepts(&Article::new("A", "")));
    }

    #[test]
    fn test_analysis_runs_against_entity() {
        let analysis = LinkToSelf;
        let article = Article::new("A", "");
        let mut entity = Entity::new(article.identifier());
        analysis.analyze(&article, &mut entity, &Ontology::new());
        assert!(entity.has_relation(&Relation::LinksTo(Identifier::from("A"))));
    }
}

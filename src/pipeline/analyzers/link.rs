//! Link extraction analysis
//!
//! Turns `[[…]]` wiki links in the article body into `LinksTo` relations.

use crate::ontology::{Entity, Identifier, Ontology, Relation};
use crate::pipeline::markup;
use crate::pipeline::{Analysis, Article};

/// Analysis that appends one `LinksTo` relation per distinct link target
///
/// - `[[target|display]]` display text is discarded
/// - section anchors resolve to the owning article: `Title#History` → `Title`
/// - namespace links (`[[Category:…]]`, `[[File:…]]`, …) are not article
///   links and are skipped; categories feed classification instead
/// - duplicate targets collapse to a single relation
#[derive(Debug, Default)]
pub struct LinkExtractor;

impl LinkExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw link target to an article identifier, if it is one
    fn resolve(target: &str) -> Option<Identifier> {
        if markup::namespace_of(target).is_some() {
            return None;
        }
        // Anchor-only links ("#Section") stay within the source article.
        let title = match target.split_once('#') {
            Some((title, _)) => title.trim(),
            None => target,
        };
        if title.is_empty() {
            return None;
        }
        Some(Identifier::from_title(title))
    }
}

impl Analysis for LinkExtractor {
    fn name(&self) -> &str {
        "link-extractor"
    }

    fn analyze(&self, article: &Article, entity: &mut Entity, _ontology: &Ontology) {
        for target in markup::wiki_links(&article.text) {
            if let Some(id) = Self::resolve(&target) {
                entity.add_relation(Relation::LinksTo(id));
            }
        }
    }
}

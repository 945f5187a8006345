//! Classification from category tags

use crate::ontology::{Entity, Identifier, Ontology, Relation, PHYSICIST};
use crate::pipeline::markup;
use crate::pipeline::{Analysis, Article};

/// Analysis that classifies physicists
///
/// Appends `IsA(Physicist)` when any `[[Category:…]]` tag on the article
/// contains the token `physicist` (case-insensitive), covering tags like
/// `Danish physicists` or `Physicists of the 20th century`.
#[derive(Debug, Default)]
pub struct PhysicistClassifier;

impl PhysicistClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Analysis for PhysicistClassifier {
    fn name(&self) -> &str {
        "physicist-classifier"
    }

    fn analyze(&self, article: &Article, entity: &mut Entity, _ontology: &Ontology) {
        let is_physicist = markup::categories(&article.text)
            .iter()
            .any(|category| category.to_ascii_lowercase().contains("physicist"));

        if is_physicist {
            entity.add_relation(Relation::IsA(Identifier::from(PHYSICIST)));
        }
    }
}

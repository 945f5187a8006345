//! Entities and their typed relations

use super::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// A directed, typed edge from an entity to a target identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target")]
pub enum Relation {
    /// Classification: the entity is an instance of the target
    /// (e.g. `IsA(Physicist)`)
    IsA(Identifier),
    /// The entity's article links to the target's article
    LinksTo(Identifier),
}

impl Relation {
    /// The relation kind as a stable lowercase name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IsA(_) => "is_a",
            Self::LinksTo(_) => "links_to",
        }
    }

    /// The identifier this relation points at
    pub fn target(&self) -> &Identifier {
        match self {
            Self::IsA(target) | Self::LinksTo(target) => target,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsA(target) => write!(f, "is a {}", target),
            Self::LinksTo(target) => write!(f, "links to {}", target),
        }
    }
}

/// A node in the ontology: an identifier plus its derived relations
///
/// Relations form an insertion-ordered set keyed by the full
/// `(kind, target)` value. `add_relation` refuses duplicates, so an
/// analysis that runs twice cannot double-insert. Entities are only
/// mutated during the classification pass; once inserted into an
/// [`Ontology`](super::Ontology) they are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    identifier: Identifier,
    relations: Vec<Relation>,
}

impl Entity {
    /// Create an entity with no relations yet
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            relations: Vec::new(),
        }
    }

    /// The entity's canonical key
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Append a relation, preserving set semantics
    ///
    /// Returns `true` if the relation was new, `false` if the identical
    /// `(kind, target)` pair was already present.
    pub fn add_relation(&mut self, relation: Relation) -> bool {
        if self.relations.contains(&relation) {
            return false;
        }
        self.relations.push(relation);
        true
    }

    /// Whether the entity carries exactly this relation
    pub fn has_relation(&self, relation: &Relation) -> bool {
        self.relations.contains(relation)
    }

    /// All relations in insertion order
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }

    /// Targets of all `LinksTo` relations, in insertion order
    pub fn link_targets(&self) -> impl Iterator<Item = &Identifier> {
        self.relations.iter().filter_map(|r| match r {
            Relation::LinksTo(target) => Some(target),
            _ => None,
        })
    }

    /// Number of relations
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

//! The built entity collection

use super::entity::Entity;
use super::identifier::Identifier;
use serde::Serialize;
use std::collections::HashMap;

/// The accumulated set of entities extracted from a corpus
///
/// Keys are unique; iteration order is stable for a given build but
/// otherwise unspecified. The classification pipeline owns the ontology
/// while it runs and hands it over by value, so downstream consumers
/// only ever hold an immutable one.
#[derive(Debug, Default, Serialize)]
pub struct Ontology {
    entities: HashMap<Identifier, Entity>,
}

impl Ontology {
    /// Create an empty ontology
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity under its identifier
    ///
    /// Duplicate titles overwrite: the last article classified under an
    /// identifier wins. Returns the displaced entity, if any.
    pub(crate) fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.identifier().clone(), entity)
    }

    /// Look up an entity by identifier
    pub fn get(&self, id: &Identifier) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Whether an entity exists under this identifier
    pub fn contains(&self, id: &Identifier) -> bool {
        self.entities.contains_key(id)
    }

    /// Iterate all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the ontology holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

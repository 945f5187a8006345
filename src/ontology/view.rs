//! Predicate-filtered, read-only views over an ontology
//!
//! The ontology stores ground truth. A view is an interpretive lens: it
//! restricts which entities are visible without copying or deleting
//! anything underneath.

use super::entity::Entity;
use super::identifier::Identifier;
use super::store::Ontology;

/// A boolean capability over a built entity
///
/// Used both to name query-time views (e.g. `"physicist"`) and to decide
/// graph membership. Implementations are stateless immutable values.
pub trait EntityFilter: Send + Sync {
    /// Whether the entity is visible through this filter
    fn accepts(&self, entity: &Entity) -> bool;
}

/// Blanket impl so plain functions and closures work as filters
impl<F> EntityFilter for F
where
    F: Fn(&Entity) -> bool + Send + Sync,
{
    fn accepts(&self, entity: &Entity) -> bool {
        self(entity)
    }
}

/// A non-owning `(ontology, predicate)` projection
///
/// Costs O(1) additional space. Iteration re-applies the predicate on
/// every pass; nothing is cached.
pub struct FilteredOntology<'a> {
    ontology: &'a Ontology,
    filter: &'a dyn EntityFilter,
}

impl<'a> FilteredOntology<'a> {
    /// Create a view of `ontology` restricted by `filter`
    pub fn new(ontology: &'a Ontology, filter: &'a dyn EntityFilter) -> Self {
        Self { ontology, filter }
    }

    /// Whether an entity exists and is visible through the filter
    pub fn contains(&self, id: &Identifier) -> bool {
        self.get(id).is_some()
    }

    /// Look up a visible entity
    pub fn get(&self, id: &Identifier) -> Option<&'a Entity> {
        self.ontology.get(id).filter(|e| self.filter.accepts(e))
    }

    /// Iterate visible entities (lazy, restartable)
    pub fn iter(&self) -> impl Iterator<Item = &'a Entity> + '_ {
        self.ontology.iter().filter(|e| self.filter.accepts(e))
    }
}

//! Named entity-filter registry

use crate::ontology::{Entity, EntityFilter, Identifier, Relation, PHYSICIST};
use std::collections::HashMap;
use std::sync::Arc;

/// Accepts every entity
#[derive(Debug, Default)]
pub struct AllEntities;

impl EntityFilter for AllEntities {
    fn accepts(&self, _entity: &Entity) -> bool {
        true
    }
}

/// Accepts entities carrying one specific relation
#[derive(Debug)]
pub struct RelationFilter {
    relation: Relation,
}

impl RelationFilter {
    /// Accept entities carrying exactly `relation`
    pub fn new(relation: Relation) -> Self {
        Self { relation }
    }

    /// Accept entities classified as physicists
    pub fn physicist() -> Self {
        Self::new(Relation::IsA(Identifier::from(PHYSICIST)))
    }
}

impl EntityFilter for RelationFilter {
    fn accepts(&self, entity: &Entity) -> bool {
        entity.has_relation(&self.relation)
    }
}

/// Case-insensitive mapping from filter name to entity filter
///
/// Populated once at startup; one graph is built per registered name.
pub struct FilterRegistry {
    filters: HashMap<String, Arc<dyn EntityFilter>>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Create a registry with the required built-ins:
    /// `"all"` and `"physicist"`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("all", Arc::new(AllEntities));
        registry.register("physicist", Arc::new(RelationFilter::physicist()));
        registry
    }

    /// Register a filter under a name; names are stored lowercased
    pub fn register(&mut self, name: impl Into<String>, filter: Arc<dyn EntityFilter>) {
        self.filters.insert(name.into().to_lowercase(), filter);
    }

    /// Look up a filter, case-insensitively
    pub fn get(&self, name: &str) -> Option<&Arc<dyn EntityFilter>> {
        self.filters.get(&name.to_lowercase())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate `(name, filter)` pairs in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn EntityFilter>)> {
        let mut entries: Vec<_> = self
            .filters
            .iter()
            .map(|(name, filter)| (name.as_str(), filter))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }

    /// Number of registered filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filters are registered
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

//! Entity trait: identity + continuity across state changes.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index a slice of entities by identity, for read-side joins.
///
/// When two entries share an id the later one wins.
pub fn index_by_id<E: Entity>(entities: &[E]) -> HashMap<E::Id, &E> {
    entities.iter().map(|e| (e.id().clone(), e)).collect()
}

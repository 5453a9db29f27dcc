//! Type registry used to resolve foreign-key references.

use std::collections::HashMap;

use super::SchemaEntity;

/// Resolves a type reference to the entity it names.
///
/// DDL generation treats the registry as a synchronous, side-effect-free
/// resolver; it is injected explicitly so generators stay pure and
/// testable against fake schemas.
pub trait TypeRegistry {
    /// Looks up an entity by type reference.
    fn resolve(&self, reference: &str) -> Option<&SchemaEntity>;
}

/// A map-backed registry.
#[derive(Debug, Default)]
pub struct MapRegistry {
    entities: HashMap<String, SchemaEntity>,
}

impl MapRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity under a type reference.
    pub fn register(&mut self, reference: impl Into<String>, entity: SchemaEntity) {
        self.entities.insert(reference.into(), entity);
    }
}

impl TypeRegistry for MapRegistry {
    fn resolve(&self, reference: &str) -> Option<&SchemaEntity> {
        self.entities.get(reference)
    }
}

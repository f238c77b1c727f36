//! # Schema Registry
//!
//! Interns schemas so structurally equal type sequences resolve to one shared
//! allocation. Interning is optional: every transform accepts any schema, and
//! equality is structural whether or not two schemas were interned.
//!
//! ## Concurrency
//!
//! Lookups take a shared read lock; only a miss upgrades to the write lock.
//! The lock is a `parking_lot::RwLock`, so the registry can be shared freely
//! across threads (see [`SchemaRegistry::global`]).

use std::sync::OnceLock;

use hashbrown::HashSet;
use parking_lot::RwLock;

use super::Schema;
use crate::types::DataType;

#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashSet<Schema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    pub fn global() -> &'static SchemaRegistry {
        static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();
        GLOBAL.get_or_init(SchemaRegistry::new)
    }

    /// Returns the shared schema for `types`, creating it on first use.
    pub fn intern(&self, types: &[DataType]) -> Schema {
        if let Some(schema) = self.schemas.read().get(types) {
            return schema.clone();
        }
        let mut schemas = self.schemas.write();
        let schema = schemas.get_or_insert_with(types, |types| Schema::new(types));
        tracing::trace!(arity = types.len(), "interned schema");
        schema.clone()
    }

    /// Returns the shared instance equal to `schema`, registering `schema`
    /// itself if none exists yet.
    pub fn intern_schema(&self, schema: &Schema) -> Schema {
        if let Some(existing) = self.schemas.read().get(schema) {
            return existing.clone();
        }
        self.schemas.write().get_or_insert(schema.clone()).clone()
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    pub fn clear(&self) {
        self.schemas.write().clear();
    }
}

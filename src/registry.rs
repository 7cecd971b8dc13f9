//! Type Registry - live instances grouped by exact runtime type
//!
//! Buckets are keyed by the object's exact `TypeId`: an instance is visible
//! only under its own concrete type, never under a supertype or trait it
//! also implements. An object stays registered only while it holds at least
//! one relation.

use std::any::TypeId;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::entity::{runtime_type_id, Object, ObjectId};

/// Identity-keyed buckets of related objects, one bucket per runtime type
#[derive(Default)]
pub(crate) struct TypeRegistry {
    buckets: HashMap<TypeId, HashMap<ObjectId, Object>>,
}

impl TypeRegistry {
    /// Track `object` under its exact runtime type; idempotent
    pub(crate) fn register(&mut self, object: &Object) {
        self.buckets
            .entry(runtime_type_id(object))
            .or_default()
            .insert(ObjectId::of(object), Rc::clone(object));
    }

    /// Stop tracking `object`; a no-op when it was never tracked
    pub(crate) fn unregister(&mut self, object: &Object) {
        let type_id = runtime_type_id(object);
        if let Some(bucket) = self.buckets.get_mut(&type_id) {
            bucket.remove(&ObjectId::of(object));
            if bucket.is_empty() {
                self.buckets.remove(&type_id);
            }
        }
    }

    /// All tracked instances of exactly `type_id`; empty when none
    pub(crate) fn of_type(&self, type_id: TypeId) -> Vec<Object> {
        self.buckets
            .get(&type_id)
            .map(|bucket| bucket.values().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn stats(&self) -> RegistryStats {
        RegistryStats {
            tracked_types: self.buckets.len(),
            tracked_objects: self.buckets.values().map(HashMap::len).sum(),
        }
    }
}

/// Statistics about the type registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Distinct runtime types currently holding relations
    pub tracked_types: usize,
    /// Objects currently holding at least one relation
    pub tracked_objects: usize,
}

//! Slot Discovery - finds and memoizes each object's single relation slot
//!
//! Objects enumerate candidate slots through [`Entity::relation_slots`];
//! discovery enforces the exactly-one contract and caches the result per
//! object identity, so repeated operations on the same object skip the
//! enumeration. Entries hold only a weak handle: the cache never keeps an
//! otherwise-unreachable object alive.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::entity::{Entity, Object, ObjectId};
use crate::error::{RelationError, RelationResult};
use crate::slot::RelationSlot;

struct CachedSlot {
    object: Weak<dyn Entity>,
    slot: RelationSlot,
}

/// Lazy, weakly-keyed object-to-slot cache
#[derive(Default)]
pub(crate) struct SlotDiscovery {
    cache: HashMap<ObjectId, CachedSlot>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl SlotDiscovery {
    /// The single relation slot `object` exposes
    ///
    /// Cached per object identity after the first call; fails with
    /// [`RelationError::AmbiguousRelation`] when the object exposes zero or
    /// more than one slot.
    pub(crate) fn discover(&mut self, object: &Object) -> RelationResult<RelationSlot> {
        let key = ObjectId::of(object);

        if let Some(entry) = self.cache.get(&key) {
            if entry.object.strong_count() > 0 {
                self.hits += 1;
                return Ok(entry.slot.clone());
            }
            // Cached object died and its address was reissued.
            self.cache.remove(&key);
            self.evictions += 1;
        }

        self.misses += 1;
        let slot = match object.relation_slots().as_slice() {
            [slot] => (*slot).clone(),
            other => {
                return Err(RelationError::AmbiguousRelation { found: other.len() });
            }
        };

        self.cache.insert(
            key,
            CachedSlot {
                object: Rc::downgrade(object),
                slot: slot.clone(),
            },
        );
        Ok(slot)
    }

    /// Drop every cache entry whose object has been dropped
    pub(crate) fn evict_dead(&mut self) {
        let before = self.cache.len();
        self.cache.retain(|_, entry| entry.object.strong_count() > 0);
        self.evictions += (before - self.cache.len()) as u64;
    }

    pub(crate) fn stats(&self) -> DiscoveryStats {
        DiscoveryStats {
            entries: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}

/// Statistics about the slot discovery cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveryStats {
    /// Cache entries currently held, dead ones included until eviction
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran slot enumeration
    pub misses: u64,
    /// Entries dropped because their object died
    pub evictions: u64,
}

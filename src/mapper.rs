//! Relation Mapper - the mediator keeping both sides of every relation consistent
//!
//! `add` and `remove` resolve each operand's slot through the discovery
//! cache, apply cardinality-aware substitution policy against the edge
//! store, then commit the new edge state and update the type registry.
//! Replaces hand-written bidirectional pointer bookkeeping with one
//! component enforcing cardinality and substitution rules uniformly.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::discovery::{DiscoveryStats, SlotDiscovery};
use crate::entity::{Entity, Object};
use crate::error::{RelationError, RelationResult};
use crate::registry::{RegistryStats, TypeRegistry};
use crate::slot::{Cardinality, RelationSlot, TypeTag};
use crate::store::{Bound, EdgeStore};

/// Mediator for in-memory object relations
///
/// Owns one edge store, one type registry and one discovery cache; it never
/// mutates an application object's own fields, only its internal maps. A
/// mapper instance is single-threaded and synchronous: no operation blocks,
/// and the `Rc`-based [`Object`] handles make the type not `Send`, so
/// concurrent access has to be serialized by the caller's design rather
/// than by this crate.
#[derive(Default)]
pub struct RelationMapper {
    discovery: SlotDiscovery,
    store: EdgeStore,
    registry: TypeRegistry,
}

impl RelationMapper {
    /// Create an empty mapper
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `a` and `b` through their relation slots
    ///
    /// Discovers both slots, applies the substitution policy for the
    /// cardinality pair, binds in both directions and registers both
    /// operands under their exact runtime type. After success each side's
    /// slot resolves to the other, and no stale reverse reference from a
    /// prior One-side binding survives.
    ///
    /// # Errors
    ///
    /// [`RelationError::AmbiguousRelation`] when an operand exposes zero or
    /// more than one slot; [`RelationError::SubstitutionNotAllowed`] when
    /// the bind would overwrite a One-side binding whose slot forbids it.
    pub fn add(&mut self, a: &Object, b: &Object) -> RelationResult<()> {
        let slot_a = self.discovery.discover(a)?;
        let slot_b = self.discovery.discover(b)?;

        self.ensure_substitution(a, b, &slot_a, &slot_b)?;

        self.store.bind(&slot_a, Rc::clone(b));
        self.store.bind(&slot_b, Rc::clone(a));
        self.registry.register(a);
        self.registry.register(b);

        debug!(
            "added relation between slot {} and slot {}",
            slot_a.id(),
            slot_b.id()
        );
        Ok(())
    }

    /// Disconnect `a` and `b`
    ///
    /// Both unbind attempts are made; the first failure aborts the
    /// operation with [`RelationError::MissingRelation`], and mutation
    /// performed by the other attempt is not rolled back. Callers needing
    /// all-or-nothing semantics must pre-validate or compensate. On full
    /// success, an operand whose slot is left empty or absent is dropped
    /// from the type registry.
    pub fn remove(&mut self, a: &Object, b: &Object) -> RelationResult<()> {
        let slot_a = self.discovery.discover(a)?;
        let slot_b = self.discovery.discover(b)?;

        let unbound_a = self.store.unbind(&slot_a, b);
        let unbound_b = self.store.unbind(&slot_b, a);
        unbound_a?;
        unbound_b?;

        if self.store.is_unrelated(slot_a.id()) {
            self.registry.unregister(a);
        }
        if self.store.is_unrelated(slot_b.id()) {
            self.registry.unregister(b);
        }

        debug!(
            "removed relation between slot {} and slot {}",
            slot_a.id(),
            slot_b.id()
        );
        Ok(())
    }

    /// Resolve `slot` per its declared cardinality
    pub fn get(&self, slot: &RelationSlot) -> Bound {
        self.store.get(slot)
    }

    /// Sole object bound through a One slot, if any
    ///
    /// # Errors
    ///
    /// [`RelationError::InvalidRelation`] when handed a Many slot.
    pub fn one(&self, slot: &RelationSlot) -> RelationResult<Option<Object>> {
        match slot.cardinality() {
            Cardinality::One => Ok(self.store.get_one(slot)),
            Cardinality::Many => Err(RelationError::InvalidRelation {
                slot: slot.id(),
                expected: Cardinality::One,
                actual: Cardinality::Many,
            }),
        }
    }

    /// All objects bound through a Many slot; empty when never established
    ///
    /// # Errors
    ///
    /// [`RelationError::InvalidRelation`] when handed a One slot.
    pub fn many(&self, slot: &RelationSlot) -> RelationResult<Vec<Object>> {
        match slot.cardinality() {
            Cardinality::Many => Ok(self.store.get_many(slot).unwrap_or_default()),
            Cardinality::One => Err(RelationError::InvalidRelation {
                slot: slot.id(),
                expected: Cardinality::Many,
                actual: Cardinality::One,
            }),
        }
    }

    /// All tracked instances of exactly the tagged runtime type
    ///
    /// Exact type only: a subtype instance never appears under a
    /// supertype's tag. Empty when none are registered; never fails.
    pub fn objects_of_type(&self, tag: TypeTag) -> Vec<Object> {
        self.registry.of_type(tag.type_id())
    }

    /// Typed view over [`RelationMapper::objects_of_type`]
    pub fn objects_of<T: Entity>(&self) -> Vec<Rc<T>> {
        self.registry
            .of_type(TypeId::of::<T>())
            .into_iter()
            .filter_map(|object| {
                let any: Rc<dyn Any> = object;
                any.downcast::<T>().ok()
            })
            .collect()
    }

    /// Evict discovery-cache entries whose object has been dropped
    pub fn compact(&mut self) {
        self.discovery.evict_dead();
    }

    /// Point-in-time snapshot of the mapper's internal containers
    pub fn stats(&self) -> MapperStats {
        MapperStats {
            established_slots: self.store.established_slots(),
            registry: self.registry.stats(),
            discovery: self.discovery.stats(),
        }
    }

    /// Apply substitution policy for the cardinality pair before a bind
    fn ensure_substitution(
        &mut self,
        a: &Object,
        b: &Object,
        slot_a: &RelationSlot,
        slot_b: &RelationSlot,
    ) -> RelationResult<()> {
        match (slot_a.cardinality(), slot_b.cardinality()) {
            (Cardinality::One, Cardinality::One) => self.substitute_one_to_one(slot_a, slot_b),
            (Cardinality::One, Cardinality::Many) => self.substitute_one_side(slot_a, a),
            (Cardinality::Many, Cardinality::One) => self.substitute_one_side(slot_b, b),
            (Cardinality::Many, Cardinality::Many) => Ok(()),
        }
    }

    /// One x One: replacing either side requires both slots to allow it
    ///
    /// Each stale partner's own entry is cleared outright, severing the
    /// stale reverse edge before the rebind.
    fn substitute_one_to_one(
        &mut self,
        slot_a: &RelationSlot,
        slot_b: &RelationSlot,
    ) -> RelationResult<()> {
        let stale_a = self.store.get_one(slot_a);
        let stale_b = self.store.get_one(slot_b);
        if stale_a.is_none() && stale_b.is_none() {
            return Ok(());
        }
        if !slot_a.substitution_allowed() {
            return Err(RelationError::SubstitutionNotAllowed { slot: slot_a.id() });
        }
        if !slot_b.substitution_allowed() {
            return Err(RelationError::SubstitutionNotAllowed { slot: slot_b.id() });
        }
        for stale in [stale_a, stale_b].into_iter().flatten() {
            self.clear_stale_partner(&stale)?;
        }
        Ok(())
    }

    /// One x Many: rebinding a bound One side requires its slot to allow it
    ///
    /// The One owner is detached from the stale partner's own bound set,
    /// dispatched on that partner's cardinality.
    fn substitute_one_side(
        &mut self,
        one_slot: &RelationSlot,
        one_owner: &Object,
    ) -> RelationResult<()> {
        let Some(stale_partner) = self.store.get_one(one_slot) else {
            return Ok(());
        };
        if !one_slot.substitution_allowed() {
            return Err(RelationError::SubstitutionNotAllowed { slot: one_slot.id() });
        }

        let partner_slot = self.discovery.discover(&stale_partner)?;
        self.store.unbind(&partner_slot, one_owner)?;
        if self.store.is_unrelated(partner_slot.id()) {
            self.registry.unregister(&stale_partner);
        }
        trace!(
            "detached owner of slot {} from stale partner slot {}",
            one_slot.id(),
            partner_slot.id()
        );
        Ok(())
    }

    /// Sever every edge a displaced One-side partner held through its slot
    fn clear_stale_partner(&mut self, stale: &Object) -> RelationResult<()> {
        let slot = self.discovery.discover(stale)?;
        self.store.unbind_one(&slot)?;
        self.registry.unregister(stale);
        trace!("cleared stale partner entry for slot {}", slot.id());
        Ok(())
    }
}

impl fmt::Debug for RelationMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationMapper")
            .field("stats", &self.stats())
            .finish()
    }
}

/// Point-in-time view of a mapper's internal containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapperStats {
    /// Slots with an established edge entry
    pub established_slots: usize,
    /// Type registry counters
    pub registry: RegistryStats,
    /// Discovery cache counters
    pub discovery: DiscoveryStats,
}

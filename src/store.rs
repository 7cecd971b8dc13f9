//! Relation Edge Store - bound object sets keyed by slot identity
//!
//! The one place cardinality-specific behavior lives: [`EdgeStore::get`],
//! [`EdgeStore::bind`] and [`EdgeStore::unbind`] each branch once on
//! [`Cardinality`] and nothing outside this module does. Absence of a key
//! means "no relation established yet", distinguished from an established
//! but emptied Many set.

use std::collections::HashMap;
use std::fmt;

use crate::entity::{Object, ObjectId};
use crate::error::{RelationError, RelationResult};
use crate::slot::{Cardinality, RelationSlot, SlotId};

/// Objects currently bound through one slot, keyed by identity
type BoundSet = HashMap<ObjectId, Object>;

/// Relation state resolved through one slot
///
/// The shape follows the slot's declared cardinality, resolved at the call
/// site by the slot itself rather than a separate argument. For Many,
/// `None` distinguishes "never established" from an established set that
/// has since been emptied.
#[derive(Clone)]
pub enum Bound {
    /// Resolution of a One-cardinality slot
    One(Option<Object>),
    /// Resolution of a Many-cardinality slot
    Many(Option<Vec<Object>>),
}

impl Bound {
    /// Whether `object` is bound here, compared by identity
    pub fn contains(&self, object: &Object) -> bool {
        let id = ObjectId::of(object);
        match self {
            Self::One(bound) => bound.as_ref().is_some_and(|o| ObjectId::of(o) == id),
            Self::Many(bound) => bound
                .as_ref()
                .is_some_and(|set| set.iter().any(|o| ObjectId::of(o) == id)),
        }
    }

    /// Number of objects bound here
    pub fn len(&self) -> usize {
        match self {
            Self::One(bound) => usize::from(bound.is_some()),
            Self::Many(bound) => bound.as_ref().map_or(0, Vec::len),
        }
    }

    /// True when nothing is bound here
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the slot has an entry at all, even an emptied one
    pub fn is_established(&self) -> bool {
        matches!(self, Self::One(Some(_)) | Self::Many(Some(_)))
    }
}

impl fmt::Debug for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(Some(_)) => write!(f, "Bound::One(1 object)"),
            Self::One(None) => write!(f, "Bound::One(unbound)"),
            Self::Many(Some(set)) => write!(f, "Bound::Many({} objects)", set.len()),
            Self::Many(None) => write!(f, "Bound::Many(unestablished)"),
        }
    }
}

/// Maps a slot's identity token to the set of objects related through it
///
/// For a One-cardinality slot the bound set holds at most one member.
#[derive(Default)]
pub(crate) struct EdgeStore {
    edges: HashMap<SlotId, BoundSet>,
}

impl EdgeStore {
    /// Resolve `slot` per its declared cardinality
    pub(crate) fn get(&self, slot: &RelationSlot) -> Bound {
        match slot.cardinality() {
            Cardinality::One => Bound::One(self.get_one(slot)),
            Cardinality::Many => Bound::Many(self.get_many(slot)),
        }
    }

    /// Sole object bound through a One slot, if any
    pub(crate) fn get_one(&self, slot: &RelationSlot) -> Option<Object> {
        self.edges
            .get(&slot.id())
            .and_then(|set| set.values().next().cloned())
    }

    /// Full bound set of a Many slot; `None` when never established
    pub(crate) fn get_many(&self, slot: &RelationSlot) -> Option<Vec<Object>> {
        self.edges
            .get(&slot.id())
            .map(|set| set.values().cloned().collect())
    }

    /// Register `object` under `slot` per the slot's cardinality
    ///
    /// One overwrites the stored set with a singleton, discarding any prior
    /// content; Many inserts into a set created on first use, where a
    /// duplicate insert is a no-op.
    pub(crate) fn bind(&mut self, slot: &RelationSlot, object: Object) {
        let key = ObjectId::of(&object);
        match slot.cardinality() {
            Cardinality::One => {
                let mut set = BoundSet::with_capacity(1);
                set.insert(key, object);
                self.edges.insert(slot.id(), set);
            }
            Cardinality::Many => {
                self.edges.entry(slot.id()).or_default().insert(key, object);
            }
        }
    }

    /// Drop `object` from `slot` per the slot's cardinality
    ///
    /// One deletes the whole entry regardless of which object was asked to
    /// be removed; Many removes exactly `object` from the set. A failed
    /// unbind mutates nothing.
    pub(crate) fn unbind(&mut self, slot: &RelationSlot, object: &Object) -> RelationResult<()> {
        match slot.cardinality() {
            Cardinality::One => self.unbind_one(slot),
            Cardinality::Many => self.unbind_many(slot, object),
        }
    }

    /// Delete the entry for `slot` entirely
    pub(crate) fn unbind_one(&mut self, slot: &RelationSlot) -> RelationResult<()> {
        self.edges
            .remove(&slot.id())
            .map(|_| ())
            .ok_or(RelationError::MissingRelation { slot: slot.id() })
    }

    fn unbind_many(&mut self, slot: &RelationSlot, object: &Object) -> RelationResult<()> {
        let set = self
            .edges
            .get_mut(&slot.id())
            .ok_or(RelationError::MissingRelation { slot: slot.id() })?;
        set.remove(&ObjectId::of(object))
            .map(|_| ())
            .ok_or(RelationError::MissingRelation { slot: slot.id() })
    }

    /// True when `slot` holds no relations (entry absent or emptied)
    pub(crate) fn is_unrelated(&self, slot: SlotId) -> bool {
        self.edges.get(&slot).is_none_or(BoundSet::is_empty)
    }

    /// Number of slots with an established entry
    pub(crate) fn established_slots(&self) -> usize {
        self.edges.len()
    }
}

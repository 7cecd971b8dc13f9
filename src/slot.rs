//! Relation Slot - immutable descriptor of one relationship attachment point
//!
//! An application object declares how it relates to others by embedding a
//! [`RelationSlot`] as a field. The slot carries a cardinality, an optional
//! substitution flag and a declared target type, but its identity is the
//! [`SlotId`] token minted at construction: two slots are distinct even when
//! every other field matches.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cardinality of a relation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// At most one related object
    One,
    /// An unordered set of related objects
    Many,
}

impl Cardinality {
    /// Returns true if this cardinality binds a set of objects
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Many)
    }

    /// Returns true if this cardinality binds at most one object
    pub fn is_single(self) -> bool {
        matches!(self, Self::One)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "One"),
            Self::Many => write!(f, "Many"),
        }
    }
}

/// Process-unique identity token of a relation slot
///
/// Minted once at slot construction and never reused. Slot identity *is*
/// this token; the edge store keys all bound sets on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(Uuid);

impl SlotId {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a runtime type, carrying the type name for diagnostics
///
/// Compared and hashed by `TypeId` only. Built for sized and unsized types
/// alike, so a trait object can serve as a slot's declared target.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The tagged `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The tagged type's name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Immutable descriptor of one relationship attachment point on an object
///
/// Created once, typically while constructing the owning object, and never
/// mutated afterwards. Cloning preserves the identity token: a clone refers
/// to the *same* slot, only construction mints a fresh one. The declared
/// target type is a hint for readers and tooling; it is never validated
/// against the objects actually bound.
#[derive(Debug, Clone)]
pub struct RelationSlot {
    id: SlotId,
    cardinality: Cardinality,
    substitution: bool,
    target: TypeTag,
}

impl RelationSlot {
    /// One-cardinality slot targeting `T`; substitution disallowed by default
    pub fn one<T: ?Sized + 'static>() -> Self {
        Self::new(Cardinality::One, TypeTag::of::<T>())
    }

    /// Many-cardinality slot targeting `T`
    pub fn many<T: ?Sized + 'static>() -> Self {
        Self::new(Cardinality::Many, TypeTag::of::<T>())
    }

    fn new(cardinality: Cardinality, target: TypeTag) -> Self {
        Self {
            id: SlotId::mint(),
            cardinality,
            substitution: false,
            target,
        }
    }

    /// Set whether a later add may replace an existing binding on this slot
    ///
    /// Meaningful only for One cardinality; the flag is carried but ignored
    /// on Many slots.
    pub fn with_substitution(mut self, allowed: bool) -> Self {
        self.substitution = allowed;
        self
    }

    /// Identity token of this slot
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Declared cardinality
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Whether a bound One side may be replaced without an explicit remove
    pub fn substitution_allowed(&self) -> bool {
        self.substitution
    }

    /// Declared target type; a documentation hint, never enforced
    pub fn target_hint(&self) -> TypeTag {
        self.target
    }
}

impl PartialEq for RelationSlot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RelationSlot {}

impl Hash for RelationSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

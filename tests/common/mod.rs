//! Shared fixture domain for integration tests
//!
//! A small real-estate and publishing world: a person owning many
//! dwellings, one-to-one person/ssn pairs, and books with many authors,
//! plus two deliberately miswired types for the discovery contract.

// Each integration test binary compiles this module on its own and uses a
// different slice of the fixtures.
#![allow(dead_code)]

use std::rc::Rc;

use tether::{Entity, Object, RelationSlot};

pub const SAMPLE_SIZE: usize = 50;

/// Anything a person can own; lets one Many set mix several runtime types
pub trait Dwelling: Entity {}

pub struct Person {
    pub houses: RelationSlot,
}

impl Person {
    pub fn new() -> Self {
        Self {
            houses: RelationSlot::many::<dyn Dwelling>(),
        }
    }
}

impl Entity for Person {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.houses]
    }
}

pub struct House {
    pub person: RelationSlot,
}

impl House {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<Person>(),
        }
    }
}

impl Entity for House {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

impl Dwelling for House {}

pub struct Cabin {
    pub person: RelationSlot,
}

impl Cabin {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<Person>(),
        }
    }
}

impl Entity for Cabin {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

impl Dwelling for Cabin {}

pub struct Cottage {
    pub person: RelationSlot,
}

impl Cottage {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<Person>(),
        }
    }
}

impl Entity for Cottage {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

impl Dwelling for Cottage {}

/// House whose owner may be replaced without an explicit remove
pub struct TransferableHouse {
    pub person: RelationSlot,
}

impl TransferableHouse {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<Person>().with_substitution(true),
        }
    }
}

impl Entity for TransferableHouse {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

impl Dwelling for TransferableHouse {}

/// Miswired: exposes two relation slots
pub struct DuplexHouse {
    pub person_a: RelationSlot,
    pub person_b: RelationSlot,
}

impl DuplexHouse {
    pub fn new() -> Self {
        Self {
            person_a: RelationSlot::one::<Person>(),
            person_b: RelationSlot::one::<Person>(),
        }
    }
}

impl Entity for DuplexHouse {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person_a, &self.person_b]
    }
}

/// Miswired: exposes no relation slot
pub struct VacantLot;

impl Entity for VacantLot {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        Vec::new()
    }
}

pub struct SsnPerson {
    pub ssn: RelationSlot,
}

impl SsnPerson {
    pub fn new() -> Self {
        Self {
            ssn: RelationSlot::one::<Ssn>(),
        }
    }
}

impl Entity for SsnPerson {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.ssn]
    }
}

pub struct Ssn {
    pub person: RelationSlot,
}

impl Ssn {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<SsnPerson>(),
        }
    }
}

impl Entity for Ssn {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

/// Person whose ssn binding may be replaced by a later add
pub struct ReissuableSsnPerson {
    pub ssn: RelationSlot,
}

impl ReissuableSsnPerson {
    pub fn new() -> Self {
        Self {
            ssn: RelationSlot::one::<ReissuableSsn>().with_substitution(true),
        }
    }
}

impl Entity for ReissuableSsnPerson {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.ssn]
    }
}

/// Ssn whose person binding may be replaced by a later add
pub struct ReissuableSsn {
    pub person: RelationSlot,
}

impl ReissuableSsn {
    pub fn new() -> Self {
        Self {
            person: RelationSlot::one::<ReissuableSsnPerson>().with_substitution(true),
        }
    }
}

impl Entity for ReissuableSsn {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.person]
    }
}

pub struct Book {
    pub authors: RelationSlot,
}

impl Book {
    pub fn new() -> Self {
        Self {
            authors: RelationSlot::many::<Author>(),
        }
    }
}

impl Entity for Book {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.authors]
    }
}

pub struct Author {
    pub books: RelationSlot,
}

impl Author {
    pub fn new() -> Self {
        Self {
            books: RelationSlot::many::<Book>(),
        }
    }
}

impl Entity for Author {
    fn relation_slots(&self) -> Vec<&RelationSlot> {
        vec![&self.books]
    }
}

/// Wrap a fixture value, returning the concrete handle and the mapper handle
pub fn object<T: Entity>(value: T) -> (Rc<T>, Object) {
    let concrete = Rc::new(value);
    let handle: Object = concrete.clone();
    (concrete, handle)
}

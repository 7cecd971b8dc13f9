//! Entity capability - how application objects expose their relation slot
//!
//! The mapper never reaches into an object's fields on its own. An object
//! opts in by implementing [`Entity`] and enumerating its slot fields;
//! discovery enforces the exactly-one-slot contract on top of that
//! enumeration. Objects are compared and hashed by identity (allocation
//! address), never by value.

use std::any::{Any, TypeId};
use std::rc::Rc;

use crate::slot::RelationSlot;

/// Capability contract for objects that participate in relations
///
/// Implementors return every [`RelationSlot`] field they expose; the mapper
/// requires exactly one per object. The `Any` supertrait lets the mapper
/// read the exact runtime type behind a shared handle and downcast typed
/// query results.
pub trait Entity: Any {
    /// All relation slot fields of this object
    fn relation_slots(&self) -> Vec<&RelationSlot>;
}

/// Shared handle to an application object tracked by the mapper
///
/// `Rc` rather than `Arc`: a mapper instance is single-threaded by
/// contract, and the handle type makes that structural.
pub type Object = Rc<dyn Entity>;

/// Identity key of an [`Object`], derived from its allocation address
///
/// Keys every internal container, so value equality of the underlying
/// application types never leaks into relation bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ObjectId(usize);

impl ObjectId {
    pub(crate) fn of(object: &Object) -> Self {
        Self(Rc::as_ptr(object) as *const () as usize)
    }
}

/// Exact runtime type of the object behind a handle
///
/// Upcasts to `dyn Any` before asking, so the vtable answers with the
/// concrete type rather than the trait object's own id.
pub fn runtime_type_id(object: &Object) -> TypeId {
    let any: &dyn Any = &**object;
    any.type_id()
}

/// Whether two handles refer to the same object
pub fn same_object(a: &Object, b: &Object) -> bool {
    ObjectId::of(a) == ObjectId::of(b)
}

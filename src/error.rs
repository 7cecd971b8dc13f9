//! Error types for relation mapping
//!
//! Every failure the mapper can surface is a variant of [`RelationError`].
//! Errors always propagate to the caller: no operation retries, self-heals
//! or logs-and-continues, and mutation performed before a failing step is
//! not rolled back.

use thiserror::Error;

use crate::slot::{Cardinality, SlotId};

/// Result type alias for relation operations
pub type RelationResult<T> = Result<T, RelationError>;

/// Error type for relation operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// An object exposed zero or more than one relation slot at discovery time
    #[error("expected exactly one relation slot on the object, found {found}")]
    AmbiguousRelation { found: usize },

    /// An add would overwrite a One-side binding whose slot forbids substitution
    #[error("slot {slot} is already bound and does not allow substitution")]
    SubstitutionNotAllowed { slot: SlotId },

    /// A remove targeted an edge that does not exist
    #[error("no relation to remove through slot {slot}")]
    MissingRelation { slot: SlotId },

    /// A cardinality-typed accessor was dispatched against the wrong cardinality
    #[error("slot {slot} has cardinality {actual}, expected {expected}")]
    InvalidRelation {
        slot: SlotId,
        expected: Cardinality,
        actual: Cardinality,
    },
}

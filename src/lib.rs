//! # tether: In-Memory Object Relation Mapper
//!
//! Heap-allocated application objects declare typed relationship slots on
//! themselves; a [`RelationMapper`] connects, disconnects and queries
//! objects through those slots while keeping both sides of every relation
//! mutually consistent. One mediator enforces cardinality and substitution
//! rules uniformly, replacing hand-written bidirectional pointer
//! bookkeeping ("when I set `book.author`, also update `author.books`").
//!
//! The mapper is single-threaded and synchronous: every operation runs to
//! completion without blocking, object handles are `Rc`-based, and
//! concurrent use of one mapper instance is not supported.
//!
//! ```
//! use std::rc::Rc;
//! use tether::{Entity, Object, RelationMapper, RelationSlot};
//!
//! struct Author {
//!     books: RelationSlot,
//! }
//!
//! struct Book {
//!     author: RelationSlot,
//! }
//!
//! impl Entity for Author {
//!     fn relation_slots(&self) -> Vec<&RelationSlot> {
//!         vec![&self.books]
//!     }
//! }
//!
//! impl Entity for Book {
//!     fn relation_slots(&self) -> Vec<&RelationSlot> {
//!         vec![&self.author]
//!     }
//! }
//!
//! # fn main() -> tether::RelationResult<()> {
//! let author = Rc::new(Author { books: RelationSlot::many::<Book>() });
//! let book = Rc::new(Book { author: RelationSlot::one::<Author>() });
//! let author_obj: Object = author.clone();
//! let book_obj: Object = book.clone();
//!
//! let mut mapper = RelationMapper::new();
//! mapper.add(&author_obj, &book_obj)?;
//!
//! assert_eq!(mapper.many(&author.books)?.len(), 1);
//! assert!(mapper.one(&book.author)?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod registry;
pub mod slot;
pub mod store;

// Re-export the public surface
pub use discovery::*;
pub use entity::*;
pub use error::*;
pub use mapper::*;
pub use registry::*;
pub use slot::*;
pub use store::*;

//! The static range protocol.
//!
//! A type takes part in the protocol by implementing:
//!
//! - [`StaticRange`]: the descriptor, carrying the arity as an associated
//!   constant and the matching type-level index list.
//! - [`Element<I>`]: one accessor per index, implemented separately for the
//!   owned value, `&T` and `&mut T` so the value category of the range flows
//!   into the element.
//! - [`ElementMut<I>`]: a writable slot, for ranges that store their elements.
//!
//! Tuples up to twelve elements and arrays up to
//! [`MAX_SEQUENCE_LEN`] elements are covered here. [`Range`] is the capability
//! predicate every operation checks; [`element`] and [`size_of`] form the
//! access facade.

mod access;
mod arrays;
mod descriptor;
mod indices;
mod predicates;
mod tuples;

pub use access::{element, size_of};
pub use descriptor::{Element, ElementMut, StaticRange};
pub use indices::{Arity, Cons, IndexList, MAX_SEQUENCE_LEN, Nil, Sequence};
pub use predicates::{Covers, Range};
pub use tuples::MAX_TUPLE_ARITY;

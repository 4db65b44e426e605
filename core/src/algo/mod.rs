//! Bulk per-element operators.
//!
//! Each operator recurses over the range's index list with one trait impl per
//! [`Cons`](crate::protocol::Cons) cell, so a call expands to one step per
//! index, in ascending order, each step typed for its own element. Ranges of
//! different arity are rejected because their `Indices` types differ.
//!
//! Sources are read through [`Element`](crate::Element) and taken by value,
//! so `&range`, views and owned ranges all work. Destinations are written
//! through their [`ElementMut`](crate::ElementMut) slots.
//!
//! Every call emits a single `trace` event with the operation name and the
//! arity.

mod copy;
mod for_each;
mod transform;

pub use copy::{CopyFrom, CopyIndices, copy};
pub use for_each::{ForEachIndices, ForEachRefIndices, for_each, for_each_ref};
pub use transform::{Assign, Transform2Indices, TransformIndices, transform, transform2};

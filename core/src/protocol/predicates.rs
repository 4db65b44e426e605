use super::{Cons, Element, Nil, StaticRange};

/// Holds when every index in the list has a read-only accessor on `R`.
pub trait Covers<R: ?Sized> {}

impl<R: ?Sized> Covers<R> for Nil {}

impl<R, const I: usize, Rest> Covers<R> for Cons<I, Rest>
where
    R: ?Sized,
    for<'a> &'a R: Element<I>,
    Rest: Covers<R>,
{
}

/// Capability predicate: "qualifies as a static range".
///
/// Satisfied by every [`StaticRange`] whose accessor exists for each index in
/// `0..SIZE`. It is never implemented by hand; public operations take it as a
/// bound so a type that only half-implements the protocol is rejected at the
/// call site.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not provide an element accessor for every index",
    note = "a static range needs `&Self: Element<I>` for each `I` below `SIZE`"
)]
pub trait Range: StaticRange {}

impl<R> Range for R
where
    R: StaticRange + ?Sized,
    R::Indices: Covers<R>,
{
}

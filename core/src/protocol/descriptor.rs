use super::IndexList;

/// Protocol descriptor: the compile-time arity of a range.
///
/// `SIZE` is a property of the type, never of a value. `Indices` must be the
/// canonical list for `SIZE`, i.e. `<Arity<SIZE> as Sequence>::Indices`;
/// bulk operations recurse over it and compare it across ranges to reject
/// arity mismatches.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a static range",
    note = "implement `StaticRange` and `Element<I>` for every index, or use `static_range!`"
)]
pub trait StaticRange {
    const SIZE: usize;
    type Indices: IndexList;
}

impl<R: StaticRange + ?Sized> StaticRange for &R {
    const SIZE: usize = R::SIZE;
    type Indices = R::Indices;
}

impl<R: StaticRange + ?Sized> StaticRange for &mut R {
    const SIZE: usize = R::SIZE;
    type Indices = R::Indices;
}

/// Protocol accessor for index `I`.
///
/// Implemented once per value category:
///
/// | Implementor | `Output` |
/// |-------------|----------|
/// | `R`         | the element, moved out of `R` |
/// | `&'a R`     | `&'a T` (or a computed value for transform views) |
/// | `&'a mut R` | `&'a mut T` (or a computed value for transform views) |
///
/// Call sites go through [`element`](super::element) rather than `get`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no static range element at the requested index",
    note = "the index may be out of bounds, or this value category has no accessor"
)]
pub trait Element<const I: usize>: StaticRange + Sized {
    type Output;

    fn get(self) -> Self::Output;
}

/// Writable slot at index `I`.
///
/// Implemented by ranges that store their elements: tuples, arrays,
/// [`RefView`](crate::views::RefView), [`Materialized`](crate::views::Materialized)
/// and aggregates declared with [`static_range!`](crate::static_range). Bulk
/// operators write their results through it. Views that compute their
/// elements have no slots.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no writable slot at the requested index",
    note = "only ranges that store their elements can be written to; transform and read-only views cannot"
)]
pub trait ElementMut<const I: usize>: StaticRange {
    type Target;

    fn element_mut(&mut self) -> &mut Self::Target;
}

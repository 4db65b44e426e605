//! Type-level index lists.
//!
//! Operations over a range are unrolled by recursing over its index list one
//! [`Cons`] cell at a time, so each index gets its own monomorphized step and
//! its own element type.

use core::marker::PhantomData;

/// The longest array for which [`Sequence`] is implemented.
pub const MAX_SEQUENCE_LEN: usize = 32;

/// A type-level list of compile-time indices.
pub trait IndexList {
    /// Number of indices in the list.
    const LEN: usize;
}

/// The empty index list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// Index `I` followed by the indices in `Rest`.
pub struct Cons<const I: usize, Rest>(PhantomData<Rest>);

impl IndexList for Nil {
    const LEN: usize = 0;
}

impl<const I: usize, Rest: IndexList> IndexList for Cons<I, Rest> {
    const LEN: usize = 1 + Rest::LEN;
}

/// A length lifted to the type level.
pub struct Arity<const N: usize>;

/// Maps a length to its canonical index list `0, 1, ..., N - 1`.
///
/// Every range descriptor uses this list, so two ranges have the same arity
/// exactly when their `Indices` types are equal.
pub trait Sequence {
    type Indices: IndexList;
}

macro_rules! sequences {
    ([$($done:tt)*]) => {};
    ([$($done:tt)*] $next:tt $($rest:tt)*) => {
        impl Sequence for Arity<$next> {
            type Indices = crate::index_list!($($done)*);
        }
        sequences!([$($done)* $next] $($rest)*);
    };
}

sequences!([]
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
);

static_assertions::const_assert_eq!(
    <<Arity<MAX_SEQUENCE_LEN> as Sequence>::Indices as IndexList>::LEN,
    MAX_SEQUENCE_LEN
);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Arity<0> as Sequence>::Indices, Nil);
    assert_type_eq_all!(<Arity<1> as Sequence>::Indices, Cons<0, Nil>);
    assert_type_eq_all!(
        <Arity<3> as Sequence>::Indices,
        Cons<0, Cons<1, Cons<2, Nil>>>
    );

    #[test]
    fn lengths_match_arity() {
        assert_eq!(<<Arity<0> as Sequence>::Indices as IndexList>::LEN, 0);
        assert_eq!(<<Arity<7> as Sequence>::Indices as IndexList>::LEN, 7);
        assert_eq!(<<Arity<32> as Sequence>::Indices as IndexList>::LEN, 32);
    }
}

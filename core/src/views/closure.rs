//! Transform closures and the `|` operator.
//!
//! `range | transform(f)` is the same as `transform(f).apply(range)`: the
//! range is viewed with [`all`](super::all) and wrapped in a
//! [`TransformView`]. The operator is implemented for every view, for `&` and
//! `&mut` of tuples and arrays, and for aggregates declared with
//! [`static_range!`](crate::static_range).

use core::ops::BitOr;

use super::{ConstView, IntoView, Materialized, RefView, TransformView, View};
use crate::StaticRange;
use crate::func::Chain;
use crate::macros::for_tuples;
use crate::protocol::{Arity, Sequence};

/// A transform waiting for a range.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformClosure<F> {
    func: F,
}

impl<F> TransformClosure<F> {
    pub const fn new(func: F) -> Self {
        Self { func }
    }

    /// Wraps `range` in a lazy transform by this closure's function.
    #[inline(always)]
    pub fn apply<R: IntoView>(self, range: R) -> TransformView<R::View, F> {
        TransformView::new(range.into_view(), self.func)
    }

    /// One closure running this function and then `next`'s.
    ///
    /// `range | a.then(b)` behaves like `range | a | b` but is a single value
    /// that can be stored and reused.
    ///
    /// ```
    /// use static_ranges_core::{element, views::transform};
    ///
    /// let scale = transform(|x: &f64| x * 2.0).then(transform(|x: f64| x + 1.0));
    /// let data = [1.0, 2.5];
    /// let view = &data | scale;
    /// assert_eq!(element::<1, _>(&view), 6.0);
    /// ```
    pub fn then<G>(self, next: TransformClosure<G>) -> TransformClosure<Chain<F, G>> {
        TransformClosure::new(Chain::new(self.func, next.func))
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}

/// Creates a transform closure from a [`Mapper`](crate::func::Mapper).
///
/// ```
/// use static_ranges_core::{element, views::transform};
///
/// let words = ("one", "three");
/// let lengths = &words | transform(|w: &&str| w.len());
/// assert_eq!(element::<1, _>(&lengths), 5);
/// ```
#[inline(always)]
pub const fn transform<F>(func: F) -> TransformClosure<F> {
    TransformClosure::new(func)
}

/// Shorthand for `range | transform(func)`.
#[inline(always)]
pub fn transform_range<R: IntoView, F>(range: R, func: F) -> TransformView<R::View, F> {
    transform(func).apply(range)
}

impl<'a, R: StaticRange + ?Sized, F> BitOr<TransformClosure<F>> for RefView<'a, R> {
    type Output = TransformView<Self, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

impl<'a, R: StaticRange + ?Sized, F> BitOr<TransformClosure<F>> for ConstView<'a, R> {
    type Output = TransformView<Self, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

impl<R: StaticRange, F> BitOr<TransformClosure<F>> for Materialized<R> {
    type Output = TransformView<Self, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

impl<V: View, G, F> BitOr<TransformClosure<F>> for TransformView<V, G> {
    type Output = TransformView<Self, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

impl<'a, T, const N: usize, F> BitOr<TransformClosure<F>> for &'a [T; N]
where
    Arity<N>: Sequence,
{
    type Output = TransformView<ConstView<'a, [T; N]>, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

impl<'a, T, const N: usize, F> BitOr<TransformClosure<F>> for &'a mut [T; N]
where
    Arity<N>: Sequence,
{
    type Output = TransformView<RefView<'a, [T; N]>, F>;

    fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
        closure.apply(self)
    }
}

macro_rules! tuple_pipe {
    ($len:literal; $($idx:tt : $T:ident),*) => {
        impl<'a, F, $($T),*> BitOr<TransformClosure<F>> for &'a ($($T,)*) {
            type Output = TransformView<ConstView<'a, ($($T,)*)>, F>;

            fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
                closure.apply(self)
            }
        }

        impl<'a, F, $($T),*> BitOr<TransformClosure<F>> for &'a mut ($($T,)*) {
            type Output = TransformView<RefView<'a, ($($T,)*)>, F>;

            fn bitor(self, closure: TransformClosure<F>) -> Self::Output {
                closure.apply(self)
            }
        }
    };
}

for_tuples!(tuple_pipe);

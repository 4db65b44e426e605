//! Owning views and the integer sequences built on them.

use core::marker::PhantomData;

use super::{IntoView, View};
use crate::protocol::{Arity, Sequence};
use crate::{Element, ElementMut, StaticRange};

/// A view that owns the range it wraps.
///
/// Access follows the category of the view: an owned `Materialized` moves
/// elements out, `&view` and `&mut view` borrow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Materialized<R> {
    range: R,
}

impl<R> Materialized<R> {
    pub const fn new(range: R) -> Self {
        Self { range }
    }

    pub fn get_ref(&self) -> &R {
        &self.range
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.range
    }

    pub fn into_inner(self) -> R {
        self.range
    }
}

/// Takes ownership of `range` as a view.
///
/// ```
/// use static_ranges_core::{element, views::{materialize, transform}};
///
/// let owned = materialize((String::from("a"), 2_u8));
/// let lengths = owned | transform(|s: String| s.len());
/// assert_eq!(element::<0, _>(lengths), 1);
/// ```
#[inline(always)]
pub fn materialize<R: StaticRange>(range: R) -> Materialized<R> {
    Materialized::new(range)
}

impl<R: StaticRange> StaticRange for Materialized<R> {
    const SIZE: usize = R::SIZE;
    type Indices = R::Indices;
}

impl<R, const I: usize> Element<I> for Materialized<R>
where
    R: Element<I>,
{
    type Output = R::Output;

    #[inline(always)]
    fn get(self) -> R::Output {
        <R as Element<I>>::get(self.range)
    }
}

impl<'s, R, const I: usize> Element<I> for &'s Materialized<R>
where
    R: StaticRange,
    &'s R: Element<I>,
{
    type Output = <&'s R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'s R as Element<I>>::get(&self.range)
    }
}

impl<'s, R, const I: usize> Element<I> for &'s mut Materialized<R>
where
    R: StaticRange,
    &'s mut R: Element<I>,
{
    type Output = <&'s mut R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'s mut R as Element<I>>::get(&mut self.range)
    }
}

impl<R: ElementMut<I>, const I: usize> ElementMut<I> for Materialized<R> {
    type Target = R::Target;

    #[inline(always)]
    fn element_mut(&mut self) -> &mut R::Target {
        <R as ElementMut<I>>::element_mut(&mut self.range)
    }
}

impl<R: StaticRange> View for Materialized<R> {}

impl<R: StaticRange> IntoView for Materialized<R> {
    type View = Self;

    #[inline(always)]
    fn into_view(self) -> Self {
        self
    }
}

mod private {
    pub trait Sealed {}
}

/// Primitive integer types that [`iota`] and [`static_iota`] can count in.
pub trait Integer: private::Sealed + Copy {
    /// Converts an index below [`MAX_SEQUENCE_LEN`](crate::protocol::MAX_SEQUENCE_LEN).
    fn from_index(index: usize) -> Self;
}

/// The compile-time constant `I` as a value of type `T`. Zero-sized.
///
/// Both `Constant::<T, I>::VALUE` and `get()` yield `I` converted to `T`.
pub struct Constant<T, const I: usize>(PhantomData<T>);

impl<T, const I: usize> Constant<T, I> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T, const I: usize> Default for Constant<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const I: usize> Clone for Constant<T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const I: usize> Copy for Constant<T, I> {}

impl<T, const I: usize> PartialEq for Constant<T, I> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T, const I: usize> Eq for Constant<T, I> {}

impl<T, const I: usize> core::fmt::Debug for Constant<T, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Constant<{}>({})", core::any::type_name::<T>(), I)
    }
}

macro_rules! integers {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    index as $t
                }
            }

            impl<const I: usize> Constant<$t, I> {
                pub const VALUE: $t = I as $t;

                #[inline(always)]
                pub const fn get(self) -> $t {
                    Self::VALUE
                }
            }
        )*
    };
}

integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// The integers `0..N` as `T`, stored in an array.
///
/// ```
/// use static_ranges_core::{element, views::iota};
///
/// let digits = iota::<i32, 5>();
/// assert_eq!(digits.get_ref(), &[0, 1, 2, 3, 4]);
/// assert_eq!(*element::<4, _>(&digits), 4);
/// ```
pub fn iota<T: Integer, const N: usize>() -> Materialized<[T; N]>
where
    Arity<N>: Sequence,
{
    Materialized::new(core::array::from_fn(T::from_index))
}

/// The integers `0..N` as types: element `I` is [`Constant<T, I>`].
///
/// Holds no data; every element is produced from its index.
#[derive(Debug)]
pub struct StaticIota<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> StaticIota<T, N> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T, const N: usize> Default for StaticIota<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Clone for StaticIota<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for StaticIota<T, N> {}

impl<T, const N: usize> StaticRange for StaticIota<T, N>
where
    Arity<N>: Sequence,
{
    const SIZE: usize = N;
    type Indices = <Arity<N> as Sequence>::Indices;
}

impl<T, const N: usize, const I: usize> Element<I> for StaticIota<T, N>
where
    Arity<N>: Sequence,
{
    type Output = Constant<T, I>;

    #[inline(always)]
    fn get(self) -> Constant<T, I> {
        const { assert!(I < N, "static range index out of bounds") };
        Constant::new()
    }
}

impl<T, const N: usize, const I: usize> Element<I> for &StaticIota<T, N>
where
    Arity<N>: Sequence,
{
    type Output = Constant<T, I>;

    #[inline(always)]
    fn get(self) -> Constant<T, I> {
        <StaticIota<T, N> as Element<I>>::get(*self)
    }
}

impl<T, const N: usize, const I: usize> Element<I> for &mut StaticIota<T, N>
where
    Arity<N>: Sequence,
{
    type Output = Constant<T, I>;

    #[inline(always)]
    fn get(self) -> Constant<T, I> {
        <StaticIota<T, N> as Element<I>>::get(*self)
    }
}

/// The integers `0..N` as compile-time constants.
///
/// ```
/// use static_ranges_core::{element, views::{Constant, static_iota}};
///
/// let indices = static_iota::<u8, 4>();
/// let third: Constant<u8, 2> = element::<2, _>(&indices);
/// assert_eq!(third.get(), 2);
/// assert_eq!(Constant::<u8, 3>::VALUE, 3);
/// ```
///
/// ```compile_fail
/// use static_ranges_core::{element, views::static_iota};
///
/// let _ = element::<4, _>(static_iota::<u8, 4>());
/// ```
pub const fn static_iota<T, const N: usize>() -> Materialized<StaticIota<T, N>>
where
    Arity<N>: Sequence,
{
    Materialized::new(StaticIota::new())
}

static_assertions::assert_eq_size!(Materialized<StaticIota<i64, 8>>, ());
static_assertions::assert_eq_size!(Constant<u128, 31>, ());

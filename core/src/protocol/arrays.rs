//! Descriptors for fixed arrays of up to [`MAX_SEQUENCE_LEN`](super::MAX_SEQUENCE_LEN)
//! elements.
//!
//! The accessor is generic over the index, so the bound check lives in an
//! inline `const` block rather than in the absence of an impl.

use super::{Arity, Element, ElementMut, Sequence, StaticRange};

impl<T, const N: usize> StaticRange for [T; N]
where
    Arity<N>: Sequence,
{
    const SIZE: usize = N;
    type Indices = <Arity<N> as Sequence>::Indices;
}

impl<T, const N: usize, const I: usize> Element<I> for [T; N]
where
    Arity<N>: Sequence,
{
    type Output = T;

    #[inline(always)]
    fn get(self) -> T {
        const { assert!(I < N, "static range index out of bounds") };
        // `I < N` holds by the assertion above, so `nth` always yields.
        match self.into_iter().nth(I) {
            Some(value) => value,
            None => unreachable!(),
        }
    }
}

impl<'a, T, const N: usize, const I: usize> Element<I> for &'a [T; N]
where
    Arity<N>: Sequence,
{
    type Output = &'a T;

    #[inline(always)]
    fn get(self) -> &'a T {
        const { assert!(I < N, "static range index out of bounds") };
        &self[I]
    }
}

impl<'a, T, const N: usize, const I: usize> Element<I> for &'a mut [T; N]
where
    Arity<N>: Sequence,
{
    type Output = &'a mut T;

    #[inline(always)]
    fn get(self) -> &'a mut T {
        const { assert!(I < N, "static range index out of bounds") };
        &mut self[I]
    }
}

impl<T, const N: usize, const I: usize> ElementMut<I> for [T; N]
where
    Arity<N>: Sequence,
{
    type Target = T;

    #[inline(always)]
    fn element_mut(&mut self) -> &mut T {
        const { assert!(I < N, "static range index out of bounds") };
        &mut self[I]
    }
}

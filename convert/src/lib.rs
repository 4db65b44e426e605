#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Conversions from static ranges to standard containers.
//!
//! Each conversion reads every element through the range protocol, so it
//! works for tuples, arrays, views and user aggregates alike. The range is
//! taken by value and cloned once per element: pass `&range` to collect
//! references, or an owned (or `Copy`) range to collect values.
//!
//! ```
//! use static_ranges_convert::{to_array, to_pair, to_tuple, try_to_array};
//!
//! let pair = to_pair([1, 2]);
//! assert_eq!(pair, (1, 2));
//!
//! let record = (7_u8, 300_u16, -1_i32);
//! let widened: [i64; 3] = to_array::<i64, _>(record);
//! assert_eq!(widened, [7, 300, -1]);
//!
//! let narrowed = try_to_array::<u8, _>(record);
//! assert_eq!(narrowed.unwrap_err().index(), 1);
//!
//! let borrowed = to_tuple(&record);
//! assert_eq!(borrowed, (&7, &300, &-1));
//! ```

mod error;

pub use error::ConversionError;

use static_ranges_core::protocol::{Cons, Nil};
use static_ranges_core::{Element, StaticRange, index_list};

/// Collects every element of `R` into a tuple.
pub trait ToTupleIndices<R> {
    type Tuple;

    fn to_tuple(range: R) -> Self::Tuple;
}

/// Converts every element of `R` into `T` and collects them into an array.
pub trait ToArrayIndices<R, T> {
    type Array;

    fn to_array(range: R) -> Self::Array;
}

/// Fallible [`ToArrayIndices`]: stops at the first element that fails to
/// convert.
pub trait TryToArrayIndices<R, T> {
    type Array;

    fn try_to_array(range: R) -> Result<Self::Array, ConversionError>;
}

macro_rules! conversions {
    ([$($done:tt)*]) => {};
    ([$($done:tt)*] $next:tt $($rest:tt)*) => {
        #[allow(unused_variables, clippy::unused_unit)]
        impl<R> ToTupleIndices<R> for index_list!($($done)*)
        where
            R: Clone $(+ Element<$done>)*,
        {
            type Tuple = ($(<R as Element<$done>>::Output,)*);

            #[inline(always)]
            fn to_tuple(range: R) -> Self::Tuple {
                ($(<R as Element<$done>>::get(range.clone()),)*)
            }
        }

        #[allow(unused_variables)]
        impl<R, T> ToArrayIndices<R, T> for index_list!($($done)*)
        where
            R: Clone $(+ Element<$done>)*,
            $(<R as Element<$done>>::Output: Into<T>,)*
        {
            type Array = [T; $next];

            #[inline(always)]
            fn to_array(range: R) -> [T; $next] {
                [$(<R as Element<$done>>::get(range.clone()).into(),)*]
            }
        }

        #[allow(unused_variables)]
        impl<R, T> TryToArrayIndices<R, T> for index_list!($($done)*)
        where
            R: Clone $(+ Element<$done>)*,
            $(<R as Element<$done>>::Output: TryInto<T>,)*
        {
            type Array = [T; $next];

            #[inline(always)]
            fn try_to_array(range: R) -> Result<[T; $next], ConversionError> {
                Ok([$(
                    <R as Element<$done>>::get(range.clone())
                        .try_into()
                        .map_err(|_| ConversionError::element::<T>($done))?,
                )*])
            }
        }

        conversions!([$($done)* $next] $($rest)*);
    };
}

conversions!([]
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
);

/// The two elements of a two-element range as a pair.
///
/// ```
/// use static_ranges_convert::to_pair;
///
/// let names = ("ada", String::from("lovelace"));
/// let (first, last) = to_pair(&names);
/// assert_eq!((*first, last.as_str()), ("ada", "lovelace"));
/// ```
///
/// Any other arity is rejected:
///
/// ```compile_fail
/// use static_ranges_convert::to_pair;
///
/// let _ = to_pair((1, 2, 3));
/// ```
pub fn to_pair<R>(range: R) -> (<R as Element<0>>::Output, <R as Element<1>>::Output)
where
    R: StaticRange<Indices = Cons<0, Cons<1, Nil>>> + Element<0> + Element<1> + Clone,
{
    (
        <R as Element<0>>::get(range.clone()),
        <R as Element<1>>::get(range),
    )
}

/// Every element of `range`, in order, as a tuple.
pub fn to_tuple<R>(range: R) -> <R::Indices as ToTupleIndices<R>>::Tuple
where
    R: StaticRange,
    R::Indices: ToTupleIndices<R>,
{
    <R::Indices as ToTupleIndices<R>>::to_tuple(range)
}

/// Every element of `range` converted with `Into<T>`, as an array.
pub fn to_array<T, R>(range: R) -> <R::Indices as ToArrayIndices<R, T>>::Array
where
    R: StaticRange,
    R::Indices: ToArrayIndices<R, T>,
{
    <R::Indices as ToArrayIndices<R, T>>::to_array(range)
}

/// Every element of `range` converted with `TryInto<T>`, as an array.
///
/// Fails with the index of the first element that does not convert.
pub fn try_to_array<T, R>(
    range: R,
) -> Result<<R::Indices as TryToArrayIndices<R, T>>::Array, ConversionError>
where
    R: StaticRange,
    R::Indices: TryToArrayIndices<R, T>,
{
    <R::Indices as TryToArrayIndices<R, T>>::try_to_array(range).inspect_err(|err| {
        tracing::debug!(error = %err, arity = R::SIZE, "try_to_array failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_ranges_core::views::{all, iota, transform};

    #[test]
    fn empty_range_converts_to_empty_containers() {
        let () = to_tuple(());
        let empty: [u8; 0] = to_array::<u8, _>(());
        assert!(empty.is_empty());
    }

    #[test]
    fn tuple_from_a_lazy_view() {
        let base = [3_u32, 4];
        let squares = all(&base) | transform(|x: &u32| x * x);
        assert_eq!(to_tuple(&squares), (9, 16));
    }

    #[test]
    fn array_from_iota() {
        let widened: [i128; 4] = to_array::<i128, _>(iota::<u8, 4>());
        assert_eq!(widened, [0, 1, 2, 3]);
    }

    #[test]
    fn try_to_array_reports_the_first_failure() {
        let values = (1_i32, -2_i32, -3_i32);
        let err = try_to_array::<u32, _>(values).unwrap_err();
        assert_eq!(
            err,
            ConversionError::Element {
                index: 1,
                target: "u32"
            }
        );
        assert_eq!(try_to_array::<i64, _>(values), Ok([1, -2, -3]));
    }
}

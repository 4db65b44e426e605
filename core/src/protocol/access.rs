use super::{Element, IndexList, StaticRange};

/// Returns element `I` of `range`.
///
/// The value category of the argument selects the accessor: pass the range by
/// value to move the element out, `&range` for a shared reference and
/// `&mut range` for a mutable one. Indices past the arity are rejected while
/// compiling.
///
/// ```
/// use static_ranges_core::element;
///
/// let mut pair = (String::from("key"), 1_u32);
/// *element::<1, _>(&mut pair) += 1;
/// assert_eq!(element::<0, _>(&pair), "key");
/// assert_eq!(element::<1, _>(pair), 2);
/// ```
///
/// ```compile_fail
/// use static_ranges_core::element;
///
/// let pair = (1, 2);
/// let _ = element::<2, _>(&pair);
/// ```
///
/// ```compile_fail
/// use static_ranges_core::element;
///
/// let array = [1, 2, 3];
/// let _ = element::<3, _>(&array);
/// ```
#[inline(always)]
pub fn element<const I: usize, R>(range: R) -> R::Output
where
    R: Element<I>,
{
    const { assert!(I < R::SIZE, "static range index out of bounds") };
    <R as Element<I>>::get(range)
}

/// Returns the arity of `range`'s type. The value itself is never read.
///
/// ```
/// use static_ranges_core::size_of;
///
/// assert_eq!(size_of(&()), 0);
/// assert_eq!(size_of(&(1, "two", 3.0)), 3);
/// assert_eq!(size_of(&[0_u8; 16]), 16);
/// ```
pub const fn size_of<R>(_range: &R) -> usize
where
    R: StaticRange + ?Sized,
{
    const {
        assert!(
            R::SIZE == <R::Indices as IndexList>::LEN,
            "static range arity disagrees with its index list"
        )
    };
    R::SIZE
}

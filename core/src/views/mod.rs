//! Views: ranges that refer to, own or compute the elements of another range.
//!
//! Every view is itself a static range with the arity of what it wraps, so
//! views nest freely. [`all`] turns anything that can be viewed into a view;
//! `range | transform(f)` stacks a lazy transform on top.

mod closure;
mod materialized;
mod reference;
mod transform;

pub use closure::{TransformClosure, transform, transform_range};
pub use materialized::{Constant, Integer, Materialized, StaticIota, iota, materialize, static_iota};
pub use reference::{ConstView, RefView};
pub use transform::TransformView;

use crate::StaticRange;

/// Marker for the view wrappers in this module.
///
/// A view forwards the protocol of the range it wraps and is its own
/// [`IntoView`], so wrapping a view again is a no-op.
pub trait View: StaticRange {}

/// Conversion into a [`View`].
///
/// `&mut R` becomes a [`RefView`], `&R` a [`ConstView`], and every view
/// converts to itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be viewed as a static range",
    note = "pass `&range` or `&mut range`, or wrap an owned range with `materialize`"
)]
pub trait IntoView {
    type View: View;

    fn into_view(self) -> Self::View;
}

/// Views `range`: a back-reference for `&R` and `&mut R`, the identity for a
/// view.
///
/// ```
/// use static_ranges_core::{element, views::all};
///
/// let mut pair = (1, 'a');
/// let mut view = all(&mut pair);
/// *element::<1, _>(&mut view) = 'b';
/// assert_eq!(pair, (1, 'b'));
/// ```
#[inline(always)]
pub fn all<R: IntoView>(range: R) -> R::View {
    range.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    type Row = (u8, &'static str);

    assert_type_eq_all!(<&'static mut Row as IntoView>::View, RefView<'static, Row>);
    assert_type_eq_all!(<&'static Row as IntoView>::View, ConstView<'static, Row>);
    assert_type_eq_all!(
        <RefView<'static, Row> as IntoView>::View,
        <<&'static mut Row as IntoView>::View as IntoView>::View
    );
    assert_impl_all!(RefView<'static, Row>: View, crate::Range);
    assert_impl_all!(ConstView<'static, [u32; 4]>: View, crate::Range, Copy);

    #[test]
    fn all_of_a_view_is_the_same_view() {
        let mut row: Row = (3, "three");
        let once = all(&mut row);
        let twice = all(once);
        assert_eq!(*element::<0, _>(&twice), 3);
        assert_eq!(*element::<1, _>(&twice), "three");
    }
}

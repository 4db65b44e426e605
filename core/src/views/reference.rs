use super::{IntoView, View};
use crate::{Element, ElementMut, StaticRange};

/// A mutable back-reference to a range.
///
/// Accessing `&mut view` yields `&mut T` into the referenced range, so writes
/// through the view land in the original.
#[derive(Debug)]
pub struct RefView<'a, R: ?Sized> {
    range: &'a mut R,
}

impl<'a, R: ?Sized> RefView<'a, R> {
    pub fn new(range: &'a mut R) -> Self {
        Self { range }
    }

    pub fn get_ref(&self) -> &R {
        &*self.range
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut *self.range
    }

    pub fn into_inner(self) -> &'a mut R {
        self.range
    }
}

impl<R: StaticRange + ?Sized> StaticRange for RefView<'_, R> {
    const SIZE: usize = R::SIZE;
    type Indices = R::Indices;
}

impl<'a, R, const I: usize> Element<I> for RefView<'a, R>
where
    R: StaticRange + ?Sized,
    &'a mut R: Element<I>,
{
    type Output = <&'a mut R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'a mut R as Element<I>>::get(self.range)
    }
}

impl<'s, R, const I: usize> Element<I> for &'s RefView<'_, R>
where
    R: StaticRange + ?Sized,
    &'s R: Element<I>,
{
    type Output = <&'s R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'s R as Element<I>>::get(&*self.range)
    }
}

impl<'s, R, const I: usize> Element<I> for &'s mut RefView<'_, R>
where
    R: StaticRange + ?Sized,
    &'s mut R: Element<I>,
{
    type Output = <&'s mut R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'s mut R as Element<I>>::get(&mut *self.range)
    }
}

impl<R, const I: usize> ElementMut<I> for RefView<'_, R>
where
    R: ElementMut<I> + ?Sized,
{
    type Target = R::Target;

    #[inline(always)]
    fn element_mut(&mut self) -> &mut R::Target {
        R::element_mut(&mut *self.range)
    }
}

impl<R: StaticRange + ?Sized> View for RefView<'_, R> {}

impl<'a, R: StaticRange + ?Sized> IntoView for RefView<'a, R> {
    type View = Self;

    #[inline(always)]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, R: StaticRange + ?Sized> IntoView for &'a mut R {
    type View = RefView<'a, R>;

    #[inline(always)]
    fn into_view(self) -> RefView<'a, R> {
        RefView::new(self)
    }
}

/// A read-only back-reference to a range. Every access yields `&T`, whatever
/// the category of the view itself.
#[derive(Debug)]
pub struct ConstView<'a, R: ?Sized> {
    range: &'a R,
}

impl<'a, R: ?Sized> ConstView<'a, R> {
    pub const fn new(range: &'a R) -> Self {
        Self { range }
    }

    pub const fn get_ref(&self) -> &'a R {
        self.range
    }
}

impl<R: ?Sized> Clone for ConstView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for ConstView<'_, R> {}

impl<R: StaticRange + ?Sized> StaticRange for ConstView<'_, R> {
    const SIZE: usize = R::SIZE;
    type Indices = R::Indices;
}

impl<'a, R, const I: usize> Element<I> for ConstView<'a, R>
where
    R: StaticRange + ?Sized,
    &'a R: Element<I>,
{
    type Output = <&'a R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'a R as Element<I>>::get(self.range)
    }
}

impl<'a, R, const I: usize> Element<I> for &ConstView<'a, R>
where
    R: StaticRange + ?Sized,
    &'a R: Element<I>,
{
    type Output = <&'a R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'a R as Element<I>>::get(self.range)
    }
}

impl<'a, R, const I: usize> Element<I> for &mut ConstView<'a, R>
where
    R: StaticRange + ?Sized,
    &'a R: Element<I>,
{
    type Output = <&'a R as Element<I>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <&'a R as Element<I>>::get(self.range)
    }
}

impl<R: StaticRange + ?Sized> View for ConstView<'_, R> {}

impl<'a, R: StaticRange + ?Sized> IntoView for ConstView<'a, R> {
    type View = Self;

    #[inline(always)]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, R: StaticRange + ?Sized> IntoView for &'a R {
    type View = ConstView<'a, R>;

    #[inline(always)]
    fn into_view(self) -> ConstView<'a, R> {
        ConstView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element;

    #[test]
    fn writes_through_ref_view_reach_the_source() {
        let mut source = [1_i64, 2, 3];
        let mut view = RefView::new(&mut source);
        *element::<2, _>(&mut view) = 30;
        assert_eq!(*element::<2, _>(&view), 30);
        assert_eq!(view.get_ref(), &[1, 2, 30]);
        assert_eq!(source, [1, 2, 30]);
    }

    #[test]
    fn owned_ref_view_hands_out_the_full_borrow() {
        let mut source = (String::from("a"), 1_u8);
        let slot: &mut String = element::<0, _>(RefView::new(&mut source));
        slot.push('b');
        assert_eq!(source.0, "ab");
    }

    #[test]
    fn const_view_is_copy_and_read_only() {
        let source = ("x", 2.5_f32);
        let view = ConstView::new(&source);
        let copy = view;
        let mut other = view;
        assert_eq!(*element::<0, _>(copy), "x");
        assert_eq!(*element::<1, _>(&mut other), 2.5);
        assert!(core::ptr::eq(view.get_ref(), &source));
    }
}

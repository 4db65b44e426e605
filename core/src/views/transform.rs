use super::{IntoView, View};
use crate::func::Mapper;
use crate::{Element, StaticRange};

/// A lazy element-wise transform of an inner view.
///
/// Element `I` is `func(inner[I])`, computed on every access and never
/// cached. The inner view may itself be a `TransformView`; a chain is resolved
/// innermost first.
#[derive(Debug, Clone, Copy)]
pub struct TransformView<V, F> {
    view: V,
    func: F,
}

impl<V: View, F> TransformView<V, F> {
    pub const fn new(view: V, func: F) -> Self {
        Self { view, func }
    }
}

impl<V, F> TransformView<V, F> {
    /// The view being transformed.
    pub fn inner(&self) -> &V {
        &self.view
    }

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn into_parts(self) -> (V, F) {
        (self.view, self.func)
    }
}

impl<V: StaticRange, F> StaticRange for TransformView<V, F> {
    const SIZE: usize = V::SIZE;
    type Indices = V::Indices;
}

impl<V, F, const I: usize> Element<I> for TransformView<V, F>
where
    V: Element<I>,
    F: Mapper<V::Output>,
{
    type Output = F::Output;

    #[inline(always)]
    fn get(self) -> F::Output {
        let TransformView { view, func } = self;
        <F as Mapper<V::Output>>::call(&func, <V as Element<I>>::get(view))
    }
}

impl<'s, V, F, const I: usize> Element<I> for &'s TransformView<V, F>
where
    V: StaticRange,
    &'s V: Element<I>,
    F: Mapper<<&'s V as Element<I>>::Output>,
{
    type Output = <F as Mapper<<&'s V as Element<I>>::Output>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        <F as Mapper<_>>::call(&self.func, <&'s V as Element<I>>::get(&self.view))
    }
}

impl<'s, V, F, const I: usize> Element<I> for &'s mut TransformView<V, F>
where
    V: StaticRange,
    &'s mut V: Element<I>,
    F: Mapper<<&'s mut V as Element<I>>::Output>,
{
    type Output = <F as Mapper<<&'s mut V as Element<I>>::Output>>::Output;

    #[inline(always)]
    fn get(self) -> Self::Output {
        let TransformView { view, func } = self;
        <F as Mapper<_>>::call(&*func, <&'s mut V as Element<I>>::get(view))
    }
}

impl<V: View, F> View for TransformView<V, F> {}

impl<V: View, F> IntoView for TransformView<V, F> {
    type View = Self;

    #[inline(always)]
    fn into_view(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element;
    use crate::views::{ConstView, RefView};

    #[test]
    fn applies_the_function_per_access() {
        let source = (2_u32, 5_u32);
        let squared = TransformView::new(ConstView::new(&source), |x: &u32| x * x);
        assert_eq!(element::<0, _>(&squared), 4);
        assert_eq!(element::<1, _>(&squared), 25);
        assert_eq!(element::<1, _>(squared), 25);
    }

    #[test]
    fn mutable_access_reaches_the_function_as_mut() {
        let mut source = [1, 2];
        let mut bump = TransformView::new(RefView::new(&mut source), |x: &mut i32| {
            *x += 100;
            *x
        });
        assert_eq!(element::<0, _>(&mut bump), 101);
        assert_eq!(element::<0, _>(&mut bump), 201);
        let (inner, _) = bump.into_parts();
        assert_eq!(inner.get_ref(), &[201, 2]);
    }
}

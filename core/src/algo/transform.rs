use crate::func::{BinaryMapper, Mapper};
use crate::protocol::{Cons, Nil};
use crate::{Element, ElementMut, Range, StaticRange};

/// Stores a computed value into a destination slot.
///
/// Implemented for every slot type `T` and any value convertible with
/// `Into<T>`.
#[diagnostic::on_unimplemented(
    message = "cannot assign a value of type `{V}` to a slot of type `{Self}`",
    note = "the function's result must convert into the destination element type with `Into`"
)]
pub trait Assign<V> {
    fn assign(&mut self, value: V);
}

impl<T, V: Into<T>> Assign<V> for T {
    #[inline(always)]
    fn assign(&mut self, value: V) {
        *self = value.into();
    }
}

/// Writes `func(S[I])` into the slot `D[I]` at every index of the list.
pub trait TransformIndices<S, D, F> {
    fn run(src: S, dest: &mut D, func: &F);
}

impl<S, D, F> TransformIndices<S, D, F> for Nil {
    #[inline(always)]
    fn run(_src: S, _dest: &mut D, _func: &F) {}
}

impl<S, D, F, const I: usize, Rest> TransformIndices<S, D, F> for Cons<I, Rest>
where
    S: Element<I> + Clone,
    F: Mapper<<S as Element<I>>::Output>,
    D: ElementMut<I>,
    <D as ElementMut<I>>::Target: Assign<<F as Mapper<<S as Element<I>>::Output>>::Output>,
    Rest: TransformIndices<S, D, F>,
{
    #[inline(always)]
    fn run(src: S, dest: &mut D, func: &F) {
        let value = <F as Mapper<_>>::call(func, <S as Element<I>>::get(src.clone()));
        Assign::assign(<D as ElementMut<I>>::element_mut(dest), value);
        Rest::run(src, dest, func);
    }
}

/// Writes `func(A[I], B[I])` into the slot `D[I]` at every index of the list.
pub trait Transform2Indices<A, B, D, F> {
    fn run(left: A, right: B, dest: &mut D, func: &F);
}

impl<A, B, D, F> Transform2Indices<A, B, D, F> for Nil {
    #[inline(always)]
    fn run(_left: A, _right: B, _dest: &mut D, _func: &F) {}
}

impl<A, B, D, F, const I: usize, Rest> Transform2Indices<A, B, D, F> for Cons<I, Rest>
where
    A: Element<I> + Clone,
    B: Element<I> + Clone,
    F: BinaryMapper<<A as Element<I>>::Output, <B as Element<I>>::Output>,
    D: ElementMut<I>,
    <D as ElementMut<I>>::Target:
        Assign<<F as BinaryMapper<<A as Element<I>>::Output, <B as Element<I>>::Output>>::Output>,
    Rest: Transform2Indices<A, B, D, F>,
{
    #[inline(always)]
    fn run(left: A, right: B, dest: &mut D, func: &F) {
        let value = <F as BinaryMapper<_, _>>::call(
            func,
            <A as Element<I>>::get(left.clone()),
            <B as Element<I>>::get(right.clone()),
        );
        Assign::assign(<D as ElementMut<I>>::element_mut(dest), value);
        Rest::run(left, right, dest, func);
    }
}

/// Sets `dest[I] = func(src[I]).into()` for every index.
///
/// Like [`copy`](super::copy), `src` is taken by value and cloned per index,
/// so pass `&range` to hand `func` references.
///
/// ```
/// use static_ranges_core::algo::transform;
///
/// let celsius = [0.0, 100.0];
/// let mut fahrenheit = [0.0_f64; 2];
/// transform(&celsius, &mut fahrenheit, |c: &f64| c * 9.0 / 5.0 + 32.0);
/// assert_eq!(fahrenheit, [32.0, 212.0]);
/// ```
pub fn transform<S, D, F>(src: S, dest: &mut D, func: F)
where
    S: StaticRange,
    D: Range<Indices = S::Indices>,
    S::Indices: TransformIndices<S, D, F>,
{
    tracing::trace!(arity = S::SIZE, "transform");
    <S::Indices as TransformIndices<S, D, F>>::run(src, dest, &func);
}

/// Sets `dest[I] = func(left[I], right[I]).into()` for every index.
///
/// ```
/// use static_ranges_core::algo::transform2;
///
/// let mut sums = [0_u32; 3];
/// transform2(&[1, 2, 3], &[10, 20, 30], &mut sums, |a: &u32, b: &u32| a + b);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
///
/// All three ranges must have the same arity; a right-hand side one element
/// short is rejected:
///
/// ```compile_fail
/// use static_ranges_core::algo::transform2;
///
/// let mut sums = [0_u32; 3];
/// transform2(&[1, 2, 3], &[10, 20], &mut sums, |a: &u32, b: &u32| a + b);
/// ```
pub fn transform2<A, B, D, F>(left: A, right: B, dest: &mut D, func: F)
where
    A: StaticRange,
    B: StaticRange<Indices = A::Indices>,
    D: Range<Indices = A::Indices>,
    A::Indices: Transform2Indices<A, B, D, F>,
{
    tracing::trace!(arity = A::SIZE, "transform2");
    <A::Indices as Transform2Indices<A, B, D, F>>::run(left, right, dest, &func);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::Identity;
    use crate::test_utils::init_test_logging;
    use crate::views::{Constant, static_iota, transform as lazy};

    /// Formats numbers and quotes strings.
    struct Describe;

    impl Mapper<&u8> for Describe {
        type Output = String;

        fn call(&self, value: &u8) -> String {
            format!("#{value}")
        }
    }

    impl Mapper<&&str> for Describe {
        type Output = String;

        fn call(&self, value: &&str) -> String {
            format!("'{value}'")
        }
    }

    #[test]
    fn writes_mapped_values_per_type() {
        init_test_logging();
        let src = (7_u8, "seven");
        let mut dest = (String::new(), String::new());
        transform(&src, &mut dest, Describe);
        assert_eq!(dest, (String::from("#7"), String::from("'seven'")));
    }

    #[test]
    fn results_are_converted_into_the_slot_type() {
        let src = [1_u8, 2, 3];
        let mut dest = [0_u64; 3];
        transform(&src, &mut dest, |x: &u8| *x * 2);
        assert_eq!(dest, [2, 4, 6]);
    }

    #[test]
    fn identity_widens_out_of_a_lazy_view() {
        let base = [1_i32, 2];
        let doubled = &base | lazy(|x: &i32| x * 2);
        let mut dest = [0_i64; 2];
        transform(&doubled, &mut dest, Identity);
        assert_eq!(dest, [2, 4]);
    }

    /// Reads a compile-time index back as a value.
    struct Value;

    impl<const I: usize> Mapper<Constant<usize, I>> for Value {
        type Output = usize;

        fn call(&self, constant: Constant<usize, I>) -> usize {
            constant.get()
        }
    }

    #[test]
    fn static_iota_as_source() {
        let mut dest = [9_usize; 3];
        transform(&static_iota::<usize, 3>(), &mut dest, Value);
        assert_eq!(dest, [0, 1, 2]);
    }
}

use crate::protocol::{Cons, Nil};
use crate::{Element, ElementMut, Range, StaticRange};

/// Stores a source element into a destination slot.
///
/// An owned `T` is moved into the slot; a borrowed `&T` is cloned into it.
#[diagnostic::on_unimplemented(
    message = "cannot copy an element of type `{V}` into a slot of type `{Self}`",
    note = "the source element must have the slot's type, or be a reference to it when the type is `Clone`"
)]
pub trait CopyFrom<V> {
    fn copy_from(&mut self, value: V);
}

impl<T> CopyFrom<T> for T {
    #[inline(always)]
    fn copy_from(&mut self, value: T) {
        *self = value;
    }
}

impl<T: Clone> CopyFrom<&T> for T {
    #[inline(always)]
    fn copy_from(&mut self, value: &T) {
        self.clone_from(value);
    }
}

/// Copies `S` into the slots of `D` at every index of the list.
pub trait CopyIndices<S, D> {
    fn run(src: S, dest: &mut D);
}

impl<S, D> CopyIndices<S, D> for Nil {
    #[inline(always)]
    fn run(_src: S, _dest: &mut D) {}
}

impl<S, D, const I: usize, Rest> CopyIndices<S, D> for Cons<I, Rest>
where
    S: Element<I> + Clone,
    D: ElementMut<I>,
    <D as ElementMut<I>>::Target: CopyFrom<<S as Element<I>>::Output>,
    Rest: CopyIndices<S, D>,
{
    #[inline(always)]
    fn run(src: S, dest: &mut D) {
        let value = <S as Element<I>>::get(src.clone());
        CopyFrom::copy_from(<D as ElementMut<I>>::element_mut(dest), value);
        Rest::run(src, dest);
    }
}

/// Assigns every element of `src` to the slot of `dest` at the same index.
///
/// `src` is taken by value and cloned once per index, which costs nothing
/// for `&range` and for views. Borrowed elements are cloned into `dest`;
/// owned ones, such as the outputs of a transform view, are moved.
///
/// ```
/// use static_ranges_core::algo::copy;
/// use static_ranges_core::views::{all, transform};
///
/// let src = (42, 3.14, "text");
/// let mut dest: (i32, f64, &str) = Default::default();
/// copy(&src, &mut dest);
/// assert_eq!(dest, (42, 3.14, "text"));
///
/// let base = [1, 2, 3];
/// let mut squares = [0; 3];
/// copy(all(&base) | transform(|x: &i32| x * x), &mut squares);
/// assert_eq!(squares, [1, 4, 9]);
/// ```
///
/// Both ranges must have the same arity. With three elements on each side
/// this compiles:
///
/// ```
/// use static_ranges_core::algo::copy;
///
/// let mut dest = [0; 3];
/// copy(&[1, 2, 3], &mut dest);
/// ```
///
/// and with two on one side it does not:
///
/// ```compile_fail
/// use static_ranges_core::algo::copy;
///
/// let mut dest = [0; 3];
/// copy(&[1, 2], &mut dest);
/// ```
pub fn copy<S, D>(src: S, dest: &mut D)
where
    S: StaticRange,
    D: Range<Indices = S::Indices>,
    S::Indices: CopyIndices<S, D>,
{
    tracing::trace!(arity = S::SIZE, "copy");
    <S::Indices as CopyIndices<S, D>>::run(src, dest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{all, iota, materialize, transform};

    #[test]
    fn clones_heterogeneous_elements() {
        let src = (String::from("owned"), 7_u64, vec![1_u8, 2]);
        let mut dest = (String::new(), 0_u64, Vec::new());
        copy(&src, &mut dest);
        assert_eq!(dest, src);
    }

    #[test]
    fn source_view_into_array() {
        let src = iota::<u16, 4>();
        let mut dest = [9_u16; 4];
        copy(&src, &mut dest);
        assert_eq!(dest, [0, 1, 2, 3]);
    }

    #[test]
    fn destination_view_writes_through() {
        let src = ['a', 'b'];
        let mut target = ['x', 'y'];
        copy(&src, &mut all(&mut target));
        assert_eq!(target, src);
    }

    #[test]
    fn moves_out_of_an_owned_source() {
        let mut dest = (String::new(), 0_u8);
        copy(materialize((String::from("moved"), 3_u8)), &mut dest);
        assert_eq!(dest, (String::from("moved"), 3));
    }

    #[test]
    fn materializes_a_lazy_chain() {
        let base = [1_i32, 2, 3];
        let tens = all(&base) | transform(|x: &i32| x * 10);

        let mut by_ref = [0_i32; 3];
        copy(&tens, &mut by_ref);
        assert_eq!(by_ref, [10, 20, 30]);

        let mut by_value = [0_i32; 3];
        copy(tens, &mut by_value);
        assert_eq!(by_value, [10, 20, 30]);
    }
}

//! Descriptors for tuples `()` through 12-tuples.

use super::{Arity, Element, ElementMut, Sequence, StaticRange};
use crate::macros::for_tuples;

/// Largest tuple arity with a built-in descriptor.
pub const MAX_TUPLE_ARITY: usize = 12;

macro_rules! tuple_range {
    ($len:literal; $($idx:tt : $T:ident),*) => {
        impl<$($T),*> StaticRange for ($($T,)*) {
            const SIZE: usize = $len;
            type Indices = <Arity<$len> as Sequence>::Indices;
        }

        tuple_range!(@elements [$($T),*] $($idx : $T),*);
    };

    (@elements $all:tt $($idx:tt : $T:ident),*) => {
        $( tuple_range!(@element $all $idx : $T); )*
    };

    (@element [$($All:ident),*] $idx:tt : $T:ident) => {
        impl<$($All),*> Element<$idx> for ($($All,)*) {
            type Output = $T;

            #[inline(always)]
            fn get(self) -> $T {
                self.$idx
            }
        }

        impl<'a, $($All),*> Element<$idx> for &'a ($($All,)*) {
            type Output = &'a $T;

            #[inline(always)]
            fn get(self) -> &'a $T {
                &self.$idx
            }
        }

        impl<'a, $($All),*> Element<$idx> for &'a mut ($($All,)*) {
            type Output = &'a mut $T;

            #[inline(always)]
            fn get(self) -> &'a mut $T {
                &mut self.$idx
            }
        }

        impl<$($All),*> ElementMut<$idx> for ($($All,)*) {
            type Target = $T;

            #[inline(always)]
            fn element_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }
    };
}

for_tuples!(tuple_range);

static_assertions::const_assert_eq!(
    <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as StaticRange>::SIZE,
    MAX_TUPLE_ARITY
);

#[cfg(test)]
mod tests {
    use crate::protocol::element;

    #[test]
    fn unit_has_no_elements() {
        assert_eq!(<() as super::StaticRange>::SIZE, 0);
    }

    #[test]
    fn owned_access_moves_the_element_out() {
        let pair = (String::from("left"), 7_u8);
        let left: String = element::<0, _>(pair);
        assert_eq!(left, "left");
    }

    #[test]
    fn mutable_access_writes_in_place() {
        let mut triple = (1_i32, 'x', 2.0_f32);
        *element::<1, _>(&mut triple) = 'y';
        *element::<2, _>(&mut triple) *= 4.0;
        assert_eq!(triple, (1, 'y', 8.0));
    }

    #[test]
    fn twelve_tuple_last_index() {
        let t = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, "eleven");
        assert_eq!(*element::<11, _>(&t), "eleven");
    }
}

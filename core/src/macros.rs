//! Declarative macros shared by the protocol, the views and downstream crates.

/// Expands to the type-level index list for the given indices.
///
/// `index_list!(0 1 2)` is `Cons<0, Cons<1, Cons<2, Nil>>>`, the same type as
/// `<Arity<3> as Sequence>::Indices`. Macros that generate per-arity impls use
/// it where a projection is not allowed, such as the self type of an impl.
///
/// ```
/// use static_ranges_core::{index_list, protocol::{Arity, IndexList, Sequence}};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(index_list!(0 1 2), <Arity<3> as Sequence>::Indices);
/// assert_eq!(<index_list!(0 1 2) as IndexList>::LEN, 3);
/// ```
#[macro_export]
macro_rules! index_list {
    () => { $crate::protocol::Nil };
    ($head:tt $($tail:tt)*) => {
        $crate::protocol::Cons<$head, $crate::index_list!($($tail)*)>
    };
}

/// Implements the range protocol for a struct with named fields.
///
/// Fields are listed with their index, in ascending order starting at zero.
/// The macro generates [`StaticRange`](crate::StaticRange), the three
/// [`Element`](crate::Element) accessors per field (owned, `&` and `&mut`),
/// an [`ElementMut`](crate::ElementMut) slot per field, and `|` for `&T` and
/// `&mut T` so the aggregate can start a transform chain.
///
/// ```
/// use static_ranges_core::{element, size_of, static_range, views::transform};
///
/// struct Reading {
///     sensor: &'static str,
///     celsius: f64,
/// }
///
/// static_range!(Reading {
///     0 => sensor: &'static str,
///     1 => celsius: f64,
/// });
///
/// let mut reading = Reading { sensor: "probe", celsius: 24.5 };
/// assert_eq!(size_of(&reading), 2);
///
/// *element::<1, _>(&mut reading) += 0.5;
/// let fahrenheit = &reading | transform(|c: &f64| c * 9.0 / 5.0 + 32.0);
/// assert_eq!(element::<1, _>(&fahrenheit), 77.0);
/// assert_eq!(*element::<0, _>(&reading), "probe");
/// ```
///
/// Only non-generic structs with named fields are accepted. Generic structs
/// and tuple structs implement the same traits by hand. The read-only
/// accessors and the slots are enough for a bulk operator destination:
///
/// ```
/// use static_ranges_core::{Element, ElementMut, StaticRange, algo::copy, element, index_list};
///
/// struct Pair<T>(T, T);
///
/// impl<T> StaticRange for Pair<T> {
///     const SIZE: usize = 2;
///     type Indices = index_list!(0 1);
/// }
///
/// impl<'a, T> Element<0> for &'a Pair<T> {
///     type Output = &'a T;
///
///     fn get(self) -> &'a T {
///         &self.0
///     }
/// }
///
/// impl<'a, T> Element<1> for &'a Pair<T> {
///     type Output = &'a T;
///
///     fn get(self) -> &'a T {
///         &self.1
///     }
/// }
///
/// impl<T> ElementMut<0> for Pair<T> {
///     type Target = T;
///
///     fn element_mut(&mut self) -> &mut T {
///         &mut self.0
///     }
/// }
///
/// impl<T> ElementMut<1> for Pair<T> {
///     type Target = T;
///
///     fn element_mut(&mut self) -> &mut T {
///         &mut self.1
///     }
/// }
///
/// let mut pair = Pair(0_u8, 0_u8);
/// copy(&[4_u8, 2], &mut pair);
/// assert_eq!(*element::<0, _>(&pair), 4);
/// assert_eq!(*element::<1, _>(&pair), 2);
/// ```
///
/// Indices must be listed in order:
///
/// ```compile_fail
/// use static_ranges_core::static_range;
///
/// struct Swapped {
///     a: i32,
///     b: i32,
/// }
///
/// static_range!(Swapped { 1 => a: i32, 0 => b: i32 });
/// ```
#[macro_export]
macro_rules! static_range {
    ($ty:ty { $($idx:tt => $field:ident : $fty:ty),* $(,)? }) => {
        const _: () = {
            let listed: &[usize] = &[$($idx),*];
            let mut position = 0;
            while position < listed.len() {
                assert!(
                    listed[position] == position,
                    "static_range! fields must be listed with indices 0, 1, 2, ... in order"
                );
                position += 1;
            }
        };

        impl $crate::StaticRange for $ty {
            const SIZE: usize = <$crate::index_list!($($idx)*) as $crate::protocol::IndexList>::LEN;
            type Indices = $crate::index_list!($($idx)*);
        }

        $(
            impl $crate::Element<$idx> for $ty {
                type Output = $fty;

                #[inline(always)]
                fn get(self) -> $fty {
                    self.$field
                }
            }

            impl<'a> $crate::Element<$idx> for &'a $ty {
                type Output = &'a $fty;

                #[inline(always)]
                fn get(self) -> &'a $fty {
                    &self.$field
                }
            }

            impl<'a> $crate::Element<$idx> for &'a mut $ty {
                type Output = &'a mut $fty;

                #[inline(always)]
                fn get(self) -> &'a mut $fty {
                    &mut self.$field
                }
            }
        )*

        impl<'a, F> ::core::ops::BitOr<$crate::views::TransformClosure<F>> for &'a $ty {
            type Output = $crate::views::TransformView<$crate::views::ConstView<'a, $ty>, F>;

            fn bitor(self, closure: $crate::views::TransformClosure<F>) -> Self::Output {
                closure.apply(self)
            }
        }

        impl<'a, F> ::core::ops::BitOr<$crate::views::TransformClosure<F>> for &'a mut $ty {
            type Output = $crate::views::TransformView<$crate::views::RefView<'a, $ty>, F>;

            fn bitor(self, closure: $crate::views::TransformClosure<F>) -> Self::Output {
                closure.apply(self)
            }
        }
    };
}

/// Invokes `$m!(arity; index: TypeParam, ...)` once per supported tuple arity.
macro_rules! for_tuples {
    ($m:ident) => {
        $m!(0;);
        $m!(1; 0: T0);
        $m!(2; 0: T0, 1: T1);
        $m!(3; 0: T0, 1: T1, 2: T2);
        $m!(4; 0: T0, 1: T1, 2: T2, 3: T3);
        $m!(5; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
        $m!(6; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
        $m!(7; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6);
        $m!(8; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7);
        $m!(9; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8);
        $m!(10; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9);
        $m!(11; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10);
        $m!(12; 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8, 9: T9, 10: T10, 11: T11);
    };
}

pub(crate) use for_tuples;

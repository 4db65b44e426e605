//! Integration tests for views and lazy composition.
//!
//! These go through the public API only: element access, `all`, the pipe
//! operator and the sequence views.

use core::cell::Cell;

use pretty_assertions::assert_eq;
use static_assertions::assert_type_eq_all;
use static_ranges_core::views::{
    ConstView, Constant, IntoView, RefView, TransformView, all, iota, static_iota, transform,
    transform_range,
};
use static_ranges_core::{element, size_of, static_range};

type Triple = (i32, f64, &'static str);

assert_type_eq_all!(
    <<&'static mut Triple as IntoView>::View as IntoView>::View,
    RefView<'static, Triple>
);
assert_type_eq_all!(
    <<&'static Triple as IntoView>::View as IntoView>::View,
    ConstView<'static, Triple>
);

#[test]
fn test_element_matches_the_underlying_slot() {
    let triple: Triple = (42, 2.5, "text");
    assert_eq!(*element::<0, _>(&triple), triple.0);
    assert_eq!(*element::<1, _>(&triple), triple.1);
    assert_eq!(*element::<2, _>(&triple), triple.2);

    let array = [5_u8, 6, 7, 8];
    assert_eq!(*element::<3, _>(&array), array[3]);
    assert_eq!(size_of(&triple), 3);
    assert_eq!(size_of(&array), 4);
}

#[test]
fn test_all_is_idempotent() {
    let mut triple: Triple = (1, 2.0, "three");
    let once = all(&mut triple);
    let twice = all(all(once));
    assert_eq!(size_of(&twice), 3);
    assert_eq!(*element::<2, _>(&twice), "three");

    let shared = all(&triple);
    let again = all(shared);
    assert_eq!(*element::<0, _>(&shared), *element::<0, _>(&again));
}

#[test]
fn test_mutation_through_ref_view_is_visible() {
    let mut triple: Triple = (0, 0.0, "");
    {
        let mut view = all(&mut triple);
        *element::<0, _>(&mut view) = 7;
        *element::<1, _>(&mut view) = 1.5;
        *element::<2, _>(&mut view) = "set";
    }
    assert_eq!(triple, (7, 1.5, "set"));
}

#[test]
fn test_transforms_are_lazy_and_never_memoized() {
    let calls = [Cell::new(0), Cell::new(0), Cell::new(0)];
    let source = [String::from("x")];

    let view = &source
        | transform(|s: &String| {
            calls[0].set(calls[0].get() + 1);
            s.clone()
        })
        | transform(|s: String| {
            calls[1].set(calls[1].get() + 1);
            s
        })
        | transform(|s: String| {
            calls[2].set(calls[2].get() + 1);
            s
        });

    let counts = || calls.iter().map(Cell::get).collect::<Vec<_>>();
    assert_eq!(counts(), [0, 0, 0]);

    assert_eq!(element::<0, _>(&view), "x");
    assert_eq!(counts(), [1, 1, 1]);

    assert_eq!(element::<0, _>(&view), "x");
    assert_eq!(counts(), [2, 2, 2]);
}

#[test]
fn test_chain_applies_innermost_first() {
    let source = (String::from("s"), String::from("t"));
    let view = &source
        | transform(|s: &String| s.clone() + "1")
        | transform(|s: String| s + "2")
        | transform(|s: String| s + "3");
    assert_eq!(element::<0, _>(&view), "s123");
    assert_eq!(element::<1, _>(&view), "t123");
}

#[test]
fn test_transform_view_forwards_arity() {
    let source = [0_u8; 7];
    let view: TransformView<ConstView<'_, [u8; 7]>, _> =
        transform_range(&source, |x: &u8| u32::from(*x));
    assert_eq!(size_of(&view), 7);
    assert_eq!(size_of(&(view | transform(|x: u32| x + 1))), 7);
}

#[test]
fn test_iota_and_static_iota() {
    let numbers = iota::<i32, 5>();
    assert_eq!(numbers.get_ref(), &[0, 1, 2, 3, 4]);

    let constants = static_iota::<i32, 5>();
    let two: Constant<i32, 2> = element::<2, _>(&constants);
    assert_eq!(two.get(), 2);
    assert_eq!(Constant::<i32, 2>::VALUE, 2);
    assert_eq!(size_of(&constants), 5);
}

/// An aggregate from outside the crate, joined to the protocol by macro.
#[derive(Debug, PartialEq)]
struct Point {
    x: i64,
    y: i64,
    label: String,
}

static_range!(Point {
    0 => x: i64,
    1 => y: i64,
    2 => label: String,
});

#[test]
fn test_user_aggregate_takes_part() {
    let mut point = Point {
        x: 3,
        y: -4,
        label: String::from("p"),
    };
    assert_eq!(size_of(&point), 3);

    element::<2, _>(&mut all(&mut point)).push('!');
    assert_eq!(point.label, "p!");

    let negated = &point | transform(|v: &i64| -v);
    assert_eq!(element::<0, _>(&negated), -3);
    assert_eq!(element::<1, _>(&negated), 4);

    assert_eq!(element::<2, _>(point), "p!");
}

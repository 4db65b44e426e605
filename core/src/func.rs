//! Function protocols for per-element work.
//!
//! Rust closures have a single argument type, but the elements of a static
//! range usually don't. These traits let a transform or visitor be one value
//! with several impls, one per element type it accepts. Every matching closure
//! implements them too, which covers the homogeneous case:
//!
//! ```
//! use static_ranges_core::{element, func::Mapper, views::transform};
//!
//! /// Doubles numbers and repeats strings.
//! struct Twice;
//!
//! impl Mapper<&i32> for Twice {
//!     type Output = i32;
//!     fn call(&self, x: &i32) -> i32 {
//!         x * 2
//!     }
//! }
//!
//! impl Mapper<&&str> for Twice {
//!     type Output = String;
//!     fn call(&self, s: &&str) -> String {
//!         s.repeat(2)
//!     }
//! }
//!
//! let row = (21_i32, "ab");
//! let doubled = &row | transform(Twice);
//! assert_eq!(element::<0, _>(&doubled), 42);
//! assert_eq!(element::<1, _>(&doubled), "abab");
//! ```
//!
//! Closures passed to these traits need annotated parameter types
//! (`|x: &i32| ...`); the compiler cannot infer them through a trait bound.

/// A pure function of one element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to an element of type `{T}`",
    note = "closures need annotated parameter types; for mixed element types implement `Mapper<T>` once per type"
)]
pub trait Mapper<T> {
    type Output;

    fn call(&self, arg: T) -> Self::Output;
}

impl<F, T, U> Mapper<T> for F
where
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline(always)]
    fn call(&self, arg: T) -> U {
        self(arg)
    }
}

/// A pure function of two elements taken at the same index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be applied to elements of type `{A}` and `{B}`"
)]
pub trait BinaryMapper<A, B> {
    type Output;

    fn call(&self, left: A, right: B) -> Self::Output;
}

impl<F, A, B, U> BinaryMapper<A, B> for F
where
    F: Fn(A, B) -> U,
{
    type Output = U;

    #[inline(always)]
    fn call(&self, left: A, right: B) -> U {
        self(left, right)
    }
}

/// A side-effecting callback invoked on each element in ascending order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot visit an element of type `{T}`"
)]
pub trait Visitor<T> {
    fn visit(&mut self, item: T);
}

impl<F, T> Visitor<T> for F
where
    F: FnMut(T),
{
    #[inline(always)]
    fn visit(&mut self, item: T) {
        self(item)
    }
}

/// Returns its argument unchanged, whatever the element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Mapper<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn call(&self, arg: T) -> T {
        arg
    }
}

/// `first`, then `second` on its result.
///
/// Built by [`TransformClosure::then`](crate::views::TransformClosure::then).
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<F, G> {
    first: F,
    second: G,
}

impl<F, G> Chain<F, G> {
    pub const fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<T, F, G> Mapper<T> for Chain<F, G>
where
    F: Mapper<T>,
    G: Mapper<F::Output>,
{
    type Output = G::Output;

    #[inline(always)]
    fn call(&self, arg: T) -> G::Output {
        <G as Mapper<F::Output>>::call(&self.second, <F as Mapper<T>>::call(&self.first, arg))
    }
}

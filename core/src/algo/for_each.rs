use crate::func::Visitor;
use crate::protocol::{Cons, Nil};
use crate::{Element, Range};

/// Visits `&mut R` at every index of the list.
pub trait ForEachIndices<R, F> {
    fn run(range: &mut R, func: &mut F);
}

impl<R, F> ForEachIndices<R, F> for Nil {
    #[inline(always)]
    fn run(_range: &mut R, _func: &mut F) {}
}

impl<R, F, const I: usize, Rest> ForEachIndices<R, F> for Cons<I, Rest>
where
    for<'a> &'a mut R: Element<I>,
    F: for<'a> Visitor<<&'a mut R as Element<I>>::Output>,
    Rest: ForEachIndices<R, F>,
{
    #[inline(always)]
    fn run(range: &mut R, func: &mut F) {
        func.visit(<&mut R as Element<I>>::get(&mut *range));
        Rest::run(range, func);
    }
}

/// Visits `&'s R` at every index of the list.
pub trait ForEachRefIndices<'s, R, F> {
    fn run(range: &'s R, func: &mut F);
}

impl<'s, R, F> ForEachRefIndices<'s, R, F> for Nil {
    #[inline(always)]
    fn run(_range: &'s R, _func: &mut F) {}
}

impl<'s, R, F, const I: usize, Rest> ForEachRefIndices<'s, R, F> for Cons<I, Rest>
where
    R: 's,
    &'s R: Element<I>,
    F: Visitor<<&'s R as Element<I>>::Output>,
    Rest: ForEachRefIndices<'s, R, F>,
{
    #[inline(always)]
    fn run(range: &'s R, func: &mut F) {
        func.visit(<&'s R as Element<I>>::get(range));
        Rest::run(range, func);
    }
}

/// Calls `func` with a mutable reference to every element, in index order,
/// and hands `func` back so state it collected can be read.
///
/// ```
/// use static_ranges_core::algo::for_each;
///
/// let mut scores = [3_u32, 5, 8];
/// for_each(&mut scores, |s: &mut u32| *s *= 10);
/// assert_eq!(scores, [30, 50, 80]);
/// ```
pub fn for_each<R, F>(range: &mut R, mut func: F) -> F
where
    R: Range,
    R::Indices: ForEachIndices<R, F>,
{
    tracing::trace!(arity = R::SIZE, "for_each");
    <R::Indices as ForEachIndices<R, F>>::run(range, &mut func);
    func
}

/// Read-only [`for_each`].
pub fn for_each_ref<'s, R, F>(range: &'s R, mut func: F) -> F
where
    R: Range,
    R::Indices: ForEachRefIndices<'s, R, F>,
{
    tracing::trace!(arity = R::SIZE, "for_each_ref");
    <R::Indices as ForEachRefIndices<'s, R, F>>::run(range, &mut func);
    func
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use crate::views::all;

    /// Renders every element it sees.
    #[derive(Default)]
    struct Collect(Vec<String>);

    impl Visitor<&i32> for Collect {
        fn visit(&mut self, item: &i32) {
            self.0.push(format!("int {item}"));
        }
    }

    impl Visitor<&&str> for Collect {
        fn visit(&mut self, item: &&str) {
            self.0.push(format!("str {item}"));
        }
    }

    impl Visitor<&mut i32> for Collect {
        fn visit(&mut self, item: &mut i32) {
            *item += 1;
            self.0.push(format!("bumped {item}"));
        }
    }

    impl Visitor<&mut &str> for Collect {
        fn visit(&mut self, item: &mut &str) {
            *item = "replaced";
            self.0.push(String::from("replaced"));
        }
    }

    #[test]
    fn visits_heterogeneous_elements_in_order() {
        init_test_logging();
        let row = (1_i32, "two", 3_i32);
        let seen = for_each_ref(&row, Collect::default());
        assert_eq!(seen.0, ["int 1", "str two", "int 3"]);
    }

    #[test]
    fn mutations_are_visible_to_the_caller() {
        let mut row = (1_i32, "two");
        let seen = for_each(&mut row, Collect::default());
        assert_eq!(row, (2, "replaced"));
        assert_eq!(seen.0, ["bumped 2", "replaced"]);
    }

    #[test]
    fn empty_range_never_calls() {
        let mut calls = 0;
        for_each(&mut (), |_: &mut u8| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn works_through_views() {
        let mut values = [1, 2, 3];
        for_each(&mut all(&mut values), |x: &mut i32| *x = -*x);
        assert_eq!(values, [-1, -2, -3]);
    }
}

//! Priority relations for heap ordering.
//!
//! A heap never looks at its items except through a [`Compare`]
//! implementation. The relation answers one question: should `a` sit at or
//! above `b`? Returning `true` for `a <= b` gives a min-heap, `a >= b` a
//! max-heap.
//!
//! The relation must be consistent (transitive) for the heap order to mean
//! anything, but it does not have to be strict. Equal items are allowed and
//! come out in an unspecified relative order.

/// "At least as prioritized" relation over heap items.
///
/// Implemented for any `Fn(&T, &T) -> bool`, so closures and plain functions
/// can be passed directly:
///
/// ```
/// use nexus_pqueue::{Compare, MinFirst};
///
/// let by_len = |a: &&str, b: &&str| a.len() <= b.len();
/// assert!(by_len.precedes(&"ab", &"abc"));
///
/// assert!(MinFirst.precedes(&1, &2));
/// assert!(MinFirst.precedes(&2, &2));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is at least as prioritized as `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest item first (`a <= b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Largest item first (`a >= b`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

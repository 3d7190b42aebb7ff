//! Defines comparators for [`Merged`](crate::Merged)
//!
//! The comparator decides both the merge order and what "sorted" means for the inputs: an input
//! is rejected when one of its elements compares [`Less`](Ordering::Less) than the element before
//! it.
//!
//! Users of this crate may implement [`Comparator`] to create a custom comparator, or use the
//! builder methods [`with_cmp`](crate::Merged::with_cmp), [`by_key`](crate::Merged::by_key) and
//! [`descending`](crate::Merged::descending), which construct the types defined here.
//!
//! Ties between inputs are resolved separately, see [`tie_breaker`].

use core::cmp::Ordering;

pub mod tie_breaker;

/// Trait used to compare elements of a merge
///
/// Implementations should produce a consistent total ordering, see [`Ord`]
/// documentation for details.
///
/// Producing non-total or inconsistent ordering may result in incorrect behavior
/// (i.e. items are yielded in a wrong order or inputs are wrongly reported as unsorted),
/// but will not panic.
///
/// Every input stream holds its own copy of the comparator, so it has to be [`Clone`].
pub trait Comparator<T>: Clone {
    /// Compares two elements and returns an [`Ordering`]
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Wrapper that reverses a comparator.
///
/// Our internal data structures are all min-first, so to get
/// max-first we're just inverting the order of operands passed to
/// comparators. Inputs are then expected to be non-increasing.
#[derive(Debug, Clone, Copy)]
pub struct MaxFirst<C>(pub(crate) C);

impl<T, C> Comparator<T> for MaxFirst<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Comparator that uses [`Ord`] to compare items, default for the [`Merged`](crate::Merged).
///
/// # Example
/// Max-first merge:
///
/// ```
/// use sorted_merge::{Merged, comparators::ByOrd};
///
/// let res = Merged::new([vec![3, 2], vec![4, 1]])
///     .with_comparator(ByOrd)
///     .descending()
///     .build()?
///     .try_into_vec()?;
/// assert_eq!(res, vec![4, 3, 2, 1]);
/// # Ok::<(), sorted_merge::MergeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrd;

impl<T: Ord> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that uses a function to compare items
///
/// Construct via [`with_cmp`](crate::Merged::with_cmp)
#[derive(Debug, Clone)]
pub struct ByFunc<F>(pub(crate) F);

impl<T, F> Comparator<T> for ByFunc<F>
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that uses a key to compare items
///
/// Construct via [`by_key`](crate::Merged::by_key)
#[derive(Debug, Clone)]
pub struct ByKey<F>(pub(crate) F);

impl<T, F, K> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K + Clone,
    K: Ord,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}

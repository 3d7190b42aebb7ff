//! Decide which input goes first when the heads of several inputs compare equal.
//!
//! Tie breakers compare the indexes of the inputs (their position in the collection passed to
//! [`Merged::new`](crate::Merged::new)). Indexes are unique, so the combined key
//! `(element, input index)` never has two equal entries and the merge order is fully
//! deterministic.
//!
//! [`InsertionOrder`] is the default and makes the merge stable: equal elements come out in
//! the order of their inputs, and within one input in their original order.

use core::cmp::Ordering;

/// Orders inputs whose current elements are equal.
pub trait TieBreaker {
    /// Compares two distinct input indexes
    fn compare(&self, a: usize, b: usize) -> Ordering;
}

impl<TB: TieBreaker> TieBreaker for &TB {
    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        TB::compare(self, a, b)
    }
}

/// If two items are equal the item from the earlier input will be yielded first
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrder;

impl TieBreaker for InsertionOrder {
    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        a.cmp(&b)
    }
}

/// If two items are equal the item from the later input will be yielded first
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseInsertionOrder;

impl TieBreaker for ReverseInsertionOrder {
    #[inline]
    fn compare(&self, a: usize, b: usize) -> Ordering {
        b.cmp(&a)
    }
}

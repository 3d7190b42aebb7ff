use stackvector::{Array, StackVec};

use super::{Sealed, Storage};

impl<A: Array> Sealed for StackVec<A> {}

/// Fixed-capacity storage; pushing past the capacity panics, so callers check `capacity` first.
impl<T, A: Array<Item = T>> Storage for StackVec<A> {
    type Item = T;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn push(&mut self, value: Self::Item) {
        Self::push(self, value);
    }
    #[inline(always)]
    fn swap_remove(&mut self, index: usize) -> Self::Item {
        Self::swap_remove(self, index)
    }
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self[..].swap(a, b);
    }
    #[inline(always)]
    fn len(&self) -> usize {
        Self::len(self)
    }
    #[inline(always)]
    fn get(&self, index: usize) -> &Self::Item {
        &self[index]
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> &mut Self::Item {
        &mut self[index]
    }
    #[inline(always)]
    fn capacity(&self) -> Option<usize> {
        Some(Self::capacity(self))
    }
    #[inline(always)]
    fn reserve_for<I: Iterator>(&mut self, _iter: &I) {
        // StackVec is fixed capacity, so we don't need to reserve
    }
}

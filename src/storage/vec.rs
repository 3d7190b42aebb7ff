use super::{Sealed, Storage};

impl<T> Sealed for Vec<T> {}

impl<T> Storage for Vec<T> {
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
        self.as_mut_slice().swap(a, b);
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
        None
    }
    #[inline(always)]
    fn reserve_for<I: Iterator>(&mut self, iter: &I) {
        Self::reserve(self, iter.size_hint().0);
    }
}

//! Storage backends for the heap of input streams.

#[cfg(not(any(feature = "vec_storage", feature = "stackvec_storage")))]
compile_error!(
    "At least one storage feature must be enabled ('vec_storage' or 'stackvec_storage')"
);

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Sealed storage trait for this crate: a growable, contiguous collection.
///
/// This trait is public only because it appears in the bounds of public types;
/// it can't be implemented outside of this crate.
///
/// The implementer must guarantee that:
/// * `push` adds a single element at the end of the collection
/// * `swap_remove` removes a single element at the given index, replacing it with the last element
/// * `swap` exchanges the elements at two indexes
/// * `len` returns the number of elements in the collection
/// * `get` returns a reference to the element at the given index
/// * `get_mut` returns a mutable reference to the element at the given index
/// * `capacity` is `Some` for fixed-capacity storage, which must not be pushed past it
///
/// Indexes passed by this crate are always `< len`.
#[doc(hidden)]
#[allow(clippy::len_without_is_empty)]
pub trait Storage: Sealed {
    type Item;
    fn new() -> Self;
    fn push(&mut self, value: Self::Item);
    fn swap_remove(&mut self, index: usize) -> Self::Item;
    fn swap(&mut self, a: usize, b: usize);
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> &Self::Item;
    fn get_mut(&mut self, index: usize) -> &mut Self::Item;
    fn capacity(&self) -> Option<usize>;
    /// Rationale for this signature:
    /// We avoid calling `size_hint` for Storage implementations
    /// that have a fixed capacity.
    fn reserve_for<I: Iterator>(&mut self, iter: &I);
}

#[cfg(feature = "vec_storage")]
mod vec;

#[cfg(feature = "stackvec_storage")]
mod stackvec;

/// Marker selecting heap-allocated [`Vec`] storage for the input streams, see
/// [`Merged::new`](crate::Merged::new)
#[cfg(feature = "vec_storage")]
#[derive(Debug, Clone, Copy, Default)]
pub struct VecStorage;

/// Marker selecting fixed-capacity `StackVec` storage for up to `N` non-empty inputs, see
/// [`Merged::new_stackvec`](crate::Merged::new_stackvec)
#[cfg(feature = "stackvec_storage")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StackVecStorage<const N: usize>;

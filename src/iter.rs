use core::iter::FusedIterator;

use crate::{
    comparators::{tie_breaker::InsertionOrder, tie_breaker::TieBreaker, ByOrd, Comparator},
    storage::Storage,
    GuardedIter, MergeError, Selector, Source,
};

/// [`MergedIter`] over [`Vec`] storage, as returned by [`merge`](crate::merge)
#[cfg(feature = "vec_storage")]
pub type VecMergedIter<I, C = ByOrd, TB = InsertionOrder> = MergedIter<Vec<GuardedIter<I, C>>, TB>;

/// An iterator that pulls the smallest item from multiple sorted inputs.
///
/// `MergedIter` is created by [`Merged`](crate::Merged). Each call to [`next`](Iterator::next)
/// emits exactly one element, advancing only the input that held it. Items are
/// `Result`s: when an input turns out not to be sorted, the iterator yields a single
/// [`MergeError::UnsortedInput`] and then ends. The iterator can't be restarted; build a new
/// one to merge again.
///
/// # Examples
///
/// ```
/// use sorted_merge::{Merged, MergeError};
///
/// let mut merged = Merged::new([vec![0, 5], vec![3, 1, 2]]).build()?;
///
/// assert_eq!(merged.next(), Some(Ok(0)));
/// assert_eq!(
///     merged.next(),
///     Some(Err(MergeError::UnsortedInput { input: 1, position: 1 }))
/// );
/// assert_eq!(merged.next(), None);
/// # Ok::<(), MergeError>(())
/// ```
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct MergedIter<S, TB>(pub(crate) Selector<S, TB>);

impl<S, TB, I, C> MergedIter<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
    /// Returns a reference to the next item that will be returned by `next()` without
    /// consuming it.
    ///
    /// Returns `None` at the end, and after an error. Peeking doesn't pull from the inputs, so
    /// an unsorted input is only reported by `next()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::merge;
    ///
    /// let mut merged = merge([vec![1, 3, 5], vec![2, 4, 6]])?;
    ///
    /// assert_eq!(merged.peek(), Some(&1));
    /// assert_eq!(merged.next(), Some(Ok(1)));
    /// assert_eq!(merged.peek(), Some(&2));
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    #[inline]
    pub fn peek<'a>(&'a self) -> Option<&'a I::Item>
    where
        GuardedIter<I, C>: 'a,
    {
        self.0.peek()
    }

    /// Returns the next item of the iterator if the element satisfies a predicate.
    ///
    /// This method behaves like [`Peekable::next_if`]: if the peeked element doesn't satisfy
    /// `func` (or there is none), nothing is consumed and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::merge;
    ///
    /// let mut merged = merge([vec![1, 1, 2, 3], vec![1, 4, 5, 6]])?;
    ///
    /// // Consume all 1s
    /// while let Some(item) = merged.next_if(|&x| x == 1) {
    ///     assert_eq!(item, Ok(1));
    /// }
    ///
    /// assert_eq!(merged.next(), Some(Ok(2)));
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    ///
    /// [`Peekable::next_if`]: core::iter::Peekable::next_if
    pub fn next_if(
        &mut self, func: impl FnOnce(&I::Item) -> bool,
    ) -> Option<Result<I::Item, MergeError>> {
        match self.peek() {
            Some(item) if func(item) => self.next(),
            _ => None,
        }
    }

    /// Number of inputs that still have elements
    #[inline]
    pub fn active_inputs(&self) -> usize {
        self.0.len()
    }

    /// Merges all remaining items into a [`Vec`].
    ///
    /// # Errors
    /// [`MergeError::UnsortedInput`] if any input turns out not to be sorted. The items
    /// merged before that point are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::merge;
    ///
    /// let v = merge([vec![1, 3, 5], vec![2, 4, 6]])?.try_into_vec()?;
    /// assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    pub fn try_into_vec(mut self) -> Result<Vec<I::Item>, MergeError> {
        // The hint assumes sorted inputs and may be unbounded, so let the vector grow
        let mut res = Vec::new();
        while let Some(item) = self.0.pull()? {
            res.push(item);
        }
        Ok(res)
    }
}

impl<S, TB, I, C> Iterator for MergedIter<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
    type Item = Result<I::Item, MergeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pull().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // An error replaces one element and ends the iteration, so only one item is certain
        let (_, max) = self.0.size_hint();
        (usize::from(!self.0.is_empty()), max)
    }
}

// The selector is poisoned after an error and empty after the end,
// it never produces anything again in both cases
impl<S, TB, I, C> FusedIterator for MergedIter<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
}

impl<S, TB, I, C> Source for MergedIter<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<I::Item>, MergeError> {
        self.0.pull()
    }

    /// Bounds on the remaining elements, assuming no input turns out to be unsorted
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

//! The pull protocol shared by every layer of the merge.
//!
//! A [`Source`] is a resumable producer of elements with an explicit end signal (`Ok(None)`) and
//! an explicit failure signal (`Err`). [`GuardedIter`](crate::GuardedIter),
//! [`Selector`](crate::Selector) and [`MergedIter`](crate::MergedIter) all implement it, each
//! pulling from the layer below only when pulled itself.

use core::iter::FusedIterator;

use crate::MergeError;

/// A resumable source of elements.
pub trait Source {
    /// Element produced by this source
    type Item;

    /// Pulls the next element.
    ///
    /// Returns `Ok(None)` once the source is exhausted. After an `Err` the source must not be
    /// resumed; implementations in this crate return `Ok(None)` from then on.
    fn pull(&mut self) -> Result<Option<Self::Item>, MergeError>;

    /// Bounds on the number of elements left, with the same meaning as
    /// [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Adapts this source into an [`Iterator`] of `Result`s.
    ///
    /// The iterator yields `Some(Err(_))` at most once and is fused afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::{GuardedIter, MergeError, Source};
    ///
    /// let pulled: Vec<_> = GuardedIter::new(0, [1, 3, 2]).pulls().collect();
    /// assert_eq!(
    ///     pulled,
    ///     vec![Ok(1), Err(MergeError::UnsortedInput { input: 0, position: 2 })]
    /// );
    /// ```
    fn pulls(self) -> Pulls<Self>
    where
        Self: Sized,
    {
        Pulls {
            source: self,
            done: false,
        }
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<Self::Item>, MergeError> {
        S::pull(self)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        S::size_hint(self)
    }
}

/// Iterator over the results of a [`Source`], created by [`Source::pulls`].
#[derive(Debug, Clone)]
pub struct Pulls<S> {
    source: S,
    done: bool,
}

impl<S> Pulls<S> {
    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Source> Iterator for Pulls<S> {
    type Item = Result<S::Item, MergeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.source.pull().transpose();
        self.done = !matches!(res, Some(Ok(_)));
        res
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // an error may cut the sequence short
            (0, self.source.size_hint().1.map(|max| max.saturating_add(1)))
        }
    }
}

impl<S: Source> FusedIterator for Pulls<S> {}

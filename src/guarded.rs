//! One input of the merge, checked for sortedness as it is consumed.

use core::cmp::Ordering;

use tracing::debug;

use crate::{
    comparators::{ByOrd, Comparator},
    MergeError, Source,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing pulled yet
    Fresh,
    /// The last pull produced an element, it's held in `head`
    Active,
    /// The wrapped iterator returned `None`
    Exhausted,
    /// The wrapped iterator produced an out-of-order element
    Failed,
}

/// Holds an iterator and the last element pulled from it (the head).
///
/// Every pulled element is compared against the head it replaces; if it compares
/// [`Less`](Ordering::Less), the iterator is not sorted and [`advance`](Self::advance) fails
/// with [`MergeError::UnsortedInput`]. The check happens lazily, on each pull, so a bad element
/// is only noticed when it is reached.
///
/// Once exhausted or failed, the wrapped iterator is never polled again.
#[derive(Debug, Clone)]
pub struct GuardedIter<I: Iterator, C = ByOrd> {
    iter: I,
    head: Option<I::Item>,
    cmp: C,
    input: usize,
    pulled: usize,
    phase: Phase,
}

impl<I: Iterator> GuardedIter<I> {
    /// Wraps `iter`, which is the `input`-th input of a merge, using [`Ord`] to check the order
    pub fn new(input: usize, iter: impl IntoIterator<IntoIter = I>) -> Self
    where
        I::Item: Ord,
    {
        Self::with_comparator(input, iter, ByOrd)
    }
}

impl<I, C> GuardedIter<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    /// Wraps `iter`, which is the `input`-th input of a merge, using `cmp` to check the order
    pub fn with_comparator(input: usize, iter: impl IntoIterator<IntoIter = I>, cmp: C) -> Self {
        Self {
            iter: iter.into_iter(),
            head: None,
            cmp,
            input,
            pulled: 0,
            phase: Phase::Fresh,
        }
    }

    /// Pulls the next element from the wrapped iterator, making it the new head.
    ///
    /// Returns the previous head: `None` on the first (priming) call, and the last element
    /// once the iterator runs out. Check [`current`](Self::current) to see whether a new head
    /// is available.
    ///
    /// # Errors
    /// [`MergeError::UnsortedInput`] if the pulled element is less than the current head.
    /// The stream is unusable afterwards: the head is dropped and further calls return
    /// `Ok(None)`.
    pub fn advance(&mut self) -> Result<Option<I::Item>, MergeError> {
        if matches!(self.phase, Phase::Exhausted | Phase::Failed) {
            return Ok(None);
        }
        let Some(next) = self.iter.next() else {
            self.phase = Phase::Exhausted;
            return Ok(self.head.take());
        };
        if let Some(head) = &self.head {
            if self.cmp.compare(&next, head) == Ordering::Less {
                self.phase = Phase::Failed;
                self.head = None;
                debug!(
                    input = self.input,
                    position = self.pulled,
                    "out-of-order element in input"
                );
                return Err(MergeError::UnsortedInput {
                    input: self.input,
                    position: self.pulled,
                });
            }
        }
        self.pulled += 1;
        self.phase = Phase::Active;
        Ok(self.head.replace(next))
    }

    /// The head: the most recently pulled element, if the last [`advance`](Self::advance)
    /// produced one
    #[inline]
    pub fn current(&self) -> Option<&I::Item> {
        self.head.as_ref()
    }

    /// Returns true if there is a head
    #[inline]
    pub fn has_current(&self) -> bool {
        self.head.is_some()
    }

    /// Returns true once the wrapped iterator has run out
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Index of this input within the merge
    #[inline]
    pub fn input(&self) -> usize {
        self.input
    }

    /// Number of elements successfully pulled so far (including the head)
    #[inline]
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Orders the heads of two streams with `self`'s comparator. A stream without a head sorts
    /// after any stream with one.
    #[inline]
    pub(crate) fn cmp_heads(&self, other: &Self) -> Ordering {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => self.cmp.compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Bounds on the elements left in this stream, counting the head
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Exhausted | Phase::Failed => (0, Some(0)),
            Phase::Fresh | Phase::Active => {
                let head = usize::from(self.head.is_some());
                let (min, max) = self.iter.size_hint();
                (
                    min.saturating_add(head),
                    max.and_then(|max| max.checked_add(head)),
                )
            }
        }
    }
}

/// Pulling a [`GuardedIter`] on its own yields the wrapped elements in order, each one checked
/// against its predecessor. The stream keeps one element of lookahead, so an out-of-order
/// element is reported instead of the element right before it.
impl<I, C> Source for GuardedIter<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Option<I::Item>, MergeError> {
        if self.phase == Phase::Fresh {
            self.advance()?;
        }
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        GuardedIter::size_hint(self)
    }
}

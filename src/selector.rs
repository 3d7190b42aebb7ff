//! The merge selector: a binary min-heap of input streams keyed by their heads.
//!
//! Heap structure (0-based):
//! ```custom
//! [
//!     smallest,
//!     children of 0: 1, 2,
//!     children of idx: idx*2+1, idx*2+2,
//!     ...
//! ]
//! ```
//!
//! Streams are ordered by `(head, input index)`: the head is compared with the stream's
//! [`Comparator`], and ties are resolved by the [`TieBreaker`] on input indexes. Input indexes
//! are unique, so no two streams ever compare equal and the pick at every step is
//! deterministic.

use core::cmp::Ordering;

use tracing::{debug, trace};

use crate::{
    comparators::{tie_breaker::TieBreaker, Comparator},
    storage::Storage,
    GuardedIter, MergeError, Source,
};

/// Keeps the active input streams and always surfaces the smallest pending element.
///
/// Every stream in the heap holds a head. A stream leaves the heap the moment it reports
/// exhaustion. Finding the minimum is O(1); emitting it costs one pull from that stream and
/// O(log k) comparisons for k active streams.
///
/// After an [`UnsortedInput`](MergeError::UnsortedInput) error the selector is poisoned and
/// yields nothing more.
#[derive(Debug, Clone)]
pub struct Selector<S, TB> {
    streams: S,
    tie_breaker: TB,
    poisoned: bool,
}

impl<S, TB, I, C> Selector<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
    /// Primes every stream (pulling its first element) and builds the heap from the
    /// non-empty ones.
    ///
    /// # Errors
    /// [`MergeError::EmptyInput`] if `streams` is empty or none of the streams has an element.
    /// [`MergeError::CapacityExceeded`] if fixed-capacity storage can't hold every non-empty
    /// stream.
    pub fn new(
        streams: impl IntoIterator<Item = GuardedIter<I, C>>, tie_breaker: TB,
    ) -> Result<Self, MergeError> {
        let streams = streams.into_iter();
        let mut storage = S::new();
        storage.reserve_for(&streams);
        let mut inputs = 0_usize;
        for mut stream in streams {
            inputs += 1;
            // The first pull has no predecessor to compare with, it can't fail
            stream.advance()?;
            if stream.has_current() {
                if let Some(capacity) = storage.capacity() {
                    if storage.len() == capacity {
                        debug!(inputs, capacity, "storage full");
                        return Err(MergeError::CapacityExceeded { capacity });
                    }
                }
                storage.push(stream);
            }
        }
        if storage.len() == 0 {
            return Err(MergeError::EmptyInput { inputs });
        }
        debug!(inputs, active = storage.len(), "merge selector built");

        let mut res = Self {
            streams: storage,
            tie_breaker,
            poisoned: false,
        };
        res.heapify();
        Ok(res)
    }

    /// Compares two heap entries by indexes
    #[inline]
    fn cmp_idx(&self, a: usize, b: usize) -> Ordering {
        let (a, b) = (self.streams.get(a), self.streams.get(b));
        a.cmp_heads(b)
            .then_with(|| self.tie_breaker.compare(a.input(), b.input()))
    }

    fn heapify(&mut self) {
        for pos in (0..self.streams.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    /// Take an element at `pos` and move it down the heap,
    /// while its children are smaller.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.streams.len();
        loop {
            // never overflows: pos < len <= isize::MAX
            let mut child = 2 * pos + 1;
            if child >= len {
                return;
            }
            // find the smaller of the two children
            if child + 1 < len && self.cmp_idx(child + 1, child).is_lt() {
                child += 1;
            }
            // if we are already in order, stop.
            if self.cmp_idx(pos, child).is_le() {
                return;
            }
            self.streams.swap(pos, child);
            pos = child;
        }
    }

    /// Emits the smallest pending element.
    ///
    /// The stream holding it is advanced: it goes back into the heap with its new head, or is
    /// retired if it ran out.
    ///
    /// # Errors
    /// [`MergeError::UnsortedInput`] if the advanced stream produced an out-of-order element.
    pub fn pull(&mut self) -> Result<Option<I::Item>, MergeError> {
        if self.poisoned || self.streams.len() == 0 {
            return Ok(None);
        }
        let item = match self.streams.get_mut(0).advance() {
            Ok(item) => item,
            Err(err) => {
                self.poisoned = true;
                return Err(err);
            }
        };
        if self.streams.get(0).has_current() {
            self.sift_down(0);
        } else {
            let retired = self.streams.swap_remove(0);
            trace!(
                input = retired.input(),
                pulled = retired.pulled(),
                "input exhausted"
            );
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Returns a reference to the element the next [`pull`](Self::pull) will emit
    #[inline]
    pub fn peek<'a>(&'a self) -> Option<&'a I::Item>
    where
        GuardedIter<I, C>: 'a,
    {
        if self.poisoned || self.streams.len() == 0 {
            return None;
        }
        self.streams.get(0).current()
    }

    /// Number of streams that still have elements
    #[inline]
    pub fn len(&self) -> usize {
        if self.poisoned {
            0
        } else {
            self.streams.len()
        }
    }

    /// Returns true if nothing is left to emit
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an input was found to be unsorted
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Bounds on the remaining elements, assuming no input turns out to be unsorted
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        let mut min = 0_usize;
        let mut max = Some(0_usize);
        for idx in 0..self.len() {
            let (s_min, s_max) = self.streams.get(idx).size_hint();
            min = min.saturating_add(s_min);
            // If any stream has an unbounded upper bound, or the sum of
            // upper bounds overflows a usize - overall upper bound is None.
            max = max.zip(s_max).and_then(|(a, b)| a.checked_add(b));
        }
        (min, max)
    }
}

impl<S, TB, I, C> Source for Selector<S, TB>
where
    I: Iterator,
    C: Comparator<I::Item>,
    S: Storage<Item = GuardedIter<I, C>>,
    TB: TieBreaker,
{
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Result<Option<I::Item>, MergeError> {
        Selector::pull(self)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        Selector::size_hint(self)
    }
}

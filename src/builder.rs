use core::{cmp::Ordering, marker::PhantomData};

#[cfg(feature = "stackvec_storage")]
use stackvector::{Array, StackVec};

#[cfg(feature = "stackvec_storage")]
use crate::storage::StackVecStorage;
#[cfg(feature = "vec_storage")]
use crate::storage::VecStorage;
use crate::{
    comparators::{
        tie_breaker::{InsertionOrder, ReverseInsertionOrder, TieBreaker},
        ByFunc, ByKey, ByOrd, Comparator, MaxFirst,
    },
    storage::Storage,
    GuardedIter, MergeError, MergedIter, Selector,
};

/// A builder for creating a merging iterator.
///
/// The `Merged` type provides an interface for configuring and creating [`MergedIter`]
/// iterators. It allows you to specify:
/// - How elements are ordered (by [`Ord`], by a comparison function, by key, descending)
/// - Which input wins when elements are equal
/// - Storage backends (heap-allocated `Vec` or stack-allocated arrays)
///
/// The same ordering is used to check that every input is sorted.
///
/// # Examples
///
/// ```
/// use sorted_merge::Merged;
///
/// let iter1 = vec![1, 3, 5];
/// let iter2 = vec![2, 4, 6];
///
/// let merged = Merged::new([iter1, iter2]).build()?;
/// let result = merged.try_into_vec()?;
///
/// assert_eq!(result, vec![1, 2, 3, 4, 5, 6]);
/// # Ok::<(), sorted_merge::MergeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Merged<Inputs, Cmp, TB, Storage> {
    inputs: Inputs,
    cmp: Cmp,
    tie_breaker: TB,
    _p: PhantomData<Storage>,
}

impl<Inputs> Merged<Inputs, ByOrd, InsertionOrder, ()> {
    /// Creates a new [`Merged`] for merging sorted inputs.
    ///
    /// This is the entry point for creating a merge. By default, it uses:
    /// - Standard ordering comparison `Ord::cmp` (if items implement `Ord`)
    /// - Stable tie-breaking (items from earlier inputs are yielded first when equal)
    /// - `Vec` storage for the input streams
    ///
    /// Nothing is pulled from the inputs until [`build`](Merged::build) is called.
    ///
    /// # Arguments
    ///
    /// * `inputs` - A collection of sorted inputs to merge. This can be any type that implements
    ///   `IntoIterator<Item = Input>` where `Input: IntoIterator`. Pass iterators over
    ///   references (e.g. `[a.iter(), b.iter()]`) to merge without taking ownership of the data.
    #[cfg(feature = "vec_storage")]
    pub const fn new(inputs: Inputs) -> Merged<Inputs, ByOrd, InsertionOrder, VecStorage> {
        Merged {
            inputs,
            cmp: ByOrd,
            tie_breaker: InsertionOrder,
            _p: PhantomData,
        }
    }

    /// Creates a new [`Merged`] for merging sorted inputs that uses stackvec storage.
    ///
    /// See [`new`](crate::Merged::new) for the details.
    ///
    /// # Generic parameters
    ///
    /// * `N` - Capacity of the storage. It should fit the number of non-empty inputs you
    ///   expect to merge, otherwise [building] the iterator fails with
    ///   [`MergeError::CapacityExceeded`](crate::MergeError::CapacityExceeded).
    ///
    /// # Examples
    /// ```
    /// use sorted_merge::Merged;
    ///
    /// let merged = Merged::new_stackvec::<2>([[1, 3, 5], [2, 4, 6]]).build()?;
    ///
    /// assert_eq!(merged.try_into_vec()?, vec![1, 2, 3, 4, 5, 6]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    ///
    /// [building]: crate::Merged::build
    #[cfg(feature = "stackvec_storage")]
    pub const fn new_stackvec<const N: usize>(
        inputs: Inputs,
    ) -> Merged<Inputs, ByOrd, InsertionOrder, StackVecStorage<N>> {
        Merged {
            inputs,
            cmp: ByOrd,
            tie_breaker: InsertionOrder,
            _p: PhantomData,
        }
    }
}

impl<Inputs, Input, Cmp, TB, St> Merged<Inputs, Cmp, TB, St>
where
    Inputs: IntoIterator<Item = Input>,
    Input: IntoIterator,
{
    /// Sets a custom comparison function for merging.
    ///
    /// The function should be consistent and transitive; every input must be sorted according
    /// to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::Merged;
    ///
    /// // Custom comparison for case-insensitive string sorting
    /// let iter1 = vec!["Apple", "banana"];
    /// let iter2 = vec!["Cherry", "date"];
    /// let merged = Merged::new([iter1, iter2])
    ///     .with_cmp(|a, b| a.to_lowercase().cmp(&b.to_lowercase()))
    ///     .build()?;
    /// assert_eq!(merged.try_into_vec()?, vec!["Apple", "banana", "Cherry", "date"]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    pub fn with_cmp<F>(self, cmp: F) -> Merged<Inputs, ByFunc<F>, TB, St>
    where
        F: Fn(&Input::Item, &Input::Item) -> Ordering + Clone,
    {
        self.with_comparator(ByFunc(cmp))
    }

    /// Orders elements by the key produced by `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::Merged;
    ///
    /// let people = vec![("Alice", 20), ("Bob", 30)];
    /// let more_people = vec![("David", 25), ("Eve", 35)];
    /// let merged = Merged::new([people, more_people])
    ///     .by_key(|person| person.1)
    ///     .build()?;
    /// let names: Vec<_> = merged.map(|person| person.map(|(name, _)| name)).collect::<Result<_, _>>()?;
    /// assert_eq!(names, vec!["Alice", "David", "Bob", "Eve"]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    pub fn by_key<F, K>(self, key: F) -> Merged<Inputs, ByKey<F>, TB, St>
    where
        F: Fn(&Input::Item) -> K + Clone,
        K: Ord,
    {
        self.with_comparator(ByKey(key))
    }

    /// Sets the [`Comparator`] used to order elements.
    pub fn with_comparator<C>(self, cmp: C) -> Merged<Inputs, C, TB, St>
    where
        C: Comparator<Input::Item>,
    {
        let Self {
            inputs,
            tie_breaker,
            ..
        } = self;
        Merged {
            inputs,
            cmp,
            tie_breaker,
            _p: PhantomData,
        }
    }

    /// Yields the largest element first. Inputs must be sorted in non-increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::Merged;
    ///
    /// let merged = Merged::new([vec![5, 3, 1], vec![6, 4, 2]]).descending().build()?;
    /// assert_eq!(merged.try_into_vec()?, vec![6, 5, 4, 3, 2, 1]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    pub fn descending(self) -> Merged<Inputs, MaxFirst<Cmp>, TB, St> {
        let Self {
            inputs,
            cmp,
            tie_breaker,
            ..
        } = self;
        Merged {
            inputs,
            cmp: MaxFirst(cmp),
            tie_breaker,
            _p: PhantomData,
        }
    }

    /// Sets the [`TieBreaker`] deciding which input goes first when elements are equal.
    pub fn tie_breaker<T: TieBreaker>(self, tie_breaker: T) -> Merged<Inputs, Cmp, T, St> {
        let Self { inputs, cmp, .. } = self;
        Merged {
            inputs,
            cmp,
            tie_breaker,
            _p: PhantomData,
        }
    }

    /// When elements are equal, yields the one from the later input first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::Merged;
    ///
    /// let merged = Merged::new([vec![(0, 'a')], vec![(0, 'b')]])
    ///     .by_key(|item| item.0)
    ///     .reverse_tie_breaking()
    ///     .build()?;
    /// assert_eq!(merged.try_into_vec()?, vec![(0, 'b'), (0, 'a')]);
    /// # Ok::<(), sorted_merge::MergeError>(())
    /// ```
    pub fn reverse_tie_breaking(self) -> Merged<Inputs, Cmp, ReverseInsertionOrder, St> {
        self.tie_breaker(ReverseInsertionOrder)
    }

    /// Wraps every input into a [`GuardedIter`] and primes the selector over storage `S`.
    fn build_in<S>(self) -> Result<MergedIter<S, TB>, MergeError>
    where
        Cmp: Comparator<Input::Item>,
        TB: TieBreaker,
        S: Storage<Item = GuardedIter<Input::IntoIter, Cmp>>,
    {
        let Self {
            inputs,
            cmp,
            tie_breaker,
            ..
        } = self;
        let streams = inputs
            .into_iter()
            .enumerate()
            .map(|(idx, input)| GuardedIter::with_comparator(idx, input, cmp.clone()));
        Selector::new(streams, tie_breaker).map(MergedIter)
    }
}

#[cfg(feature = "vec_storage")]
impl<Inputs, Input, Cmp, TB> Merged<Inputs, Cmp, TB, VecStorage>
where
    Inputs: IntoIterator<Item = Input>,
    Input: IntoIterator,
    Cmp: Comparator<Input::Item>,
    TB: TieBreaker,
{
    /// Builds the merged iterator, pulling the first element of every input.
    ///
    /// Getting a compiler error
    /// ```custom
    /// the method `build` exists for struct `Merged<...>`,
    /// but its trait bounds were not satisfied
    /// ```
    /// means that the item type does not implement [`Ord`].
    /// Either implement it for your type or specify another way to compare items by using
    /// builder methods documented above.
    ///
    /// # Errors
    /// [`MergeError::EmptyInput`] if no inputs were given, or all of them are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_merge::{Merged, MergeError};
    ///
    /// let err = Merged::new([Vec::<i32>::new(), vec![]]).build().unwrap_err();
    /// assert_eq!(err, MergeError::EmptyInput { inputs: 2 });
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn build(self) -> Result<MergedIter<Vec<GuardedIter<Input::IntoIter, Cmp>>, TB>, MergeError> {
        self.build_in()
    }
}

#[cfg(feature = "stackvec_storage")]
impl<const N: usize, Inputs, Input, Cmp, TB> Merged<Inputs, Cmp, TB, StackVecStorage<N>>
where
    Inputs: IntoIterator<Item = Input>,
    Input: IntoIterator,
    Cmp: Comparator<Input::Item>,
    TB: TieBreaker,
    [GuardedIter<Input::IntoIter, Cmp>; N]: Array<Item = GuardedIter<Input::IntoIter, Cmp>>,
{
    /// Builds the merged iterator, pulling the first element of every input.
    ///
    /// # Errors
    /// [`MergeError::EmptyInput`] if no inputs were given, or all of them are empty.
    /// [`MergeError::CapacityExceeded`] if more than `N` inputs are non-empty.
    #[allow(clippy::type_complexity)]
    pub fn build(
        self,
    ) -> Result<MergedIter<StackVec<[GuardedIter<Input::IntoIter, Cmp>; N]>, TB>, MergeError> {
        self.build_in()
    }
}

//! Lazy k-way merge of sorted iterators.
//!
//! This crate merges any number of individually sorted inputs into one sorted sequence. Inputs
//! may have different lengths, and any of them may be empty (but not all). Nothing is collected
//! up front: each step pulls one element from the input that holds the current minimum, so at
//! most one pending element per input is buffered.
//!
//! Inputs are checked as they are consumed: if an input yields an element smaller than the one
//! before it, the merge yields [`MergeError::UnsortedInput`] and stops. Elements emitted before
//! that point are a correct merge of what was read so far.
//!
//! # Quick start
//!
//! ```
//! use sorted_merge::merge;
//!
//! let a = vec![1, 3, 5];
//! let b = vec![2, 4, 6];
//! let merged = merge([a, b])?.try_into_vec()?;
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
//! # Ok::<(), sorted_merge::MergeError>(())
//! ```
//!
//! Unsorted inputs are reported lazily, when the offending element is reached:
//!
//! ```
//! use sorted_merge::{merge, MergeError};
//!
//! let mut merged = merge([vec![0, 5], vec![3, 1, 2]])?;
//! assert_eq!(merged.next(), Some(Ok(0)));
//! assert_eq!(
//!     merged.next(),
//!     Some(Err(MergeError::UnsortedInput { input: 1, position: 1 }))
//! );
//! assert_eq!(merged.next(), None);
//! # Ok::<(), MergeError>(())
//! ```
//!
//! There must be something to merge:
//!
//! ```
//! use sorted_merge::{merge, MergeError};
//!
//! let err = merge(Vec::<Vec<i32>>::new()).unwrap_err();
//! assert_eq!(err, MergeError::EmptyInput { inputs: 0 });
//! ```
//!
//! # Custom ordering
//!
//! Use the [`Merged`] builder to specify the ordering (by comparison function, by key,
//! descending) and the tie-breaking policy. Implement a custom
//! [`Comparator`](comparators::Comparator) for even more control. Inputs are checked against the
//! same ordering.
//!
//! ```
//! use sorted_merge::Merged;
//!
//! // Merge by descending absolute value
//! let res = Merged::new([vec![-3_i32, -1], vec![2, -2]])
//!     .by_key(|&x| x.abs())
//!     .descending()
//!     .build()?
//!     .try_into_vec()?;
//! assert_eq!(res, vec![-3, 2, -2, -1]);
//! # Ok::<(), sorted_merge::MergeError>(())
//! ```
//!
//! # Ties
//!
//! Equal elements from different inputs are all emitted. By default the one from the input
//! that was supplied first goes first, which makes the merge stable; see
//! [`tie_breaker`](comparators::tie_breaker) for the alternative.
//!
//! # Layers
//!
//! Every layer implements the [`Source`] pull protocol: [`GuardedIter`] wraps one input and
//! checks its order, [`Selector`] keeps the heap of inputs and picks the minimum, and
//! [`MergedIter`] exposes the result as an [`Iterator`].
//!
//! # Logging
//!
//! Building a merge, retiring an input and detecting an unsorted input are reported through
//! [`tracing`] events at `debug`/`trace` level. The crate never installs a subscriber.
//!
//! # Crate Features
//! - `vec_storage` (default): heap-allocated storage via [`Merged::new`] and the free functions
//!   [`merge`], [`merge_by`], [`merge_by_key`]
//! - `stackvec_storage`: fixed-capacity storage via [`Merged::new_stackvec`]

pub mod comparators;
mod error;
mod guarded;
mod selector;
mod source;
pub mod storage;

mod builder;
mod iter;

pub use builder::Merged;
pub use error::MergeError;
pub use guarded::GuardedIter;
#[cfg(feature = "vec_storage")]
pub use iter::VecMergedIter;
pub use iter::MergedIter;
pub use selector::Selector;
pub use source::{Pulls, Source};

#[cfg(feature = "vec_storage")]
mod convenience;
#[cfg(feature = "vec_storage")]
pub use convenience::*;


#[doc(hidden)]
#[cfg_attr(feature = "vec_storage", doc = include_str!("../README.md"))]
struct _ReadmeTest;

//! Errors reported by the merge.

use thiserror::Error;

/// Error type for building and pulling a merge.
///
/// All variants are fatal: once returned, the merge that produced it yields nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// There is nothing to merge: either no inputs were supplied (`inputs == 0`), or every
    /// supplied input was empty.
    #[error("nothing to merge: {inputs} input(s) supplied, none of them yielded an element")]
    EmptyInput {
        /// Number of inputs that were supplied
        inputs: usize,
    },
    /// An input yielded an element that compares less than the element before it.
    #[error("input {input} is not sorted: element at position {position} is out of order")]
    UnsortedInput {
        /// Index of the offending input, in the order inputs were supplied
        input: usize,
        /// 0-based position of the out-of-order element within that input
        position: usize,
    },
    /// More inputs yielded an element than fixed-capacity storage can hold.
    #[error("too many non-empty inputs: storage holds at most {capacity}")]
    CapacityExceeded {
        /// Number of inputs the storage can hold
        capacity: usize,
    },
}

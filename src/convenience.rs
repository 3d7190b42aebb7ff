use core::cmp::Ordering;

use crate::{
    comparators::{ByFunc, ByKey},
    iter::VecMergedIter,
    MergeError, Merged,
};

/// Merges sorted inputs with default parameters:
/// * Uses `Vec` storage
/// * Yields items according to their [`Ord`] implementation, smallest-first
/// * Equal items are yielded in order of their respective inputs
///
/// # Errors
/// [`MergeError::EmptyInput`] if there are no inputs, or all of them are empty.
pub fn merge<IT>(
    inputs: IT,
) -> Result<VecMergedIter<<IT::Item as IntoIterator>::IntoIter>, MergeError>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    <IT::Item as IntoIterator>::Item: Ord,
{
    Merged::new(inputs).build()
}

/// Merges sorted inputs with default parameters:
/// * Uses `Vec` storage
/// * Yields smallest items according to `func`
/// * Equal items are yielded in order of their respective inputs
///
/// # Errors
/// [`MergeError::EmptyInput`] if there are no inputs, or all of them are empty.
pub fn merge_by<IT, F>(
    inputs: IT, func: F,
) -> Result<VecMergedIter<<IT::Item as IntoIterator>::IntoIter, ByFunc<F>>, MergeError>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    F: Fn(&<IT::Item as IntoIterator>::Item, &<IT::Item as IntoIterator>::Item) -> Ordering + Clone,
{
    Merged::new(inputs).with_cmp(func).build()
}

/// Merges sorted inputs with default parameters:
/// * Uses `Vec` storage
/// * Yields items with the smallest key according to `func` first
/// * Equal items are yielded in order of their respective inputs
///
/// # Errors
/// [`MergeError::EmptyInput`] if there are no inputs, or all of them are empty.
pub fn merge_by_key<IT, F, K>(
    inputs: IT, func: F,
) -> Result<VecMergedIter<<IT::Item as IntoIterator>::IntoIter, ByKey<F>>, MergeError>
where
    IT: IntoIterator,
    IT::Item: IntoIterator,
    F: Fn(&<IT::Item as IntoIterator>::Item) -> K + Clone,
    K: Ord,
{
    Merged::new(inputs).by_key(func).build()
}

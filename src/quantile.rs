//! Quantile estimator: turns a sample into ordered bucket boundaries.

use crate::core::SortKey;
use log::trace;

/// Number of buckets for an input of `n` elements: `max(1, floor(sqrt(n)))`.
///
/// ```
/// use quantsort::quantile::bucket_count;
///
/// assert_eq!(bucket_count(0), 1);
/// assert_eq!(bucket_count(5), 2);
/// assert_eq!(bucket_count(1_000_000), 1000);
/// ```
#[inline]
pub fn bucket_count(n: usize) -> usize {
    n.isqrt().max(1)
}

/// Position in a sorted sample of size `sample_len` of the `i`-th boundary
/// out of `buckets`: `floor((i / buckets) * (sample_len - 1))`.
///
/// Evaluated in integer arithmetic, so the floor is exact.
#[inline]
pub fn boundary_index(i: usize, buckets: usize, sample_len: usize) -> usize {
    debug_assert!(buckets > 0 && i < buckets && sample_len > 0);
    ((i as u128 * (sample_len - 1) as u128) / buckets as u128) as usize
}

/// Sorts `sample` in place and returns the `buckets - 1` boundaries.
///
/// The result is empty when `buckets <= 1` or the sample is empty. Because
/// the sample is sorted and `boundary_index` is non-decreasing in `i`, the
/// boundaries come out non-decreasing.
///
/// ```
/// use quantsort::quantile::estimate_boundaries;
///
/// let mut sample = vec![5, 3, 1, 4, 2];
/// assert_eq!(estimate_boundaries(&mut sample, 2), vec![3]);
/// assert_eq!(sample, vec![1, 2, 3, 4, 5]);
/// ```
pub fn estimate_boundaries<T: SortKey>(sample: &mut [T], buckets: usize) -> Vec<T> {
    sample.sort_unstable_by(T::key_cmp);
    boundaries_from_sorted(sample, buckets)
}

/// Boundaries from the whole of `data`, without copying it.
///
/// Sorts a vector of positions by the values they point at and clones only
/// the `buckets - 1` boundary values. Returns the same boundaries as
/// [`estimate_boundaries`] on a full copy of `data`.
///
/// ```
/// use quantsort::quantile::estimate_boundaries_indexed;
///
/// let data = [5, 3, 1, 4, 2];
/// assert_eq!(estimate_boundaries_indexed(&data, 2), vec![3]);
/// ```
pub fn estimate_boundaries_indexed<T: SortKey>(data: &[T], buckets: usize) -> Vec<T> {
    let len = data.len();
    if buckets <= 1 || len == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..len).collect();
    order.sort_unstable_by(|&a, &b| data[a].key_cmp(&data[b]));

    let boundaries: Vec<T> = (1..buckets)
        .map(|i| data[order[boundary_index(i, buckets, len)]].clone())
        .collect();
    trace!(
        "estimated {} boundaries from all {} elements",
        boundaries.len(),
        len
    );
    boundaries
}

/// Boundaries from an already sorted sample.
pub fn boundaries_from_sorted<T: SortKey>(sorted_sample: &[T], buckets: usize) -> Vec<T> {
    let len = sorted_sample.len();
    if buckets <= 1 || len == 0 {
        return Vec::new();
    }

    let boundaries: Vec<T> = (1..buckets)
        .map(|i| sorted_sample[boundary_index(i, buckets, len)].clone())
        .collect();
    trace!(
        "estimated {} boundaries from a sample of {}",
        boundaries.len(),
        len
    );
    boundaries
}

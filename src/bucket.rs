//! Bucket assignment and per-bucket sorting.
//!
//! Elements are routed to buckets by a lower-bound search over the boundary
//! list: an element's bucket is the number of boundaries strictly less than
//! it, so values equal to a boundary land in the lower bucket.

use crate::core::SortKey;
use rayon::prelude::*;

/// Bucket of `x`: the count of boundaries strictly less than `x`.
///
/// `boundaries` must be non-decreasing.
///
/// ```
/// use quantsort::bucket::bucket_index;
///
/// let boundaries = [10, 20, 20, 30];
/// assert_eq!(bucket_index(&boundaries, &5), 0);
/// assert_eq!(bucket_index(&boundaries, &10), 0);
/// assert_eq!(bucket_index(&boundaries, &20), 1);
/// assert_eq!(bucket_index(&boundaries, &25), 3);
/// assert_eq!(bucket_index(&boundaries, &99), 4);
/// ```
#[inline(always)]
pub fn bucket_index<T: SortKey>(boundaries: &[T], x: &T) -> usize {
    boundaries.partition_point(|b| b.key_lt(x))
}

/// The input split into `boundaries.len() + 1` buckets.
///
/// Concatenating the buckets in index order after sorting each one yields the
/// whole input in ascending order.
#[derive(Clone, Debug)]
pub struct Buckets<T> {
    boundaries: Vec<T>,
    buckets: Vec<Vec<T>>,
    len: usize,
}

impl<T: SortKey> Buckets<T> {
    /// Moves every element of `data` into its bucket.
    ///
    /// A first pass records each element's bucket and counts per-bucket
    /// loads, so every bucket is allocated once at its final size. Elements
    /// keep their input order within a bucket.
    pub fn assign(data: Vec<T>, boundaries: Vec<T>) -> Self {
        let len = data.len();
        if boundaries.is_empty() {
            return Self {
                boundaries,
                buckets: vec![data],
                len,
            };
        }

        // 1. Histogram, caching each element's bucket
        let mut counts = vec![0usize; boundaries.len() + 1];
        let ids: Vec<usize> = data
            .iter()
            .map(|x| {
                let id = bucket_index(&boundaries, x);
                counts[id] += 1;
                id
            })
            .collect();

        // 2. Exact-size buckets
        let mut buckets: Vec<Vec<T>> = counts.iter().map(|&c| Vec::with_capacity(c)).collect();

        // 3. Distribute
        data.into_iter()
            .zip(ids)
            .for_each(|(x, id)| buckets[id].push(x));

        Self {
            boundaries,
            buckets,
            len,
        }
    }

    /// Boundary values separating consecutive buckets.
    pub fn boundaries(&self) -> &[T] {
        &self.boundaries
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Contents of bucket `index`, or `None` if out of range.
    pub fn bucket(&self, index: usize) -> Option<&[T]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Number of elements in each bucket.
    pub fn loads(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Total number of elements across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Largest bucket load relative to the even split `len / num_buckets`.
    ///
    /// `1.0` means perfectly balanced. Returns `0.0` for an empty input.
    pub fn max_load_factor(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let ideal = self.len as f64 / self.num_buckets() as f64;
        let max = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        max as f64 / ideal
    }

    /// Sorts every bucket in place, on the rayon pool if `parallel` is set.
    pub fn sort_each(&mut self, parallel: bool) {
        if parallel {
            self.buckets
                .par_iter_mut()
                .for_each(|bucket| bucket.sort_unstable_by(T::key_cmp));
        } else {
            self.buckets
                .iter_mut()
                .for_each(|bucket| bucket.sort_unstable_by(T::key_cmp));
        }
    }

    /// Concatenates the buckets in index order without sorting them.
    pub fn concat(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.buckets
            .into_iter()
            .for_each(|bucket| out.extend(bucket));
        out
    }

    /// Sorts each bucket and concatenates them into the final output.
    pub fn into_sorted(mut self, parallel: bool) -> Vec<T> {
        self.sort_each(parallel);
        self.concat()
    }
}

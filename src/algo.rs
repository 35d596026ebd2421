//! Quantile bucket sort.
//!
//! The pipeline runs in four stages:
//! - **Sample**: draw `min(n, max(1000, round(0.01 n)))` elements without replacement.
//! - **Estimate**: sort the sample and pick `floor(sqrt(n)) - 1` evenly spaced quantiles as boundaries.
//! - **Assign**: route every element to the bucket given by a lower-bound search over the boundaries.
//! - **Sort**: sort each bucket independently and concatenate them in boundary order.
//!
//! The main entry points are [`quantsort`], [`quantsort_with_rng`], [`quantsort_vec`]
//! and [`quantsort_mut`]. [`QuantSorter`] exposes the same pipeline with a custom
//! [`SortConfig`].

use crate::bucket::Buckets;
use crate::config::SortConfig;
use crate::core::{SortKey, find_incomparable};
use crate::error::{Result, SortError};
use crate::quantile::{bucket_count, estimate_boundaries, estimate_boundaries_indexed};
use crate::sample::{sample, sample_size};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A configured quantile bucket sorter.
///
/// The sorter holds no random state. Every call takes the generator that
/// drives sampling, so a fixed seed reproduces both the boundaries and the
/// output.
///
/// # Examples
///
/// ```
/// use quantsort::{QuantSorter, SortConfig};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let sorter = QuantSorter::new(SortConfig::default().with_parallel(true)).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let sorted = sorter.sort(&[0.5, -2.0, 3.25, 0.0], &mut rng).unwrap();
/// assert_eq!(sorted, vec![-2.0, 0.0, 0.5, 3.25]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuantSorter {
    config: SortConfig,
}

impl QuantSorter {
    /// Creates a sorter after validating `config`.
    pub fn new(config: SortConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Samples `data`, estimates boundaries and distributes every element
    /// into its bucket. Buckets are returned unsorted.
    ///
    /// # Errors
    ///
    /// [`SortError::IncomparableElement`] if any element has no place in the
    /// order, [`SortError::InvalidInput`] for a malformed sample-size request.
    pub fn partition<T, R>(&self, data: Vec<T>, rng: &mut R) -> Result<Buckets<T>>
    where
        T: SortKey,
        R: Rng + ?Sized,
    {
        if let Some(index) = find_incomparable(&data) {
            return Err(SortError::IncomparableElement { index });
        }

        let n = data.len();
        let num_buckets = bucket_count(n);
        let k = sample_size(n, &self.config)?;

        // A full sample is the input itself; sort positions instead of a copy
        let boundaries = if k >= n {
            estimate_boundaries_indexed(&data, num_buckets)
        } else {
            let mut picked = sample(&data, k, rng);
            estimate_boundaries(&mut picked, num_buckets)
        };

        let buckets = Buckets::assign(data, boundaries);
        debug!(
            "partitioned {} elements: sample={}, buckets={}, max load factor={:.2}",
            n,
            k,
            num_buckets,
            buckets.max_load_factor()
        );
        Ok(buckets)
    }

    /// Sorts `data`, consuming it so elements are moved rather than cloned.
    pub fn sort_vec<T, R>(&self, data: Vec<T>, rng: &mut R) -> Result<Vec<T>>
    where
        T: SortKey,
        R: Rng + ?Sized,
    {
        let n = data.len();
        if n <= 1 {
            return Ok(data);
        }

        let buckets = self.partition(data, rng)?;
        Ok(buckets.into_sorted(self.config.use_parallel(n)))
    }

    /// Returns a sorted copy of `data`.
    pub fn sort<T, R>(&self, data: &[T], rng: &mut R) -> Result<Vec<T>>
    where
        T: SortKey,
        R: Rng + ?Sized,
    {
        self.sort_vec(data.to_vec(), rng)
    }

    /// Sorts `data` in place. On error the slice is left untouched.
    pub fn sort_in_place<T, R>(&self, data: &mut [T], rng: &mut R) -> Result<()>
    where
        T: SortKey,
        R: Rng + ?Sized,
    {
        let sorted = self.sort(data, rng)?;
        data.clone_from_slice(&sorted);
        Ok(())
    }
}

/// Returns a sorted copy of `data` using the default configuration.
///
/// Sampling is driven by a generator seeded from the OS for this call only.
/// Use [`quantsort_with_rng`] for reproducible runs.
///
/// # Examples
///
/// ```
/// use quantsort::quantsort;
///
/// let sorted = quantsort(&[5, 3, 1, 4, 2]).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub fn quantsort<T: SortKey>(data: &[T]) -> Result<Vec<T>> {
    let mut rng = StdRng::from_os_rng();
    QuantSorter::default().sort(data, &mut rng)
}

/// Returns a sorted copy of `data`, sampling with the caller's generator.
///
/// # Examples
///
/// ```
/// use quantsort::quantsort_with_rng;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sorted = quantsort_with_rng(&[2, 2, 2, 2], &mut rng).unwrap();
/// assert_eq!(sorted, vec![2, 2, 2, 2]);
/// ```
pub fn quantsort_with_rng<T, R>(data: &[T], rng: &mut R) -> Result<Vec<T>>
where
    T: SortKey,
    R: Rng + ?Sized,
{
    QuantSorter::default().sort(data, rng)
}

/// Sorts an owned vector, moving its elements through the buckets.
pub fn quantsort_vec<T, R>(data: Vec<T>, rng: &mut R) -> Result<Vec<T>>
where
    T: SortKey,
    R: Rng + ?Sized,
{
    QuantSorter::default().sort_vec(data, rng)
}

/// Sorts a mutable slice in place.
///
/// This is a convenience wrapper that sorts a copy and writes it back, so a
/// failed sort leaves `data` as it was.
///
/// # Examples
///
/// ```
/// use quantsort::quantsort_mut;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut data = vec![3.5f32, -1.0, 2.0];
/// quantsort_mut(&mut data, &mut rng).unwrap();
/// assert_eq!(data, vec![-1.0, 2.0, 3.5]);
/// ```
pub fn quantsort_mut<T, R>(data: &mut [T], rng: &mut R) -> Result<()>
where
    T: SortKey,
    R: Rng + ?Sized,
{
    QuantSorter::default().sort_in_place(data, rng)
}

//! # Quantsort
//!
//! `quantsort` is an adaptive bucket sort for numeric data. Instead of fixing
//! bucket ranges up front, it estimates them from the quantiles of a random
//! sample, so bucket sizes stay balanced for skewed or unknown distributions.
//!
//! ## How it works
//!
//! - **Sampling**: draws `min(n, max(1000, round(0.01 n)))` elements without
//!   replacement using a caller-supplied random generator.
//! - **Quantile estimation**: sorts the sample and takes `floor(sqrt(n)) - 1`
//!   evenly spaced quantiles as bucket boundaries.
//! - **Assignment**: each element goes to the bucket numbered by the count of
//!   boundaries strictly less than it (a lower-bound binary search).
//! - **Sorting**: buckets are sorted independently, optionally on the rayon
//!   pool, and concatenated in boundary order.
//!
//! ## Usage
//!
//! ```rust
//! use quantsort::quantsort;
//!
//! let sorted = quantsort(&[9, 4, 7, 1]).unwrap();
//! assert_eq!(sorted, vec![1, 4, 7, 9]);
//! ```
//!
//! For reproducible runs, pass your own generator:
//!
//! ```rust
//! use quantsort::quantsort_with_rng;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let data: Vec<f64> = (0..10_000).map(|i| ((i * 7_919) % 10_007) as f64).collect();
//!
//! let a = quantsort_with_rng(&data, &mut StdRng::seed_from_u64(42)).unwrap();
//! let b = quantsort_with_rng(&data, &mut StdRng::seed_from_u64(42)).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! Floats are ordered with `total_cmp`; a NaN anywhere in the input (of two or
//! more elements) is reported as [`SortError::IncomparableElement`].
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: close to linear when the sample tracks the true
//!   quantiles and buckets stay balanced.
//! - **Worst Case**: O(N log N) when one bucket absorbs most of the input,
//!   e.g. heavily duplicated data.
//! - **Memory Overhead**: O(N) for buckets and bucket ids, O(S) for the
//!   sample, O(sqrt N) for boundaries.

pub mod algo;
pub mod bucket;
pub mod config;
pub mod core;
pub mod error;
pub mod quantile;
pub mod sample;

pub use crate::algo::{QuantSorter, quantsort, quantsort_mut, quantsort_vec, quantsort_with_rng};
pub use crate::bucket::Buckets;
pub use crate::config::SortConfig;
pub use crate::core::SortKey;
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{QuantSorter, quantsort, quantsort_mut, quantsort_vec, quantsort_with_rng};
    pub use crate::config::SortConfig;
    pub use crate::core::SortKey;
    pub use crate::error::SortError;
}

//! Tunables for the sampler and the bucket sorter.

use crate::error::{Result, SortError};

/// Lower bound on the number of sampled elements.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 1000;

/// Fraction of the input sampled once it exceeds the minimum sample size.
pub const DEFAULT_SAMPLE_FRACTION: f64 = 0.01;

/// Input size from which buckets are sorted on the rayon pool when
/// [`SortConfig::parallel`] is set.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Configuration for a [`QuantSorter`](crate::QuantSorter).
///
/// The defaults sample `min(n, max(1000, round(0.01 * n)))` elements: the
/// whole input up to 1000 elements, a flat 1000 elements up to 100 000, and
/// from 100 000 upwards the 1% fraction takes over.
///
/// ```
/// use quantsort::SortConfig;
///
/// let config = SortConfig::default()
///     .with_min_sample_size(256)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SortConfig {
    pub min_sample_size: usize,
    pub sample_fraction: f64,
    pub parallel: bool,
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            sample_fraction: DEFAULT_SAMPLE_FRACTION,
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SortConfig {
    pub fn with_min_sample_size(mut self, min_sample_size: usize) -> Self {
        self.min_sample_size = min_sample_size;
        self
    }

    pub fn with_sample_fraction(mut self, sample_fraction: f64) -> Self {
        self.sample_fraction = sample_fraction;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Checks that every value describes a well-formed sample-size request.
    pub fn validate(&self) -> Result<()> {
        if self.min_sample_size == 0 {
            return Err(SortError::InvalidInput(
                "minimum sample size must be non-zero".to_string(),
            ));
        }
        let fraction = self.sample_fraction;
        if !fraction.is_finite() {
            return Err(SortError::InvalidInput(format!(
                "sample fraction must be finite, got {fraction}"
            )));
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(SortError::InvalidInput(format!(
                "sample fraction must lie in [0, 1], got {fraction}"
            )));
        }
        if self.parallel_threshold == 0 {
            return Err(SortError::InvalidInput(
                "parallel threshold must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an input of `len` elements should sort its buckets in parallel.
    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}

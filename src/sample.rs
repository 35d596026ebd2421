//! Sampler: draws the bounded random sample used to estimate quantiles.

use crate::config::SortConfig;
use crate::error::{Result, SortError};
use rand::Rng;

/// Number of elements to sample from an input of `n` elements.
///
/// Computes `min(n, max(min_sample_size, round(sample_fraction * n)))`, with
/// halves rounded to even.
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`] if the scaled size is negative or not
/// finite, or if a non-empty input would get an empty sample. Both only happen
/// with a malformed configuration.
///
/// ```
/// use quantsort::{SortConfig, sample::sample_size};
///
/// let config = SortConfig::default();
/// assert_eq!(sample_size(5, &config).unwrap(), 5);
/// assert_eq!(sample_size(50_000, &config).unwrap(), 1000);
/// assert_eq!(sample_size(1_000_000, &config).unwrap(), 10_000);
/// ```
pub fn sample_size(n: usize, config: &SortConfig) -> Result<usize> {
    let scaled = config.sample_fraction * n as f64;
    if !scaled.is_finite() || scaled < 0.0 {
        return Err(SortError::InvalidInput(format!(
            "sample size request {scaled} for {n} elements"
        )));
    }
    let scaled = scaled.round_ties_even() as usize;
    let k = n.min(config.min_sample_size.max(scaled));
    if k == 0 && n > 0 {
        return Err(SortError::InvalidInput(format!(
            "empty sample requested for {n} elements"
        )));
    }
    Ok(k)
}

/// Draws `k` elements uniformly at random without replacement.
///
/// Positions are chosen with [`rand::seq::index::sample`], so the input is
/// never shuffled or copied as a whole. When `k >= data.len()` every element
/// is returned in input order and `rng` is left untouched.
pub fn sample<T: Clone, R: Rng + ?Sized>(data: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let n = data.len();
    if k >= n {
        return data.to_vec();
    }

    rand::seq::index::sample(rng, n, k)
        .into_iter()
        .map(|i| data[i].clone())
        .collect()
}

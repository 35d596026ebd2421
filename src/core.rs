//! Core traits for quantsort.
//!
//! This module defines [`SortKey`], the trait element types implement so the
//! sampler, the quantile estimator and the bucket sorter can order them.

use std::cmp::Ordering;

/// A value that can be ordered by quantsort.
///
/// `key_cmp` must describe a total order over every value for which
/// `is_comparable` returns `true`. Values that report `false` are rejected
/// with [`SortError::IncomparableElement`](crate::SortError::IncomparableElement)
/// before any bucket work begins, so `key_cmp` is never asked to order them.
///
/// All primitive integers and floats implement this trait. Floats are ordered
/// with `total_cmp` and treat NaN as not comparable.
///
/// # Examples
///
/// Implementing for a custom fixed-point type:
///
/// ```
/// use quantsort::core::SortKey;
/// use std::cmp::Ordering;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Cents(i64);
///
/// impl SortKey for Cents {
///     fn key_cmp(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// let sorted = quantsort::quantsort(&[Cents(300), Cents(-5), Cents(12)]).unwrap();
/// assert_eq!(sorted, vec![Cents(-5), Cents(12), Cents(300)]);
/// ```
pub trait SortKey: Clone + Send {
    /// Compares two comparable values.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` if this value has no place in the order.
    #[inline(always)]
    fn is_comparable(&self) -> bool {
        true
    }

    /// Returns `true` if `self` orders strictly before `other`.
    #[inline(always)]
    fn key_lt(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Less
    }
}

macro_rules! impl_sort_key_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline(always)]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sort_key_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_sort_key_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortKey for $t {
                #[inline(always)]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline(always)]
                fn is_comparable(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_sort_key_float!(f32, f64);

/// Returns the index of the first element that cannot be ordered, if any.
pub(crate) fn find_incomparable<T: SortKey>(data: &[T]) -> Option<usize> {
    data.iter().position(|x| !x.is_comparable())
}

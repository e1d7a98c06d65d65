//! Histogram data model and the binning algorithm that builds it.

mod binner;
mod range;

pub use binner::{DEFAULT_BIN_COUNT, bin, bin_auto};
pub use range::KeyRange;

use serde::Serialize;

/// One histogram bucket: a numeric key range and the items that fall in it.
///
/// The range is half-open `[min, max)` unless [`is_upper_closed`] is true,
/// which only holds for the last bucket of a [`Distribution`].
///
/// [`is_upper_closed`]: DistributionGroup::is_upper_closed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionGroup<T> {
    min_range: f64,
    max_range: f64,
    upper_closed: bool,
    items: Vec<T>,
}

impl<T> DistributionGroup<T> {
    pub(crate) const fn new(min_range: f64, max_range: f64, items: Vec<T>) -> Self {
        Self {
            min_range,
            max_range,
            upper_closed: false,
            items,
        }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min_range(&self) -> f64 {
        self.min_range
    }

    /// Upper bound, exclusive except for the last bucket.
    #[must_use]
    pub const fn max_range(&self) -> f64 {
        self.max_range
    }

    #[must_use]
    pub const fn is_upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// Items in this bucket, in ascending key order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a key falls within this bucket's range.
    #[must_use]
    pub fn contains(&self, key: f64) -> bool {
        if key < self.min_range {
            return false;
        }
        if self.upper_closed {
            key <= self.max_range
        } else {
            key < self.max_range
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// An ordered, contiguous set of buckets covering `[min_range, max_range]`.
///
/// Only the binner constructs this, so every instance has at least one
/// bucket and a closed last bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution<T> {
    buckets: Vec<DistributionGroup<T>>,
    max_count: usize,
}

impl<T> Distribution<T> {
    /// Build from finished buckets. Marks the last bucket closed.
    pub(crate) fn from_buckets(mut buckets: Vec<DistributionGroup<T>>) -> Self {
        debug_assert!(!buckets.is_empty());
        if let Some(last) = buckets.last_mut() {
            last.upper_closed = true;
        }
        let max_count = buckets.iter().map(DistributionGroup::len).max().unwrap_or(0);
        Self { buckets, max_count }
    }

    #[must_use]
    pub fn buckets(&self) -> &[DistributionGroup<T>] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistributionGroup<T>> {
        self.buckets.iter()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Item count of the fullest bucket.
    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }

    /// Item count across all buckets.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(DistributionGroup::len).sum()
    }

    #[must_use]
    pub fn min_range(&self) -> f64 {
        self.buckets.first().map_or(0.0, DistributionGroup::min_range)
    }

    #[must_use]
    pub fn max_range(&self) -> f64 {
        self.buckets.last().map_or(0.0, DistributionGroup::max_range)
    }

    #[must_use]
    pub fn into_buckets(self) -> Vec<DistributionGroup<T>> {
        self.buckets
    }
}

impl<'a, T> IntoIterator for &'a Distribution<T> {
    type Item = &'a DistributionGroup<T>;
    type IntoIter = std::slice::Iter<'a, DistributionGroup<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

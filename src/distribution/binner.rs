//! Equal-width binning of keyed items.

use super::{Distribution, DistributionGroup, KeyRange};
use crate::error::{NumdistError, Result};

/// Bucket count used when none is configured.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Bin `items` into `bin_count` equal-width buckets over `[min, max]`.
///
/// Items whose key falls outside `[min, max]` (including NaN keys) are
/// dropped. Interior bucket boundaries are half-open; an item keyed exactly
/// `max` lands in the last bucket.
///
/// # Errors
/// Returns `InvalidRange` if `max <= min` or a bound is not finite, and
/// `InvalidBinCount` if `bin_count` is zero.
pub fn bin<T, I, F>(
    items: I,
    key: F,
    min: f64,
    max: f64,
    bin_count: usize,
) -> Result<Distribution<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    let range = KeyRange::new(min, max)?;
    check_bin_count(bin_count)?;
    let keyed = items.into_iter().map(|item| (key(&item), item)).collect();
    Ok(bin_keyed(keyed, range, bin_count))
}

/// Like [`bin`], with the range derived from the smallest and largest key.
///
/// # Errors
/// Returns `EmptyInput` for no items, `InvalidRange` if all keys are equal,
/// and `InvalidBinCount` if `bin_count` is zero.
pub fn bin_auto<T, I, F>(items: I, key: F, bin_count: usize) -> Result<Distribution<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    check_bin_count(bin_count)?;
    let keyed: Vec<(f64, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    let range = KeyRange::of_keys(keyed.iter().map(|(k, _)| *k))?;
    Ok(bin_keyed(keyed, range, bin_count))
}

const fn check_bin_count(bin_count: usize) -> Result<()> {
    if bin_count == 0 {
        return Err(NumdistError::InvalidBinCount(bin_count));
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn bin_keyed<T>(mut keyed: Vec<(f64, T)>, range: KeyRange, bin_count: usize) -> Distribution<T> {
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (min, max) = (range.min(), range.max());
    let mut in_range = Vec::with_capacity(keyed.len());
    let mut at_upper_edge = Vec::new();
    for (k, item) in keyed {
        if k >= min && k < max {
            in_range.push((k, item));
        } else if k == max {
            at_upper_edge.push(item);
        }
    }

    let mut sorted = in_range.into_iter().peekable();
    let mut buckets = Vec::with_capacity(bin_count);
    let mut lower = min;

    for i in 1..=bin_count {
        // Pin the last edge to `max` so rounding cannot strand in-range items
        // past the final bucket.
        let upper = if i == bin_count {
            max
        } else {
            bucket_edge(range, i, bin_count)
        };

        let mut items = Vec::new();
        while let Some((_, item)) = sorted.next_if(|(k, _)| *k < upper) {
            items.push(item);
        }
        buckets.push(DistributionGroup::new(lower, upper, items));
        lower = upper;
    }

    if let Some(last) = buckets.last_mut() {
        last.items.extend(at_upper_edge);
    }

    Distribution::from_buckets(buckets)
}

/// Lower edge of bucket `i`.
///
/// Ranges wider than `f64::MAX` overflow `max - min`; those are interpolated
/// between the bounds instead.
#[allow(clippy::cast_precision_loss)]
fn bucket_edge(range: KeyRange, i: usize, bin_count: usize) -> f64 {
    let (min, max) = (range.min(), range.max());
    let width = range.width();
    if width.is_finite() {
        return (width / bin_count as f64).mul_add(i as f64, min);
    }
    let t = i as f64 / bin_count as f64;
    min.mul_add(1.0 - t, max * t).clamp(min, max)
}

#[cfg(test)]
#[path = "binner_tests.rs"]
mod tests;

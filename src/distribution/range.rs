use serde::Serialize;

use crate::error::{NumdistError, Result};

/// A validated key range: both bounds finite and `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyRange {
    min: f64,
    max: f64,
}

impl KeyRange {
    /// Create a range from explicit bounds.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `max <= min` or either bound is not finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(NumdistError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derive the range spanned by a set of keys. NaN keys are ignored.
    ///
    /// # Errors
    /// Returns `EmptyInput` for no keys, and `InvalidRange` when every key is
    /// equal (or non-finite) so no width can be derived.
    pub fn of_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() {
            return Err(NumdistError::EmptyInput);
        }
        let (min, max) = keys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| {
            (lo.min(k), hi.max(k))
        });
        Self::new(min, max)
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether `key` lies in `[min, max]`. False for NaN.
    #[must_use]
    pub fn contains(&self, key: f64) -> bool {
        key >= self.min && key <= self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

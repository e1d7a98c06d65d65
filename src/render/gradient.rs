//! Perceptual color ramp for histogram bars.

use palette::white_point::D65;
use palette::{Clamp, FromColor, Lab, Srgb};
use serde::{Deserialize, Serialize};

use super::style::Color;
use crate::error::{NumdistError, Result};

/// A CIE L*a*b* coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            l: (other.l - self.l).mul_add(t, self.l),
            a: (other.a - self.a).mul_add(t, self.a),
            b: (other.b - self.b).mul_add(t, self.b),
        }
    }
}

/// Conversion from perceptual coordinates to a displayable color.
pub trait ColorConverter {
    fn lab_to_rgb(&self, lab: LabColor) -> Color;
}

/// CIE L*a*b* (D65) to sRGB, clamping out-of-gamut colors.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabConverter;

impl ColorConverter for LabConverter {
    fn lab_to_rgb(&self, lab: LabColor) -> Color {
        let lab = Lab::<D65, f64>::new(lab.l, lab.a, lab.b);
        let rgb = Srgb::<f64>::from_color(lab).clamp().into_format::<u8>();
        Color::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// Two-anchor gradient.
///
/// Bucket 0 gets `end`; higher buckets move toward `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(default = "default_start")]
    pub start: LabColor,
    #[serde(default = "default_end")]
    pub end: LabColor,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

const fn default_start() -> LabColor {
    LabColor::new(65.0, 65.0, -15.0)
}

const fn default_end() -> LabColor {
    LabColor::new(25.0, -40.0, -35.0)
}

impl Gradient {
    #[must_use]
    pub const fn new(start: LabColor, end: LabColor) -> Self {
        Self { start, end }
    }

    /// Anchor-swapped gradient; yields the same colors in reverse order.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// `n` colors, one per bucket.
    ///
    /// # Errors
    /// Returns `InvalidBinCount` when `n` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn colors<C: ColorConverter + ?Sized>(&self, n: usize, converter: &C) -> Result<Vec<Color>> {
        if n == 0 {
            return Err(NumdistError::InvalidBinCount(n));
        }
        let steps = (n - 1).max(1) as f64;
        Ok((0..n)
            .map(|i| self.end.lerp(self.start, i as f64 / steps))
            .map(|lab| converter.lab_to_rgb(lab))
            .collect())
    }
}

#[cfg(test)]
#[path = "gradient_tests.rs"]
mod tests;

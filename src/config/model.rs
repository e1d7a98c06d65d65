use serde::{Deserialize, Serialize};

use crate::distribution::{DEFAULT_BIN_COUNT, KeyRange};
use crate::error::{NumdistError, Result};
use crate::input::KeyColumn;
use crate::render::{
    ChartColors, DEFAULT_AXIS_SEGMENTS, DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, Gradient,
    RenderOptions,
};

/// Top-level configuration file (`.numdist.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub binning: BinningConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub gradient: Gradient,
}

impl Config {
    /// Render settings combined with the gradient section.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            absolute_axis: self.render.absolute_axis,
            axis_segments: self.render.axis_segments,
            font_size: self.render.font_size,
            colors: self.render.colors,
            gradient: self.gradient,
        }
    }
}

/// `[binning]`: how items are grouped into buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinningConfig {
    /// Number of buckets.
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Lower bound. Derived from the data when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound (inclusive). Derived from the data when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            min: None,
            max: None,
        }
    }
}

impl BinningConfig {
    /// Explicit key range, if both bounds are set.
    ///
    /// # Errors
    /// Returns `Config` if only one bound is set, or `InvalidRange` if the
    /// bounds are unusable.
    pub fn range(&self) -> Result<Option<KeyRange>> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => KeyRange::new(min, max).map(Some),
            (None, None) => Ok(None),
            _ => Err(NumdistError::Config(
                "binning.min and binning.max must be set together".to_string(),
            )),
        }
    }
}

/// `[input]`: where the key lives in each record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// 0-based field index.
    #[serde(default)]
    pub column: usize,

    /// Field separator. Any whitespace when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl InputConfig {
    #[must_use]
    pub fn key_column(&self) -> KeyColumn {
        KeyColumn::new(self.column, self.delimiter.clone())
    }
}

/// `[render]`: chart size, value axis and colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Label the value axis with counts instead of fractions.
    #[serde(default)]
    pub absolute_axis: bool,

    #[serde(default = "default_axis_segments")]
    pub axis_segments: usize,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(flatten)]
    pub colors: ChartColors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            absolute_axis: false,
            axis_segments: default_axis_segments(),
            font_size: default_font_size(),
            colors: ChartColors::default(),
        }
    }
}

const fn default_bins() -> usize {
    DEFAULT_BIN_COUNT
}

const fn default_width() -> u32 {
    DEFAULT_WIDTH
}

const fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

const fn default_axis_segments() -> usize {
    DEFAULT_AXIS_SEGMENTS
}

const fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

//! Bar-chart rasterization of a [`Distribution`].

mod format;
mod gradient;
mod layout;
mod renderer;
mod style;
mod surface;
mod text;

use image::RgbImage;

use crate::distribution::{self, Distribution, KeyRange};
use crate::error::Result;

pub use format::format_label;
pub use gradient::{ColorConverter, Gradient, LabColor, LabConverter};
pub use layout::{
    BORDER, BOTTOM_BOX_HEIGHT, LEFT_BOX_WIDTH, Layout, MIN_HEIGHT, MIN_WIDTH, Padding,
    RIGHT_PADDING, Rect, TOP_PADDING,
};
pub use renderer::{
    DEFAULT_AXIS_SEGMENTS, DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, DistributionRenderer,
    RenderOptions, axis_value, bar_fraction, column_bucket,
};
pub use style::{ChartColors, Color};
pub use surface::Surface;
pub use text::{Align, BitmapFont, TextPainter, TextStyle};

/// Bin `items` and render them as a bar chart in one call.
///
/// With no `range`, the bounds are taken from the smallest and largest key.
/// The canvas size is checked before any binning happens.
///
/// # Errors
/// Returns `InvalidResolution`, `InvalidRange`, `InvalidBinCount` or
/// `EmptyInput` depending on which argument is unusable.
pub fn render_histogram<T, I, F>(
    items: I,
    key: F,
    range: Option<KeyRange>,
    bin_count: usize,
    options: &RenderOptions,
) -> Result<RgbImage>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    Layout::new(options.width, options.height)?;

    let distribution: Distribution<T> = match range {
        Some(range) => distribution::bin(items, key, range.min(), range.max(), bin_count)?,
        None => distribution::bin_auto(items, key, bin_count)?,
    };

    DistributionRenderer::new(options.clone()).render(&distribution)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

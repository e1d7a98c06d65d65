//! Paints a [`Distribution`] as a bar chart.

use super::format::format_label;
use super::gradient::{ColorConverter, Gradient, LabConverter};
use super::layout::{Layout, Rect};
use super::style::ChartColors;
use super::surface::Surface;
use super::text::{Align, BitmapFont, TextPainter, TextStyle};
use crate::distribution::Distribution;
use crate::error::Result;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_AXIS_SEGMENTS: usize = 5;
pub const DEFAULT_FONT_SIZE: u32 = 10;

/// Gap between an axis box edge (or gridline) and its labels.
const VALUE_AXIS_INDENT: u32 = 5;
const RANGE_AXIS_INDENT: u32 = 3;
const GRIDLINE_THICKNESS: u32 = 2;
const LABEL_WIDTH: u32 = 72;
const LABEL_HEIGHT: u32 = 16;

/// Chart appearance and size.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Label the value axis with bucket counts instead of fractions of the total.
    pub absolute_axis: bool,
    /// Number of value gridlines.
    pub axis_segments: usize,
    pub font_size: u32,
    pub colors: ChartColors,
    pub gradient: Gradient,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            absolute_axis: false,
            axis_segments: DEFAULT_AXIS_SEGMENTS,
            font_size: DEFAULT_FONT_SIZE,
            colors: ChartColors::default(),
            gradient: Gradient::default(),
        }
    }
}

impl RenderOptions {
    /// Set chart dimensions.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_absolute_axis(mut self, absolute: bool) -> Self {
        self.absolute_axis = absolute;
        self
    }

    #[must_use]
    pub const fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }
}

/// Height of a bucket's bar as a fraction of the plot height.
///
/// Zero when no bucket has items.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_fraction(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    count as f64 / max_count as f64
}

/// Value represented by a gridline `fraction` of the way up the plot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_value(fraction: f64, max_count: usize, total: usize, absolute: bool) -> f64 {
    let count = fraction * max_count as f64;
    if absolute {
        count
    } else if total == 0 {
        0.0
    } else {
        count / total as f64
    }
}

/// Which bucket a bar-box column belongs to (nearest neighbour).
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn column_bucket(column: u32, box_width: u32, bucket_count: usize) -> usize {
    let index = (f64::from(column) / f64::from(box_width) * bucket_count as f64).floor() as usize;
    index.min(bucket_count.saturating_sub(1))
}

/// Renders distributions with a color converter and a text painter.
#[derive(Debug, Clone)]
pub struct DistributionRenderer<C = LabConverter, P = BitmapFont> {
    options: RenderOptions,
    converter: C,
    painter: P,
}

impl DistributionRenderer {
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self {
            options,
            converter: LabConverter,
            painter: BitmapFont,
        }
    }
}

impl Default for DistributionRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl<C: ColorConverter, P: TextPainter> DistributionRenderer<C, P> {
    /// Renderer with custom collaborators.
    #[must_use]
    pub const fn with_components(options: RenderOptions, converter: C, painter: P) -> Self {
        Self {
            options,
            converter,
            painter,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Allocate a surface of the configured size and paint `distribution` on it.
    ///
    /// # Errors
    /// Returns `InvalidResolution` if the configured size is below 400x200.
    pub fn render<S: Surface, T>(&self, distribution: &Distribution<T>) -> Result<S> {
        let layout = Layout::new(self.options.width, self.options.height)?;
        let mut surface = S::create(layout.width, layout.height);
        self.paint(&mut surface, distribution, &layout)?;
        Ok(surface)
    }

    /// Paint onto an existing surface, laid out at the surface's own size.
    ///
    /// # Errors
    /// Returns `InvalidResolution` if the surface is below 400x200.
    pub fn render_into<S: Surface + ?Sized, T>(
        &self,
        distribution: &Distribution<T>,
        surface: &mut S,
    ) -> Result<()> {
        let layout = Layout::new(surface.width(), surface.height())?;
        self.paint(surface, distribution, &layout)
    }

    fn paint<S: Surface + ?Sized, T>(
        &self,
        surface: &mut S,
        distribution: &Distribution<T>,
        layout: &Layout,
    ) -> Result<()> {
        let colors = &self.options.colors;
        surface.fill_rect(Rect::new(0, 0, layout.width, layout.height), colors.frame);
        for strip in layout.padding.rects() {
            surface.fill_rect(strip, colors.background);
        }

        self.paint_bars(surface, distribution, layout.bar_box)?;
        self.paint_value_axis(surface, distribution, layout.left_box);
        self.paint_range_axis(surface, distribution, layout.bottom_box, layout.bar_box);
        Ok(())
    }

    fn paint_bars<S: Surface + ?Sized, T>(
        &self,
        surface: &mut S,
        distribution: &Distribution<T>,
        area: Rect,
    ) -> Result<()> {
        let buckets = distribution.buckets();
        let bar_colors = self.options.gradient.colors(buckets.len(), &self.converter)?;
        let background = self.options.colors.background;

        for i in 0..area.width {
            let index = column_bucket(i, area.width, buckets.len());
            let fraction = bar_fraction(buckets[index].len(), distribution.max_count());
            let x = area.left() + i;
            for j in 0..area.height {
                let row_fraction = f64::from(j) / f64::from(area.height);
                let color = if row_fraction <= fraction {
                    bar_colors[index]
                } else {
                    background
                };
                surface.set_pixel(x, area.bottom() - j - 1, color);
            }
        }
        Ok(())
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn paint_value_axis<S: Surface + ?Sized, T>(
        &self,
        surface: &mut S,
        distribution: &Distribution<T>,
        area: Rect,
    ) {
        let options = &self.options;
        surface.fill_rect(area, options.colors.background);

        let segments = options.axis_segments;
        let total = distribution.total_count();
        let style = self.label_style(Align::Left);

        for k in 0..segments {
            let step = k as f64 / segments as f64;
            let y = area.top() + (step * f64::from(area.height)) as u32;

            let line = Rect::new(
                area.left() + VALUE_AXIS_INDENT,
                y,
                area.width.saturating_sub(VALUE_AXIS_INDENT),
                GRIDLINE_THICKNESS,
            );
            surface.fill_rect(line, options.colors.gridline);

            let value = axis_value(
                1.0 - step,
                distribution.max_count(),
                total,
                options.absolute_axis,
            );
            let label_rect = Rect::new(
                area.left() + VALUE_AXIS_INDENT,
                y + VALUE_AXIS_INDENT,
                area.width.saturating_sub(VALUE_AXIS_INDENT),
                LABEL_HEIGHT,
            );
            self.painter
                .draw_text(surface, &format_label(value), label_rect, style);
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn paint_range_axis<S: Surface + ?Sized, T>(
        &self,
        surface: &mut S,
        distribution: &Distribution<T>,
        area: Rect,
        bar_area: Rect,
    ) {
        surface.fill_rect(area, self.options.colors.background);

        let buckets = distribution.buckets();
        let Some(last) = buckets.last() else {
            return;
        };
        let n = buckets.len();
        let span = f64::from(bar_area.width);
        let style = self.label_style(Align::Center);

        for k in 0..=n {
            let x = (k as f64 / n as f64).mul_add(span, f64::from(bar_area.left())) as u32;
            let row_offset = if k % 2 == 0 { 0 } else { LABEL_HEIGHT };
            let rect = Rect::new(
                x.saturating_sub(LABEL_WIDTH / 2),
                area.top() + RANGE_AXIS_INDENT + row_offset,
                LABEL_WIDTH,
                LABEL_HEIGHT,
            );
            let boundary = buckets.get(k).map_or(last.max_range(), |b| b.min_range());
            self.painter
                .draw_text(surface, &format_label(boundary), rect, style);
        }
    }

    const fn label_style(&self, align: Align) -> TextStyle {
        TextStyle {
            size: self.options.font_size,
            align,
            color: self.options.colors.text,
        }
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;

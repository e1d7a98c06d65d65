//! Pixel surface the renderer paints into.

use image::RgbImage;

use super::layout::Rect;
use super::style::Color;

/// A writable RGB raster.
pub trait Surface {
    /// Allocate a `width` x `height` surface.
    fn create(width: u32, height: u32) -> Self
    where
        Self: Sized;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.set_pixel(x, y, color);
            }
        }
    }
}

impl Surface for RgbImage {
    fn create(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.dimensions().0 && y < self.dimensions().1 {
            self.put_pixel(x, y, color.into());
        }
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;

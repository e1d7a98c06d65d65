//! Label placement on a surface.
//!
//! Labels are short numbers, so the built-in painter carries a small 5x7
//! bitmap face rather than a font rasterizer.

use super::layout::Rect;
use super::style::Color;
use super::surface::Surface;

/// Horizontal placement of text in its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Anchored at the rectangle's top-left corner.
    #[default]
    Left,
    /// Centered on both axes.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Nominal font size in pixels.
    pub size: u32,
    pub align: Align,
    pub color: Color,
}

/// Draws a label inside a rectangle. Pixels outside the rectangle are clipped.
pub trait TextPainter {
    /// Pixel width and height of `text` at `size`.
    fn measure(&self, text: &str, size: u32) -> (u32, u32);

    fn draw_text<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, rect: Rect, style: TextStyle);
}

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Horizontal advance per character, including one column of spacing.
const ADVANCE: u32 = GLYPH_W + 1;

/// Each glyph: 7 rows, lower 5 bits per row, MSB on the left.
#[rustfmt::skip]
const GLYPHS: &[(char, [u8; 7])] = &[
    ('%', [0x18,0x19,0x02,0x04,0x08,0x13,0x03]),
    ('+', [0x00,0x04,0x04,0x1F,0x04,0x04,0x00]),
    ('-', [0x00,0x00,0x00,0x1F,0x00,0x00,0x00]),
    ('.', [0x00,0x00,0x00,0x00,0x00,0x00,0x04]),
    ('0', [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E]),
    ('1', [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E]),
    ('2', [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F]),
    ('3', [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E]),
    ('4', [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02]),
    ('5', [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E]),
    ('6', [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E]),
    ('7', [0x1F,0x01,0x02,0x04,0x08,0x08,0x08]),
    ('8', [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E]),
    ('9', [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C]),
    ('E', [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F]),
    ('N', [0x11,0x11,0x19,0x15,0x13,0x11,0x11]),
    ('a', [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F]),
    ('e', [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E]),
    ('f', [0x06,0x09,0x08,0x1C,0x08,0x08,0x08]),
    ('i', [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E]),
    ('n', [0x00,0x00,0x16,0x19,0x11,0x11,0x11]),
];

fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    GLYPHS
        .binary_search_by_key(&ch, |(c, _)| *c)
        .ok()
        .map(|i| &GLYPHS[i].1)
}

/// Built-in 5x7 bitmap face, scaled by whole pixels.
///
/// Characters without a glyph advance like a space.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapFont;

impl BitmapFont {
    /// Integer scale for a nominal size; never below 1.
    #[must_use]
    pub const fn scale(size: u32) -> u32 {
        let scale = size / GLYPH_H;
        if scale == 0 { 1 } else { scale }
    }
}

impl TextPainter for BitmapFont {
    #[allow(clippy::cast_possible_truncation)]
    fn measure(&self, text: &str, size: u32) -> (u32, u32) {
        let scale = Self::scale(size);
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, GLYPH_H * scale);
        }
        // No trailing spacing column after the last glyph.
        ((chars * ADVANCE - 1) * scale, GLYPH_H * scale)
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn draw_text<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, rect: Rect, style: TextStyle) {
        let scale = Self::scale(style.size);
        let (text_w, text_h) = self.measure(text, style.size);

        let (origin_x, origin_y) = match style.align {
            Align::Left => (i64::from(rect.x), i64::from(rect.y)),
            Align::Center => (
                i64::from(rect.x) + (i64::from(rect.width) - i64::from(text_w)) / 2,
                i64::from(rect.y) + (i64::from(rect.height) - i64::from(text_h)) / 2,
            ),
        };

        let mut plot = |px: i64, py: i64| {
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if rect.contains(px, py) {
                surface.set_pixel(px, py, style.color);
            }
        };

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch) else { continue };
            let cell_x = origin_x + (i as i64) * i64::from(ADVANCE * scale);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let x0 = cell_x + i64::from(col * scale);
                    let y0 = origin_y + (row as i64) * i64::from(scale);
                    for dy in 0..i64::from(scale) {
                        for dx in 0..i64::from(scale) {
                            plot(x0 + dx, y0 + dy);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

//! Fixed partition of the canvas into axis, plot and padding regions.
//!
//! ```text
//!  +--------+---------------------------+---------+
//!  | pad    | pad (top)                 |         |
//!  +--------+---------------------------+  pad    |
//!  | left   | bars                      | (right) |
//!  | axis   |                           |         |
//!  +--------+---------------------------+---------+
//!  | bottom axis                                  |
//!  +----------------------------------------------+
//! ```
//!
//! Every region is separated from its neighbours (and the canvas edge) by a
//! 1px border, except where padding meets the bar box directly.

use crate::error::{NumdistError, Result};

pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 200;

pub const LEFT_BOX_WIDTH: u32 = 60;
pub const BOTTOM_BOX_HEIGHT: u32 = 50;
pub const BORDER: u32 = 1;
pub const TOP_PADDING: u32 = 15;
pub const RIGHT_PADDING: u32 = 40;

/// Integer pixel rectangle. `right`/`bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn left(&self) -> u32 {
        self.x
    }

    #[must_use]
    pub const fn top(&self) -> u32 {
        self.y
    }

    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Padding strips between the plot and the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Above the left axis box.
    pub top_left: Rect,
    /// Above the bar box.
    pub top_bar: Rect,
    /// Right of the bar box, full height down to the bottom axis.
    pub right: Rect,
}

impl Padding {
    #[must_use]
    pub const fn rects(&self) -> [Rect; 3] {
        [self.top_left, self.top_bar, self.right]
    }
}

/// Canvas layout. Deterministic in `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub left_box: Rect,
    pub bottom_box: Rect,
    pub bar_box: Rect,
    pub padding: Padding,
}

impl Layout {
    /// Compute the layout for a `width` x `height` canvas.
    ///
    /// # Errors
    /// Returns `InvalidResolution` when `width < 400` or `height < 200`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(NumdistError::InvalidResolution { width, height });
        }

        let plot_height = height - BOTTOM_BOX_HEIGHT - BORDER * 3 - TOP_PADDING;
        let left_box = Rect::new(BORDER, TOP_PADDING + BORDER, LEFT_BOX_WIDTH, plot_height);
        let bottom_box = Rect::new(
            BORDER,
            height - BOTTOM_BOX_HEIGHT - BORDER,
            width - BORDER * 2,
            BOTTOM_BOX_HEIGHT,
        );
        let bar_box = Rect::new(
            left_box.right() + BORDER,
            TOP_PADDING + BORDER,
            width - LEFT_BOX_WIDTH - BORDER * 3 - RIGHT_PADDING,
            plot_height,
        );

        let padding = Padding {
            top_left: Rect::new(BORDER, BORDER, left_box.right() - BORDER, TOP_PADDING),
            top_bar: Rect::new(bar_box.left(), BORDER, bar_box.width, TOP_PADDING),
            right: Rect::new(
                width - RIGHT_PADDING - BORDER,
                BORDER,
                RIGHT_PADDING,
                bottom_box.top() - BORDER * 2,
            ),
        };

        Ok(Self {
            width,
            height,
            left_box,
            bottom_box,
            bar_box,
            padding,
        })
    }

    /// Every painted region: axes, bars, then padding.
    #[must_use]
    pub const fn regions(&self) -> [Rect; 6] {
        let [top_left, top_bar, right] = self.padding.rects();
        [
            self.left_box,
            self.bottom_box,
            self.bar_box,
            top_left,
            top_bar,
            right,
        ]
    }

    /// Pixels not covered by any region; these show the frame color.
    #[must_use]
    pub fn border_area(&self) -> u64 {
        let covered: u64 = self.regions().iter().map(Rect::area).sum();
        u64::from(self.width) * u64::from(self.height) - covered
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

//! Colors used by the chart renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
///
/// Serialized as a `#rrggbb` hex string so it reads naturally in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color '{s}': expected #rrggbb"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("Invalid color '{s}': expected #rrggbb"))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

/// Fixed chart colors (everything except the bar gradient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartColors {
    /// Fill behind bars, axes and padding.
    #[serde(default = "default_background")]
    pub background: Color,
    /// Canvas fill left visible as 1px borders between regions.
    #[serde(default = "default_frame")]
    pub frame: Color,
    /// Axis label text.
    #[serde(default = "default_text")]
    pub text: Color,
    /// Horizontal value gridlines on the left axis.
    #[serde(default = "default_gridline")]
    pub gridline: Color,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background: default_background(),
            frame: default_frame(),
            text: default_text(),
            gridline: default_gridline(),
        }
    }
}

const fn default_background() -> Color {
    Color::WHITE
}

const fn default_frame() -> Color {
    Color::BLACK
}

const fn default_text() -> Color {
    Color::BLACK
}

const fn default_gridline() -> Color {
    Color::BLACK
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;

//! Constant RGBA colors used for background and virtual-pixel fills.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseValueError, PixelFormat};

/// An 8-bit straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Rec.601 luma, rounded to the nearest integer.
    #[must_use]
    pub fn luma(self) -> u8 {
        let weighted = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        ((weighted + 500) / 1000) as u8
    }

    /// Encode this color in `format`. Only the first `format.channels()`
    /// entries of the returned array are meaningful.
    #[must_use]
    pub fn to_channels(self, format: PixelFormat) -> [u8; 4] {
        match format {
            PixelFormat::Gray => [self.luma(), 0, 0, 0],
            PixelFormat::GrayAlpha => [self.luma(), self.a, 0, 0],
            PixelFormat::Rgb => [self.r, self.g, self.b, 0],
            PixelFormat::Rgba => [self.r, self.g, self.b, self.a],
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, and a handful of names.
impl FromStr for Color {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseValueError::new("color", s);
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            "gray" | "grey" => return Ok(Color::GRAY),
            "none" | "transparent" => return Ok(Color::TRANSPARENT),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| err());
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(err()),
        }
    }
}

//! Interleaved 8-bit pixel layouts.

use serde::{Deserialize, Serialize};

/// Channel layout of a [`RasterImage`](crate::RasterImage). Every channel is 8 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// Single luma channel.
    Gray,
    /// Luma followed by alpha.
    GrayAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
}

impl PixelFormat {
    /// Number of interleaved channels per pixel.
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::GrayAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    /// Index of the alpha channel within a pixel, if the format has one.
    #[must_use]
    pub fn alpha_index(self) -> Option<usize> {
        match self {
            PixelFormat::GrayAlpha => Some(1),
            PixelFormat::Rgba => Some(3),
            PixelFormat::Gray | PixelFormat::Rgb => None,
        }
    }

    #[must_use]
    pub fn has_alpha(self) -> bool {
        self.alpha_index().is_some()
    }

    /// Smallest format able to hold pixels of both `self` and `other`
    /// without dropping color or alpha.
    #[must_use]
    pub fn union(self, other: PixelFormat) -> PixelFormat {
        let color = self.is_color() || other.is_color();
        let alpha = self.has_alpha() || other.has_alpha();
        match (color, alpha) {
            (false, false) => PixelFormat::Gray,
            (false, true) => PixelFormat::GrayAlpha,
            (true, false) => PixelFormat::Rgb,
            (true, true) => PixelFormat::Rgba,
        }
    }

    fn is_color(self) -> bool {
        matches!(self, PixelFormat::Rgb | PixelFormat::Rgba)
    }
}

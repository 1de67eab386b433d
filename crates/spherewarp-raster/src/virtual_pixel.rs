//! Policies for samples that land outside a source image.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, ParseValueError, PixelFormat};

/// How a sampler resolves a neighbor that lies outside the source grid.
///
/// Index-remapping policies (`Edge`, `Mirror`, `Wrap`) turn an out-of-range
/// index into an in-range one; fill policies (`Constant`, `Transparent`)
/// substitute a fixed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualPixel {
    /// Substitute a fixed color.
    Constant(Color),
    /// Repeat the nearest border pixel.
    #[default]
    Edge,
    /// Reflect the image about its borders, period `2n`.
    Mirror,
    /// Tile the image, period `n`.
    Wrap,
    /// All channels zero, including alpha.
    Transparent,
}

impl VirtualPixel {
    /// Map a possibly out-of-range index along an axis of length `len` to
    /// an in-range index, or `None` when the policy fills instead.
    ///
    /// `len` must be nonzero.
    #[must_use]
    pub fn resolve(self, index: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if (0..n).contains(&index) {
            return Some(index as u32);
        }
        match self {
            VirtualPixel::Constant(_) | VirtualPixel::Transparent => None,
            VirtualPixel::Edge => Some(index.clamp(0, n - 1) as u32),
            VirtualPixel::Wrap => Some(index.rem_euclid(n) as u32),
            VirtualPixel::Mirror => {
                let m = index.rem_euclid(2 * n);
                let reflected = if m >= n { 2 * n - 1 - m } else { m };
                Some(reflected as u32)
            }
        }
    }

    /// Value used when [`resolve`](Self::resolve) yields `None` or the
    /// coordinate is not a finite number.
    #[must_use]
    pub fn fill(self, format: PixelFormat) -> [u8; 4] {
        match self {
            VirtualPixel::Constant(color) => color.to_channels(format),
            _ => [0; 4],
        }
    }
}

impl fmt::Display for VirtualPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VirtualPixel::Constant(color) => write!(f, "{color}"),
            VirtualPixel::Edge => f.write_str("edge"),
            VirtualPixel::Mirror => f.write_str("mirror"),
            VirtualPixel::Wrap => f.write_str("wrap"),
            VirtualPixel::Transparent => f.write_str("transparent"),
        }
    }
}

/// Accepts `edge`, `mirror`, `wrap`, `transparent`, or any [`Color`] string
/// for a constant fill.
impl FromStr for VirtualPixel {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edge" => Ok(VirtualPixel::Edge),
            "mirror" => Ok(VirtualPixel::Mirror),
            "wrap" | "tile" => Ok(VirtualPixel::Wrap),
            "transparent" => Ok(VirtualPixel::Transparent),
            _ => s
                .parse::<Color>()
                .map(VirtualPixel::Constant)
                .map_err(|_| ParseValueError::new("virtual pixel policy", s)),
        }
    }
}

//! Sub-pixel sampling of a single source raster.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseValueError, RasterImage, VirtualPixel};

/// Reconstruction filter used between integer pixel centers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Nearest pixel center, halves rounding up.
    Nearest,
    /// Weighted blend of the four surrounding pixels.
    #[default]
    Bilinear,
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Bilinear => "bilinear",
        })
    }
}

impl FromStr for Interpolation {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "point" => Ok(Interpolation::Nearest),
            "bilinear" => Ok(Interpolation::Bilinear),
            _ => Err(ParseValueError::new("interpolation", s)),
        }
    }
}

/// Reads pixel values at fractional coordinates.
///
/// Pixel centers sit at integer coordinates. Every neighbor index is passed
/// through the [`VirtualPixel`] policy before the source buffer is read, so
/// mirror and wrap stay exact right up to the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampler {
    pub interpolation: Interpolation,
    pub virtual_pixel: VirtualPixel,
    /// When `false`, alpha is copied from the nearest neighbor instead of
    /// being blended with the color channels.
    pub interpolate_alpha: bool,
}

impl Sampler {
    #[must_use]
    pub fn new(interpolation: Interpolation, virtual_pixel: VirtualPixel) -> Self {
        Self {
            interpolation,
            virtual_pixel,
            interpolate_alpha: true,
        }
    }

    #[must_use]
    pub fn with_alpha_interpolation(mut self, enabled: bool) -> Self {
        self.interpolate_alpha = enabled;
        self
    }

    /// Sample `image` at `(x, y)` and write one pixel into `out`.
    ///
    /// `out` must hold exactly `image.format().channels()` bytes and the
    /// image must not be empty.
    pub fn sample_into(&self, image: &RasterImage, x: f64, y: f64, out: &mut [u8]) {
        let n = image.format().channels();
        debug_assert_eq!(out.len(), n);

        if !x.is_finite() || !y.is_finite() {
            out.copy_from_slice(&self.virtual_pixel.fill(image.format())[..n]);
            return;
        }

        match self.interpolation {
            Interpolation::Nearest => {
                let px = self.fetch(image, round_half_up(x), round_half_up(y));
                out.copy_from_slice(&px[..n]);
            }
            Interpolation::Bilinear => self.bilinear(image, x, y, out),
        }
    }

    fn bilinear(&self, image: &RasterImage, x: f64, y: f64, out: &mut [u8]) {
        let n = image.format().channels();
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (xi, yi) = (x0 as i64, y0 as i64);

        let p00 = self.fetch(image, xi, yi);
        let p10 = self.fetch(image, xi.saturating_add(1), yi);
        let p01 = self.fetch(image, xi, yi.saturating_add(1));
        let p11 = self.fetch(image, xi.saturating_add(1), yi.saturating_add(1));

        let w00 = (1.0 - fx) * (1.0 - fy);
        let w10 = fx * (1.0 - fy);
        let w01 = (1.0 - fx) * fy;
        let w11 = fx * fy;

        for c in 0..n {
            let v = w00 * f64::from(p00[c])
                + w10 * f64::from(p10[c])
                + w01 * f64::from(p01[c])
                + w11 * f64::from(p11[c]);
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }

        if !self.interpolate_alpha
            && let Some(a) = image.format().alpha_index()
        {
            let nearest = match (fx >= 0.5, fy >= 0.5) {
                (false, false) => p00,
                (true, false) => p10,
                (false, true) => p01,
                (true, true) => p11,
            };
            out[a] = nearest[a];
        }
    }

    /// Read one integer-addressed pixel, resolving out-of-range indices first.
    fn fetch(&self, image: &RasterImage, x: i64, y: i64) -> [u8; 4] {
        let vp = self.virtual_pixel;
        match (vp.resolve(x, image.width()), vp.resolve(y, image.height())) {
            (Some(xi), Some(yi)) => {
                let mut px = [0u8; 4];
                let src = image.pixel(xi, yi);
                px[..src.len()].copy_from_slice(src);
                px
            }
            _ => vp.fill(image.format()),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(Interpolation::default(), VirtualPixel::default())
    }
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

//! Output description for cube-to-equirectangular stitching.

use serde::{Deserialize, Serialize};
use spherewarp_raster::{Color, Interpolation};

use crate::CubeMapError;

/// Size, fill, and filter of a stitched equirectangular panorama.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanoramaSpec {
    /// Output width; defaults to four face widths.
    pub width: Option<u32>,
    /// Output height; defaults to two face widths.
    pub height: Option<u32>,
    /// Fill for pixels whose direction strikes no face.
    pub background: Color,
    pub interpolation: Interpolation,
    /// Blend alpha like the color channels.
    pub interpolate_alpha: bool,
}

impl Default for PanoramaSpec {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: Color::BLACK,
            interpolation: Interpolation::Bilinear,
            interpolate_alpha: true,
        }
    }
}

impl PanoramaSpec {
    /// Fixed-size panorama with default fill and filter.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Output size for faces of edge length `dim`.
    ///
    /// A missing dimension is derived from the other one (2:1) or, when both
    /// are missing, from the face size.
    pub fn output_size(&self, dim: u32) -> Result<(u32, u32), CubeMapError> {
        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w / 2),
            (None, Some(h)) => (h.saturating_mul(2), h),
            (None, None) => (dim.saturating_mul(4), dim.saturating_mul(2)),
        };
        if width == 0 || height == 0 {
            return Err(CubeMapError::PanoramaSize { width, height });
        }
        Ok((width, height))
    }
}

//! 2D local coordinates on a cube face.

use crate::CubeFace;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `(u=0, v=0)` is the top-left corner of the face image as seen from the
/// cube center; `u` grows to the right and `v` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Horizontal parameter in \[0, 1\].
    pub u: f64,
    /// Vertical parameter in \[0, 1\].
    pub v: f64,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Linear remap to pixel coordinates on a `dim` × `dim` face, so that
    /// the corners land on the outermost pixel centers `0` and `dim - 1`.
    #[must_use]
    pub fn to_pixel(&self, dim: u32) -> (f64, f64) {
        let extent = f64::from(dim.saturating_sub(1));
        (self.u * extent, self.v * extent)
    }
}

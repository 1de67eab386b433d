//! Equirectangular (longitude/colatitude) parameterization of the sphere.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::{CubeFace, direction_to_face};

/// Unit direction seen by pixel `(i, j)` of a `width` × `height`
/// equirectangular panorama.
///
/// Colatitude runs from 0 at the top row to π at the bottom edge; longitude
/// runs from π at the left edge down through 0 (straight ahead, `+x`) at the
/// middle column.
#[inline]
#[must_use]
pub fn equirect_direction(i: u32, j: u32, width: u32, height: u32) -> DVec3 {
    let ph = f64::from(j) * (PI / f64::from(height));
    let th = PI - f64::from(i) * (TAU / f64::from(width));
    let (sin_th, cos_th) = th.sin_cos();
    let (sin_ph, cos_ph) = ph.sin_cos();
    DVec3::new(cos_th * sin_ph, sin_th * sin_ph, cos_ph)
}

/// Face struck by every pixel of a `width` × `height` panorama, row-major.
///
/// Useful for inspecting seam placement without any source images.
#[must_use]
pub fn face_map(width: u32, height: u32) -> Vec<Option<CubeFace>> {
    let mut map = Vec::with_capacity(width as usize * height as usize);
    for j in 0..height {
        for i in 0..width {
            map.push(direction_to_face(equirect_direction(i, j, width, height)));
        }
    }
    map
}

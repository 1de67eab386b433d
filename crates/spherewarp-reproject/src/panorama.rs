//! Cube-face to equirectangular stitching.

use std::time::Instant;

use spherewarp_cubemap::{CubeFaceSet, PanoramaSpec, direction_to_face_coord, equirect_direction};
use spherewarp_raster::{RasterImage, Sampler, VirtualPixel};
use tracing::info;

use crate::exec::render_rows;
use crate::{Execution, ReprojectError};

/// Stitch six cube faces into an equirectangular panorama.
///
/// The output takes the faces' pixel format. Every direction strikes a face,
/// so the edge-clamp policy only guards rounding at face borders.
pub fn reproject_cube_to_panorama(
    faces: &CubeFaceSet,
    spec: &PanoramaSpec,
) -> Result<RasterImage, ReprojectError> {
    reproject_cube_to_panorama_with(faces, spec, &Execution::default())
}

/// [`reproject_cube_to_panorama`] with explicit execution settings.
pub fn reproject_cube_to_panorama_with(
    faces: &CubeFaceSet,
    spec: &PanoramaSpec,
    exec: &Execution,
) -> Result<RasterImage, ReprojectError> {
    let start = Instant::now();
    let dim = faces.dim();
    let (width, height) = spec.output_size(dim)?;
    let format = faces.format();
    let sampler = Sampler::new(spec.interpolation, VirtualPixel::Edge)
        .with_alpha_interpolation(spec.interpolate_alpha);
    let background = spec.background.to_channels(format);
    let background = &background[..format.channels()];

    let mut dest = RasterImage::new(width, height, format);
    let threads = render_rows(&mut dest, exec, |i, j, px| {
        match direction_to_face_coord(equirect_direction(i, j, width, height)) {
            Some(coord) => {
                let (x, y) = coord.to_pixel(dim);
                sampler.sample_into(&faces[coord.face], x, y, px);
            }
            None => px.copy_from_slice(background),
        }
    })?;

    info!(
        dim,
        width,
        height,
        threads,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Panorama stitching complete"
    );
    Ok(dest)
}

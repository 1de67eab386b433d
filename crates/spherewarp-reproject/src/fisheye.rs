//! Fisheye lens simulation and its inverse.

use std::time::Instant;

use glam::DVec2;
use spherewarp_lens::{FisheyeDirection, LensSample, LensSpec};
use spherewarp_raster::{Interpolation, RasterImage, Sampler, VirtualPixel};
use tracing::{debug, info};

use crate::exec::render_rows;
use crate::{Execution, ReprojectError};

/// Reproject `source` through the lens described by `spec`.
///
/// `virtual_pixel` resolves samples that land inside the lens disk but
/// outside the source; pixels outside the disk take `spec.background`.
/// The output has the source's dimensions and pixel format.
pub fn reproject_fisheye(
    source: &RasterImage,
    spec: &LensSpec,
    direction: FisheyeDirection,
    virtual_pixel: VirtualPixel,
    interpolation: Interpolation,
) -> Result<RasterImage, ReprojectError> {
    let sampler = Sampler::new(interpolation, virtual_pixel);
    reproject_fisheye_with(source, spec, direction, &sampler, &Execution::default())
}

/// [`reproject_fisheye`] with an explicit sampler and execution settings.
pub fn reproject_fisheye_with(
    source: &RasterImage,
    spec: &LensSpec,
    direction: FisheyeDirection,
    sampler: &Sampler,
    exec: &Execution,
) -> Result<RasterImage, ReprojectError> {
    let start = Instant::now();
    let (width, height) = source.dimensions();
    let geometry = spec.resolve(width, height)?;
    debug!(
        ?direction,
        family = %geometry.family(),
        center = ?geometry.center(),
        radius = geometry.radius(),
        focal = geometry.focal(),
        "Resolved lens geometry"
    );

    let format = source.format();
    let background = spec.background.to_channels(format);
    let background = &background[..format.channels()];

    let mut dest = RasterImage::new(width, height, format);
    let threads = render_rows(&mut dest, exec, |x, y, px| {
        match geometry.map(direction, DVec2::new(f64::from(x), f64::from(y))) {
            LensSample::Background => px.copy_from_slice(background),
            LensSample::Source(at) => sampler.sample_into(source, at.x, at.y, px),
        }
    })?;

    info!(
        width,
        height,
        threads,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Fisheye reprojection complete"
    );
    Ok(dest)
}

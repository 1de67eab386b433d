//! Reprojection driver: evaluates a lens or cube-map mapping for every
//! destination pixel and samples the source(s) there.
//!
//! Each destination pixel is a pure function of its coordinate, the
//! configuration, and the read-only sources, so rows are rendered in
//! parallel bands with no shared mutable state.

mod error;
mod exec;
mod fisheye;
mod panorama;

pub use error::ReprojectError;
pub use exec::{CancelToken, Execution};
pub use fisheye::{reproject_fisheye, reproject_fisheye_with};
pub use panorama::{reproject_cube_to_panorama, reproject_cube_to_panorama_with};

pub use spherewarp_cubemap::{CubeFace, CubeFaceSet, PanoramaSpec};
pub use spherewarp_lens::{FisheyeDirection, LensFamily, LensFormat, LensSpec};
pub use spherewarp_raster::{Color, Interpolation, PixelFormat, RasterImage, Sampler, VirtualPixel};

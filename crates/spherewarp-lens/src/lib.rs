//! Lens geometry: fisheye projection laws, the pinhole model, and the
//! per-pixel mapping between a fisheye disk and a perspective image.

mod error;
mod family;
mod geometry;
mod pinhole;
mod spec;

pub use error::LensError;
pub use family::LensFamily;
pub use geometry::{LensGeometry, LensSample};
pub use pinhole::{angle_to_source_offset, focal_length, source_offset_to_angle};
pub use spec::{FisheyeDirection, LensFormat, LensSpec};

//! Raster buffers, constant colors, virtual-pixel policies, and sub-pixel sampling.
//!
//! Everything here is read-only with respect to source images: a [`Sampler`]
//! resolves a fractional coordinate into a pixel value without ever touching
//! memory outside the source buffer, consulting the [`VirtualPixel`] policy for
//! any neighbor that falls off the grid.

mod color;
mod error;
mod format;
mod raster;
mod sampler;
pub mod toolkit;
mod virtual_pixel;

pub use color::Color;
pub use error::{ParseValueError, RasterError};
pub use format::PixelFormat;
pub use raster::RasterImage;
pub use sampler::{Interpolation, Sampler};
pub use virtual_pixel::VirtualPixel;

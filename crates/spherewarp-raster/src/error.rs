//! Raster error types.

use thiserror::Error;

use crate::PixelFormat;

/// Errors produced while building, loading, or saving rasters.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The buffer length does not match `width * height * channels`.
    #[error("buffer of {actual} bytes does not fit a {width}x{height} {format:?} image ({expected} bytes)")]
    BufferSize {
        width: u32,
        height: u32,
        format: PixelFormat,
        expected: usize,
        actual: usize,
    },

    /// Decode, encode, or format error reported by the image backend.
    #[error("image backend error: {0}")]
    Backend(#[from] image::ImageError),
}

/// A textual value (color, policy, interpolation name) that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseValueError {
    /// What was being parsed, e.g. `"color"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseValueError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

//! Cube-map errors.

use spherewarp_raster::PixelFormat;

use crate::CubeFace;

/// A cube face set or panorama description that cannot be stitched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CubeMapError {
    /// A face is not square.
    #[error("{face} face must be square, got {width}x{height}")]
    NotSquare {
        face: CubeFace,
        width: u32,
        height: u32,
    },

    /// A face differs in size from the first face.
    #[error("{face} face is {dim}x{dim} but the {reference} face is {expected}x{expected}")]
    SizeMismatch {
        face: CubeFace,
        dim: u32,
        reference: CubeFace,
        expected: u32,
    },

    /// A face has a different pixel format from the first face.
    #[error("{face} face is {format:?} but the {reference} face is {expected:?}")]
    FormatMismatch {
        face: CubeFace,
        format: PixelFormat,
        reference: CubeFace,
        expected: PixelFormat,
    },

    /// Faces have no pixels.
    #[error("cube faces must not be empty")]
    Empty,

    /// The same face was supplied twice.
    #[error("{0} face supplied more than once")]
    DuplicateFace(CubeFace),

    /// A face was not supplied.
    #[error("{0} face is missing")]
    MissingFace(CubeFace),

    /// Explicit panorama size with a zero dimension.
    #[error("panorama size must be positive, got {width}x{height}")]
    PanoramaSize { width: u32, height: u32 },

    /// Unrecognized face name.
    #[error("unknown cube face: {0:?}")]
    UnknownFace(String),
}

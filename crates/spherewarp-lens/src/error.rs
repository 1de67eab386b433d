//! Lens configuration errors.

/// A lens configuration that cannot be used for reprojection.
///
/// These are detected before any pixel is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LensError {
    /// Input (perspective) field of view outside the open interval (0, 180).
    #[error("input field of view must be greater than 0 and less than 180 degrees, got {0}")]
    InputFov(f64),

    /// Output (fisheye) field of view outside (0, 180].
    #[error("output field of view must be greater than 0 and at most 180 degrees, got {0}")]
    OutputFov(f64),

    /// Explicit radius that is not a positive finite number.
    #[error("lens radius must be a positive number, got {0}")]
    Radius(f64),

    /// Rotation outside [0, 360).
    #[error("rotation angle must be at least 0 and less than 360 degrees, got {0}")]
    Angle(f64),

    /// Center coordinates that are not finite.
    #[error("lens center must be finite, got ({0}, {1})")]
    Center(f64, f64),

    /// The image the lens is applied to has no pixels.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Unrecognized name for a lens family, format, or direction.
    #[error("unknown {kind}: {value:?}")]
    UnknownName { kind: &'static str, value: String },
}

//! Configuration error types.

use spherewarp_lens::LensError;

/// Errors that can occur when loading, saving, or checking configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The `lens` section describes an unusable lens.
    #[error("invalid lens settings: {0}")]
    Lens(#[from] LensError),

    /// A panorama dimension was set to zero.
    #[error("panorama {0} must be greater than 0")]
    PanoramaSize(&'static str),
}

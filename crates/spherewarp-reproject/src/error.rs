//! Reprojection errors.

use spherewarp_cubemap::CubeMapError;
use spherewarp_lens::LensError;

/// Why a reprojection produced no output.
///
/// Configuration problems are reported before the first pixel is computed.
/// Per-pixel geometric edge cases are never errors; they resolve to the
/// background or virtual-pixel value.
#[derive(Debug, thiserror::Error)]
pub enum ReprojectError {
    /// Invalid lens description.
    #[error("invalid lens: {0}")]
    Lens(#[from] LensError),

    /// Invalid cube faces or panorama description.
    #[error("invalid cube map: {0}")]
    CubeMap(#[from] CubeMapError),

    /// Cancelled through a [`CancelToken`](crate::CancelToken). The partial
    /// output is discarded.
    #[error("reprojection cancelled after {rows_completed} rows")]
    Cancelled { rows_completed: u32 },

    /// A worker thread could not be started.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// A worker thread panicked.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

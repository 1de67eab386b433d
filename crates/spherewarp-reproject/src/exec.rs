//! Row-banded parallel execution over a destination raster.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use spherewarp_raster::RasterImage;

use crate::ReprojectError;

const MAX_WORKERS_PER_CPU: usize = 4;

/// Shared flag that stops a running reprojection at the next row boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a reprojection is run.
#[derive(Clone, Debug, Default)]
pub struct Execution {
    /// Worker thread count. `0` uses one per logical CPU.
    pub threads: usize,
    /// Optional cancellation, checked once per row.
    pub cancel: Option<CancelToken>,
}

impl Execution {
    /// Run on the calling thread only.
    pub fn single_threaded() -> Self {
        Self {
            threads: 1,
            cancel: None,
        }
    }

    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Resolved worker count: at least one, at most four per logical CPU.
    pub fn worker_count(&self) -> usize {
        let cpus = num_cpus::get().max(1);
        match self.threads {
            0 => cpus,
            n => n.min(cpus * MAX_WORKERS_PER_CPU),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Fill every pixel of `dest` with `shade(x, y, pixel)`.
///
/// Rows are split into contiguous bands, one per worker; each band is a
/// disjoint slice of the destination buffer, so every pixel is written by
/// exactly one worker. Every band runs on a scoped worker thread, so a
/// panic in `shade` is reported as [`ReprojectError::WorkerPanicked`]
/// whatever the thread count. Returns the number of bands rendered.
pub(crate) fn render_rows<F>(
    dest: &mut RasterImage,
    exec: &Execution,
    shade: F,
) -> Result<usize, ReprojectError>
where
    F: Fn(u32, u32, &mut [u8]) + Sync,
{
    let height = dest.height();
    let stride = dest.row_stride();
    let channels = dest.format().channels();
    if dest.is_empty() {
        return Ok(0);
    }

    let rows_per_band = (height as usize).div_ceil(exec.worker_count());
    let threads = (height as usize).div_ceil(rows_per_band);
    let completed = AtomicU32::new(0);

    let render_band = |first_row: usize, band: &mut [u8]| {
        for (k, row) in band.chunks_mut(stride).enumerate() {
            if exec.is_cancelled() {
                return;
            }
            let y = (first_row + k) as u32;
            for (x, px) in row.chunks_exact_mut(channels).enumerate() {
                shade(x as u32, y, px);
            }
            completed.fetch_add(1, Ordering::Relaxed);
        }
    };

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        let mut spawn_error = None;
        for (band_index, band) in dest.as_raw_mut().chunks_mut(rows_per_band * stride).enumerate() {
            let render_band = &render_band;
            let spawned = std::thread::Builder::new()
                .name("reproject-worker".into())
                .spawn_scoped(scope, move || render_band(band_index * rows_per_band, band));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        // Join every worker before leaving the scope.
        let panicked = handles
            .into_iter()
            .fold(false, |panicked, handle| handle.join().is_err() || panicked);
        if panicked {
            return Err(ReprojectError::WorkerPanicked);
        }
        match spawn_error {
            Some(e) => Err(ReprojectError::Spawn(e)),
            None => Ok(()),
        }
    })?;

    let rows_completed = completed.load(Ordering::Relaxed);
    if rows_completed < height {
        return Err(ReprojectError::Cancelled { rows_completed });
    }
    Ok(threads)
}

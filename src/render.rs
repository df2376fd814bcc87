// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel renderer.  The image is cut into horizontal bands, one
//! per worker, and each worker owns its band outright: the bands are
//! disjoint slices of the one buffer, so the workers share nothing
//! mutable and need no locks.  The renderer waits for every worker
//! before handing the buffer back.

use itertools::iproduct;
use std::num::NonZeroUsize;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::errors::RenderError;
use crate::escape::intensity;
use crate::partition::{plan, RowRange};
use crate::pixels::{Band, PixelBuffer, CHANNELS};
use crate::planes::{Pixel, PlaneMapper};

/// What a worker needs to know about the frame, apart from its band.
#[derive(Copy, Clone, Debug)]
struct Job {
    plane: PlaneMapper,
    limit: u32,
    threshold: u32,
}

impl<'a> From<&'a RenderConfig> for Job {
    fn from(config: &'a RenderConfig) -> Job {
        Job {
            plane: PlaneMapper::from(config),
            limit: config.iteration(),
            threshold: config.threshold(),
        }
    }
}

/// Fills every cell of `band`.  Cells are visited in row-major order,
/// which is the order they are laid out in the slice.
fn render_band(job: Job, band: Band<'_>) {
    let width = job.plane.integral_plane.0;
    let cells = band.rows.chunks_exact_mut(CHANNELS);
    for (cell, (py, px)) in cells.zip(iproduct!(band.range.rows(), 0..width)) {
        let c = job.plane.pixel_to_point(&Pixel(px, py));
        cell[0] = intensity(c, job.limit, job.threshold);
        cell[1] = 255;
    }
}

/// Renders `config` with one worker per band of rows, using `workers`
/// bands.  Returns only once every worker has finished; if any of
/// them fails, the whole render fails and nothing is returned.
pub fn render(config: &RenderConfig, workers: NonZeroUsize) -> Result<PixelBuffer, RenderError> {
    render_with(config, workers, render_band)
}

fn render_with(
    config: &RenderConfig,
    workers: NonZeroUsize,
    fill: fn(Job, Band<'_>),
) -> Result<PixelBuffer, RenderError> {
    let mut buffer = PixelBuffer::new(config.width(), config.height())?;
    let ranges = plan(config.height(), workers);
    let job = Job::from(config);
    info!(
        width = config.width(),
        height = config.height(),
        workers = ranges.len(),
        "rendering"
    );

    let outcome = crossbeam::scope(|spawner| {
        let handles: Vec<(RowRange, _)> = buffer
            .bands_mut(&ranges)
            .into_iter()
            .map(|band| {
                let range = band.range;
                let handle = spawner.spawn(move |_| {
                    fill(job, band);
                    debug!(start = range.start, end = range.end, "band complete");
                });
                (range, handle)
            })
            .collect();

        for (range, handle) in handles {
            handle.join().map_err(|_| RenderError::WorkerPanicked {
                start: range.start,
                end: range.end,
            })?;
        }
        Ok::<(), RenderError>(())
    });

    match outcome {
        Ok(Ok(())) => {
            info!("render complete");
            Ok(buffer)
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(RenderError::WorkerPanicked {
            start: 0,
            end: config.height(),
        }),
    }
}

/// Renders on one band per logical CPU.
pub fn render_default(config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    render(config, crate::partition::default_workers())
}

use image::RgbImage;
use rayon::prelude::*;

use crate::foundation::core::{Extent, PixelCoord};
use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};
use crate::projection::pipeline::Projection;
use crate::render::progress::ProgressSink;

const CHANNELS: usize = 3;

/// How the sampling loop is scheduled.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Sample output rows on a rayon thread pool instead of the calling thread.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Summary of a finished render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Output pixels written.
    pub pixels_total: u64,
    /// Output rows written.
    pub rows_total: u64,
    /// Whether the rows were sampled in parallel.
    pub parallel: bool,
}

/// Fill a freshly allocated output image by sampling `source` through `projection`.
///
/// Every output pixel is written exactly once. Sequential mode scans row-major; parallel mode
/// hands disjoint output rows to rayon workers and produces identical bytes. `progress` gets one
/// `advance` per finished row.
#[tracing::instrument(
    skip_all,
    fields(output = %projection.output(), parallel = threading.parallel)
)]
pub fn render_projection(
    source: &RgbImage,
    projection: &Projection,
    threading: &RenderThreading,
    progress: &dyn ProgressSink,
) -> TinyPlanetResult<(RgbImage, RenderStats)> {
    let (src_w, src_h) = source.dimensions();
    if Extent::new(src_w, src_h)? != projection.source() {
        return Err(TinyPlanetError::validation(format!(
            "source image is {src_w}x{src_h} but the projection expects {}",
            projection.source()
        )));
    }

    let output = projection.output();
    let mut out = RgbImage::new(output.width, output.height);
    let row_len = output.width as usize * CHANNELS;
    let src = source.as_raw().as_slice();
    let row_pixels = u64::from(output.width);

    progress.begin(output.pixel_count());

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let data: &mut [u8] = &mut out;
        pool.install(|| {
            data.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(row, out_row)| {
                    sample_row(src, projection, row, out_row);
                    progress.advance(row_pixels);
                });
        });
    } else {
        let data: &mut [u8] = &mut out;
        for (row, out_row) in data.chunks_exact_mut(row_len).enumerate() {
            sample_row(src, projection, row, out_row);
            progress.advance(row_pixels);
        }
    }

    progress.finish();

    let stats = RenderStats {
        pixels_total: output.pixel_count(),
        rows_total: u64::from(output.height),
        parallel: threading.parallel,
    };
    tracing::debug!(?stats, "render finished");
    Ok((out, stats))
}

/// Sample one output row into `out_row`.
///
/// `src` is the tightly packed RGB8 source and must hold `projection.source()` pixels.
pub fn sample_row(src: &[u8], projection: &Projection, row: usize, out_row: &mut [u8]) {
    let src_w = projection.source().width as usize;
    for (col, px) in out_row.chunks_exact_mut(CHANNELS).enumerate() {
        let s = projection.source_pixel(PixelCoord::new(row, col));
        let idx = (s.row * src_w + s.col) * CHANNELS;
        px.copy_from_slice(&src[idx..idx + CHANNELS]);
    }
}

fn build_thread_pool(threads: Option<usize>) -> TinyPlanetResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TinyPlanetError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        TinyPlanetError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/sampler.rs"]
mod tests;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Observer for sampling progress.
///
/// Called from worker threads in parallel mode, hence `&self` and `Sync`. Calls to `advance`
/// may arrive in any order across rows; their sum equals the `begin` total once the render
/// completes.
pub trait ProgressSink: Sync {
    /// Called once before any pixel is sampled.
    fn begin(&self, _total_pixels: u64) {}
    /// `pixels` more output pixels have been written.
    fn advance(&self, pixels: u64);
    /// Called once after the last pixel is written.
    fn finish(&self) {}
}

/// Discards all progress events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn advance(&self, _pixels: u64) {}
}

/// Counts progress events. Useful for tests and for callers polling from another thread.
#[derive(Debug, Default)]
pub struct CountingProgress {
    total: AtomicU64,
    done: AtomicU64,
    finished: AtomicBool,
}

impl CountingProgress {
    /// Fresh counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total announced in `begin`.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Pixels reported so far.
    pub fn done(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    /// Whether `finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl ProgressSink for CountingProgress {
    fn begin(&self, total_pixels: u64) {
        self.total.store(total_pixels, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
        self.finished.store(false, Ordering::Release);
    }

    fn advance(&self, pixels: u64) {
        self.done.fetch_add(pixels, Ordering::Relaxed);
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::Release);
    }
}

/// Emits a `tracing` info event each time another `step_percent` of the image is done.
#[derive(Debug)]
pub struct LogProgress {
    step_percent: u64,
    total: AtomicU64,
    done: AtomicU64,
    last_reported: AtomicU64,
}

impl LogProgress {
    /// Report every `step_percent` percent (clamped to `1..=100`).
    pub fn new(step_percent: u8) -> Self {
        Self {
            step_percent: u64::from(step_percent.clamp(1, 100)),
            total: AtomicU64::new(0),
            done: AtomicU64::new(0),
            last_reported: AtomicU64::new(0),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressSink for LogProgress {
    fn begin(&self, total_pixels: u64) {
        self.total.store(total_pixels, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
        self.last_reported.store(0, Ordering::Relaxed);
        tracing::info!(total_pixels, "sampling started");
    }

    fn advance(&self, pixels: u64) {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return;
        }
        let done = self.done.fetch_add(pixels, Ordering::Relaxed) + pixels;
        let percent = (done.min(total) * 100) / total;
        let bucket = percent / self.step_percent * self.step_percent;
        // Only the thread that moves the high-water mark reports.
        if bucket > 0 && self.last_reported.fetch_max(bucket, Ordering::Relaxed) < bucket {
            tracing::info!(percent = bucket, done, total, "sampling progress");
        }
    }

    fn finish(&self) {
        tracing::info!(done = self.done.load(Ordering::Relaxed), "sampling finished");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/progress.rs"]
mod tests;

//! Splits the rows of an image into contiguous bands, one per worker.

use std::num::NonZeroUsize;
use std::ops::Range;

/// A half-open interval of image rows, `start..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowRange {
    /// First row in the band.
    pub start: u32,
    /// One past the last row in the band.
    pub end: u32,
}

impl RowRange {
    /// The number of rows in the band.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Whether the band has no rows; a worker given one does nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The rows themselves, in order.
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// The number of workers to use when none is asked for: one per
/// logical CPU.
pub fn default_workers() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

/// Divides `height` rows among `workers` workers.  Every band gets
/// `height / workers` rows except the last, which runs to `height`
/// and so absorbs the remainder.  When there are fewer rows than
/// workers, every band but the last is empty.
pub fn plan(height: u32, workers: NonZeroUsize) -> Vec<RowRange> {
    let workers = workers.get();
    let range_size = (height as usize / workers) as u32;
    (0..workers)
        .map(|i| {
            let start = i as u32 * range_size;
            let end = if i + 1 == workers {
                height
            } else {
                start + range_size
            };
            RowRange { start, end }
        })
        .collect()
}

//! The image buffer the renderer fills in.  Cells are grayscale with
//! alpha, stored row-major as `[luma, alpha]` byte pairs.  A freshly
//! allocated buffer is all zeroes, so an alpha of 0 marks a cell no
//! worker has written yet.

use image::LumaA;

use crate::errors::RenderError;
use crate::partition::RowRange;

/// Bytes per cell: one luma, one alpha.
pub const CHANNELS: usize = 2;

/// A width x height grid of grayscale-with-alpha cells.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

/// A worker's exclusive view of the buffer: the rows of `range`, and
/// nothing else.
#[derive(Debug)]
pub struct Band<'a> {
    /// Which rows of the image these are.
    pub range: RowRange,
    /// The rows' samples, `range.len() * width * CHANNELS` bytes.
    pub rows: &'a mut [u8],
}

impl PixelBuffer {
    /// Allocates a zeroed buffer, failing if its size overflows.
    pub fn new(width: u32, height: u32) -> Result<PixelBuffer, RenderError> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|cells| cells.checked_mul(CHANNELS))
            .ok_or(RenderError::BufferTooLarge { width, height })?;
        Ok(PixelBuffer {
            width,
            height,
            samples: vec![0 as u8; size],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The bytes of one row.
    fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// The cell at column `px`, row `py`, if it is inside the image.
    pub fn get(&self, px: u32, py: u32) -> Option<LumaA<u8>> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let offset = py as usize * self.stride() + px as usize * CHANNELS;
        Some(LumaA([self.samples[offset], self.samples[offset + 1]]))
    }

    /// Whether every cell has been written.
    pub fn is_complete(&self) -> bool {
        self.samples.chunks(CHANNELS).all(|cell| cell[1] == 255)
    }

    /// The raw samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.samples
    }

    /// Hands out one mutable band per range.  The ranges must be in
    /// order, start at row 0, leave no gaps, and end at the last row;
    /// anything else is a bug in the caller and panics.  Because each
    /// band is carved off the remainder with `split_at_mut`, no two
    /// bands can ever overlap.
    pub fn bands_mut(&mut self, ranges: &[RowRange]) -> Vec<Band<'_>> {
        let stride = self.stride();
        let mut rest: &mut [u8] = &mut self.samples;
        let mut next_row = 0;
        let mut bands = Vec::with_capacity(ranges.len());
        for range in ranges {
            assert_eq!(range.start, next_row, "row ranges must be contiguous");
            assert!(range.start <= range.end, "row range is inverted");
            let (rows, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * stride);
            rest = tail;
            next_row = range.end;
            bands.push(Band {
                range: *range,
                rows,
            });
        }
        assert_eq!(next_row, self.height, "row ranges must cover the image");
        assert!(rest.is_empty());
        bands
    }
}

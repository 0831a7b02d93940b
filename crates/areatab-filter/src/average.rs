//! Average-area table construction
//!
//! An average-area table stores, at each cell, the mean of the source over
//! the rectangle from the origin to that cell, instead of the sum. The mean
//! never exceeds the source range, so the table fits in the source bit depth
//! plus whatever fractional bits the scale factor adds - but the true sum is
//! only approximately recoverable, which is the precision trade-off under
//! study.

use crate::dither::DitherSource;
use crate::{FilterError, FilterResult, SumTable};

/// Average-area table derived from a [`SumTable`].
///
/// Each cell encodes `trunc(scale * sum / ((x+1)*(y+1)) + d(x,y))` where
/// `d` is the dither offset. The scale factor is a power-of-two multiplier
/// standing for extra fractional bits: 1, 4, 16, 256 give 8-, 10-, 12- and
/// 16-bit codes for 8-bit sources.
pub struct AvgTable {
    width: u32,
    height: u32,
    scale: u32,
    cells: Vec<u32>,
}

impl AvgTable {
    /// Quantize a summed-area table into an average-area table.
    ///
    /// The rectangle at (0,0) covers a single pixel (range size 1), so there
    /// is no division hazard at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sat` carries a bias
    /// (per-pixel averages of a mean-centered table are not meaningful) or
    /// if `scale` is not a power of two.
    pub fn build(
        sat: &SumTable,
        scale: u32,
        dither: &mut dyn DitherSource,
    ) -> FilterResult<AvgTable> {
        if sat.bias() != 0 {
            return Err(FilterError::InvalidParameters(
                "average table requires an unbiased sum table".into(),
            ));
        }
        if scale == 0 || !scale.is_power_of_two() {
            return Err(FilterError::InvalidParameters(format!(
                "scale must be a power of two, got {}",
                scale
            )));
        }

        let w = sat.width();
        let h = sat.height();
        let mut cells = Vec::with_capacity(w as usize * h as usize);

        for y in 0..h {
            for x in 0..w {
                let sum = sat.cell(x, y) as f64;
                let range_size = (x as f64 + 1.0) * (y as f64 + 1.0);
                let code = scale as f64 * sum / range_size + dither.sample(x, y) as f64;
                cells.push(code as u32);
            }
        }

        Ok(AvgTable {
            width: w,
            height: h,
            scale,
            cells,
        })
    }

    /// Table width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Table height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The fixed-point scale factor the codes were multiplied by.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Stored code at (x, y). The caller must ensure the coordinates are
    /// in bounds.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub(crate) fn cells(&self) -> &[u32] {
        &self.cells
    }
}

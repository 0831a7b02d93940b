//! Summed-area table construction
//!
//! A summed-area table (integral image) holds, at each cell, the running
//! 2-D prefix sum of the source image, enabling rectangle-sum queries in
//! O(1) via four corner lookups.
//!
//! The recursion is: `a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`
//! with out-of-bounds terms treated as zero.
//!
//! The biased variant subtracts a constant from every source sample before
//! accumulating, which centers the stored values around zero when the bias
//! is close to the image mean and shrinks the bit width they need. An
//! out-of-bounds corner stands for an empty rectangle, whose accumulated
//! biased sum is exactly zero, so the corner-zeroing rule is unchanged;
//! the true sum of a window of `area` pixels is recovered as
//! `(A + D - B - C) + bias * area`.

use areatab_core::GrayImage;

/// Summed-area table over an 8 bpp grayscale image.
///
/// Cells are stored as `i64`: wide enough for the worst-case unsigned sum
/// (`255 * width * height`) and for the negative excursions of the biased
/// variant. Whether a narrower fixed-point representation would overflow
/// is reported by [`stats`](SumTable::stats), not enforced here.
pub struct SumTable {
    width: u32,
    height: u32,
    bias: i64,
    cells: Vec<i64>,
}

impl SumTable {
    /// Build a plain (bias 0) summed-area table from a grayscale image.
    ///
    /// A single raster-order pass suffices: each cell depends only on its
    /// left, top, and top-left neighbors.
    pub fn build(src: &GrayImage) -> SumTable {
        Self::build_biased(src, 0)
    }

    /// Build a summed-area table with `bias` subtracted from every sample.
    pub fn build_biased(src: &GrayImage, bias: i64) -> SumTable {
        let w = src.width() as usize;
        let h = src.height() as usize;
        let mut cells = vec![0i64; w * h];

        // First pixel
        cells[0] = src.get_unchecked(0, 0) as i64 - bias;

        // First row: cumulative sum along x
        for x in 1..w {
            cells[x] = src.get_unchecked(x as u32, 0) as i64 - bias + cells[x - 1];
        }

        // First column: cumulative sum along y
        for y in 1..h {
            cells[y * w] = src.get_unchecked(0, y as u32) as i64 - bias + cells[(y - 1) * w];
        }

        // Interior: a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)
        for y in 1..h {
            for x in 1..w {
                let idx = y * w + x;
                cells[idx] = src.get_unchecked(x as u32, y as u32) as i64 - bias
                    + cells[idx - 1]
                    + cells[idx - w]
                    - cells[idx - w - 1];
            }
        }

        SumTable {
            width: src.width(),
            height: src.height(),
            bias,
            cells,
        }
    }

    /// Table width in cells (same as the source image).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Table height in cells (same as the source image).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The per-pixel bias subtracted during construction (0 for plain SATs).
    pub fn bias(&self) -> i64 {
        self.bias
    }

    /// Stored cell value at (x, y). The caller must ensure the coordinates
    /// are in bounds.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> i64 {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub(crate) fn cells(&self) -> &[i64] {
        &self.cells
    }
}

//! O(1) box-average queries via inclusion-exclusion
//!
//! Given any accumulation table, the sum of a window is reconstructed from
//! four corner lookups: `A + D - B - C`, where A is the corner just outside
//! the window's top-left and D is its bottom-right. Corners that fall
//! outside the table stand for empty rectangles and contribute zero.
//!
//! Boundary handling is clamped, not periodic: when a window touches the
//! image edge the effective area shrinks, and the shrunken area is what the
//! sum is divided by - never the nominal `(2r+1)^2`.

use crate::{AvgTable, FilterResult, SumTable};
use areatab_core::GrayImage;

/// An accumulation table that can reconstruct origin-anchored rectangle
/// sums at any corner, making the query logic independent of how the table
/// stores its cells.
pub trait AreaTable {
    /// Table width in cells.
    fn width(&self) -> u32;

    /// Table height in cells.
    fn height(&self) -> u32;

    /// The source sum over the rectangle from the origin to (x, y)
    /// inclusive. A coordinate of -1 denotes an empty rectangle (sum 0).
    fn corner_sum(&self, x: i64, y: i64) -> f64;
}

impl AreaTable for SumTable {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn corner_sum(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 {
            return 0.0;
        }
        // Undo the mean-centering: bias was subtracted once per pixel over
        // the (x+1)*(y+1) rectangle. Exact for bias 0.
        let stored = self.cell(x as u32, y as u32) as f64;
        stored + (self.bias() * (x + 1) * (y + 1)) as f64
    }
}

impl AreaTable for AvgTable {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn corner_sum(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 {
            return 0.0;
        }
        // Multiply the stored per-pixel average back by its own rectangle
        // area. The quantization error of the code is amplified by the same
        // factor, so corners far from the origin reconstruct less exactly.
        let code = self.cell(x as u32, y as u32) as f64;
        code * ((x + 1) * (y + 1)) as f64 / self.scale() as f64
    }
}

/// Box average over the square window of side `2 * radius + 1` centered at
/// (cx, cy), clamped to the table bounds.
///
/// (cx, cy) must lie inside the table. Cost is four corner lookups
/// regardless of radius. A radius of 0 is a single-pixel window (area 1).
pub fn box_average<T: AreaTable + ?Sized>(table: &T, cx: u32, cy: u32, radius: u32) -> u8 {
    let w = table.width() as i64;
    let h = table.height() as i64;
    let cx = cx as i64;
    let cy = cy as i64;
    let r = radius as i64;

    let start_x = (cx - r - 1).clamp(-1, w - 1);
    let start_y = (cy - r - 1).clamp(-1, h - 1);
    let end_x = (cx + r).clamp(0, w - 1);
    let end_y = (cy + r).clamp(0, h - 1);

    let a = table.corner_sum(start_x, start_y);
    let b = table.corner_sum(end_x, start_y);
    let c = table.corner_sum(start_x, end_y);
    let d = table.corner_sum(end_x, end_y);

    let sum = a + d - b - c;
    let area = ((end_y - start_y) * (end_x - start_x)) as f64;

    // AAT reconstruction error can push the quotient slightly outside
    // [0, 255]; clamp into the output range.
    let value = (sum / area + 0.5) as i64;
    value.clamp(0, 255) as u8
}

/// Box blur of the whole image backed by `table`, one [`box_average`]
/// query per output pixel.
///
/// Each query reads only the immutable table, so distinct output pixels
/// are independent.
pub fn box_blur<T: AreaTable + ?Sized>(table: &T, radius: u32) -> FilterResult<GrayImage> {
    let w = table.width();
    let h = table.height();
    let mut out = GrayImage::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            out.set_unchecked(x, y, box_average(table, x, y, radius));
        }
    }

    Ok(out)
}

//! Direct windowed averaging - the ground-truth box blur
//!
//! Computes the same clamped box blur as the table-backed queries by
//! summing the window directly, dividing by the actual count of in-bounds
//! samples. Table-backed results are validated against this filter.
//!
//! The separable variant exploits that a box filter factors exactly into a
//! horizontal and a vertical 1-D pass. Keeping the horizontal pass as
//! unnormalized integer row sums and dividing only once at the end makes
//! the two-pass result bit-identical to the single-pass window sum.

use crate::FilterResult;
use areatab_core::GrayImage;

/// Brute-force box blur: per output pixel, sum the clamped window and
/// divide by its in-bounds sample count.
///
/// O(r^2) per pixel; intended as the reference the O(1) table queries are
/// compared against, not as the fast path.
pub fn box_blur_exact(src: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    let w = src.width();
    let h = src.height();
    let mut out = GrayImage::new(w, h)?;

    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y.saturating_add(radius)).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x.saturating_add(radius)).min(w - 1);

            let mut sum = 0u64;
            for iy in y0..=y1 {
                for ix in x0..=x1 {
                    sum += src.get_unchecked(ix, iy) as u64;
                }
            }
            let count = ((y1 - y0 + 1) as u64) * ((x1 - x0 + 1) as u64);
            let avg = (sum as f64 / count as f64 + 0.5) as u8;
            out.set_unchecked(x, y, avg);
        }
    }

    Ok(out)
}

/// Separable box blur: a horizontal then a vertical running-sum pass.
///
/// Produces exactly the same output as [`box_blur_exact`] at O(1) summing
/// cost per pixel per pass.
pub fn box_blur_separable(src: &GrayImage, radius: u32) -> FilterResult<GrayImage> {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let r = radius as usize;
    let mut out = GrayImage::new(src.width(), src.height())?;

    // Horizontal pass: clamped-window row sums, kept unnormalized.
    // Computed from a per-row prefix sum so each window is one subtraction.
    let mut row_sums = vec![0u32; w * h];
    let mut prefix = vec![0u32; w + 1];
    for y in 0..h {
        for x in 0..w {
            prefix[x + 1] = prefix[x] + src.get_unchecked(x as u32, y as u32) as u32;
        }
        for x in 0..w {
            let x0 = x.saturating_sub(r);
            let x1 = (x + r).min(w - 1);
            row_sums[y * w + x] = prefix[x1 + 1] - prefix[x0];
        }
    }

    // Vertical pass: sum the row sums over the clamped column window and
    // divide by the true sample count of the 2-D window.
    let mut col_prefix = vec![0u64; h + 1];
    for x in 0..w {
        for y in 0..h {
            col_prefix[y + 1] = col_prefix[y] + row_sums[y * w + x] as u64;
        }
        let x0 = x.saturating_sub(r);
        let x1 = (x + r).min(w - 1);
        let x_count = (x1 - x0 + 1) as u64;
        for y in 0..h {
            let y0 = y.saturating_sub(r);
            let y1 = (y + r).min(h - 1);
            let sum = col_prefix[y1 + 1] - col_prefix[y0];
            let count = x_count * (y1 - y0 + 1) as u64;
            let avg = (sum as f64 / count as f64 + 0.5) as u8;
            out.set_unchecked(x as u32, y as u32, avg);
        }
    }

    Ok(out)
}

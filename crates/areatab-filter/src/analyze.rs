//! Precision and overflow analysis of built tables
//!
//! Scans a table's cells for their minimum and maximum and reports the
//! smallest bit width that represents that range without overflow. This is
//! how a chosen fixed-point representation (say 14 or 16 bits) is validated
//! for a given image size and radius - and how deliberately exceeding the
//! budget is made visible instead of silently wrapping.

use crate::{AvgTable, SumTable};
use std::fmt;

/// Min/max range of a table's cells and the bit width needed to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Smallest cell value.
    pub min: i64,
    /// Largest cell value.
    pub max: i64,
    /// Whether the representation needs a sign bit (biased tables).
    pub signed: bool,
    /// Minimum bits that represent every cell without overflow.
    pub bits: u32,
}

impl TableStats {
    fn from_range(min: i64, max: i64, signed: bool) -> TableStats {
        let bits = if signed {
            1 + significant_bits(min.unsigned_abs().max(max.unsigned_abs()))
        } else {
            significant_bits(max.max(0) as u64)
        };
        TableStats {
            min,
            max,
            signed,
            bits,
        }
    }

    /// Whether every cell fits in a `width`-bit fixed-point container.
    pub fn fits_in(&self, width: u32) -> bool {
        self.bits <= width
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {}, max {}, {} bits {}",
            self.min,
            self.max,
            self.bits,
            if self.signed { "signed" } else { "unsigned" }
        )
    }
}

/// Number of bits needed to represent `v` as an unsigned value.
///
/// This is `floor(log2(v)) + 1`: one more than `ceil(log2(v))` exactly at
/// powers of two, where the naive formula undercounts (256 needs 9 bits,
/// not 8). Zero needs zero bits.
fn significant_bits(v: u64) -> u32 {
    u64::BITS - v.leading_zeros()
}

impl SumTable {
    /// Scan all cells and report their range and required bit width.
    ///
    /// Plain tables are analyzed as unsigned; biased tables carry negative
    /// excursions and are analyzed with a sign bit.
    pub fn stats(&self) -> TableStats {
        let (min, max) = cell_range(self.cells().iter().copied());
        TableStats::from_range(min, max, self.bias() != 0)
    }
}

impl AvgTable {
    /// Scan all cells and report their range and required bit width.
    pub fn stats(&self) -> TableStats {
        let (min, max) = cell_range(self.cells().iter().map(|&c| c as i64));
        TableStats::from_range(min, max, false)
    }
}

fn cell_range(cells: impl Iterator<Item = i64>) -> (i64, i64) {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    for c in cells {
        min = min.min(c);
        max = max.max(c);
    }
    (min, max)
}

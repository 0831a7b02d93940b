//! areatab-filter - Box blurs via accumulation tables
//!
//! This crate implements three competing ways of computing a box blur over
//! an 8 bpp grayscale image, plus the analysis tooling used to compare
//! their numeric precision:
//!
//! - Summed-area tables ([`SumTable`]), with an optional mean-centering bias
//! - Average-area tables ([`AvgTable`]) at a configurable fixed-point scale,
//!   quantized with round-to-nearest or stochastic (dithered) rounding
//! - O(1) rectangle queries over either table kind ([`box_average`])
//! - A direct windowed-average reference filter ([`box_blur_exact`])
//! - Min/max and required-bit-width analysis ([`TableStats`])

pub mod accum;
pub mod analyze;
pub mod average;
pub mod dither;
mod error;
pub mod query;
pub mod reference;

pub use accum::SumTable;
pub use analyze::TableStats;
pub use average::AvgTable;
pub use dither::{BlueNoise, DitherSource, RoundToNearest, WhiteNoise};
pub use error::{FilterError, FilterResult};
pub use query::{AreaTable, box_average, box_blur};
pub use reference::{box_blur_exact, box_blur_separable};

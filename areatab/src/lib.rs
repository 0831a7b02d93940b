//! areatab - Box-blur precision study
//!
//! Computes box blurs of 8-bit grayscale images three ways - direct
//! windowed averaging, summed-area tables (SAT), and quantized
//! average-area tables (AAT) - and analyzes the numeric precision each
//! strategy needs.
//!
//! # Example
//!
//! ```
//! use areatab::GrayImage;
//! use areatab::filter::{SumTable, box_average};
//!
//! let img = GrayImage::filled(4, 4, 255).unwrap();
//! let sat = SumTable::build(&img);
//! // A full 3x3 window of 255s averages to exactly 255.
//! assert_eq!(box_average(&sat, 1, 1, 1), 255);
//! ```

// Re-export core types (used everywhere)
pub use areatab_core::*;

// Re-export domain crates as modules
pub use areatab_filter as filter;
pub use areatab_io as io;

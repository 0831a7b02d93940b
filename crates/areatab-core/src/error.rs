//! Error types for areatab-core
//!
//! Provides a unified error type for all operations in the core crate.

use thiserror::Error;

/// areatab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("buffer of {actual} bytes does not match {width}x{height}")]
    BadBufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

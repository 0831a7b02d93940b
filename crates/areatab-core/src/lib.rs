//! areatab-core - Basic data structures for the areatab workspace
//!
//! This crate provides the single-channel image container shared by the
//! table builders, the query engine and the I/O layer:
//!
//! - [`GrayImage`] - 8-bit grayscale image, row-major
//! - [`Error`] / [`Result`] - core error type

mod error;
mod gray;

pub use error::{Error, Result};
pub use gray::GrayImage;

//! areatab-io - Image I/O boundary
//!
//! Turns a file path into a [`GrayImage`](areatab_core::GrayImage) and
//! back. Only PNG is supported; color inputs are reduced to a single luma
//! channel at decode time, so the rest of the workspace only ever sees
//! 8-bit single-channel buffers.

mod error;
mod png_io;

pub use error::{IoError, IoResult};
pub use png_io::{read_gray, write_gray};

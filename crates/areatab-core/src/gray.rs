//! GrayImage - 8-bit single-channel image container
//!
//! The image is stored row-major, one byte per pixel, with no row padding.
//! All consumers in this workspace treat a constructed image as read-only;
//! mutation is confined to the code that is currently filling it.

use crate::error::{Error, Result};

/// An 8-bit grayscale image, row-major, values in `[0, 255]`.
///
/// Width and height are guaranteed to be at least 1 after construction,
/// so downstream table builders never have to re-validate dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create an image filled with a constant value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(GrayImage {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Take ownership of an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::BadBufferSize`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::BadBufferSize {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(GrayImage {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel value at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.get_unchecked(x, y))
        } else {
            None
        }
    }

    /// Pixel value at (x, y). The caller must ensure the coordinates are
    /// in bounds.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y). The caller must ensure the coordinates are
    /// in bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// The raw row-major pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the raw pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let img = GrayImage::new(4, 3).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert!(img.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        assert!(GrayImage::new(0, 5).is_err());
        assert!(GrayImage::new(5, 0).is_err());
        assert!(GrayImage::filled(0, 0, 7).is_err());
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(GrayImage::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let img = GrayImage::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.get_unchecked(0, 0), 1);
        assert_eq!(img.get_unchecked(1, 0), 2);
        assert_eq!(img.get_unchecked(0, 1), 3);
        assert_eq!(img.get_unchecked(1, 1), 4);
    }

    #[test]
    fn test_get_bounds() {
        let img = GrayImage::filled(3, 2, 9).unwrap();
        assert_eq!(img.get(2, 1), Some(9));
        assert_eq!(img.get(3, 0), None);
        assert_eq!(img.get(0, 2), None);
    }

    #[test]
    fn test_set_and_roundtrip() {
        let mut img = GrayImage::new(3, 3).unwrap();
        img.set_unchecked(1, 2, 42);
        assert_eq!(img.get_unchecked(1, 2), 42);
        let data = img.into_vec();
        assert_eq!(data[2 * 3 + 1], 42);
    }
}

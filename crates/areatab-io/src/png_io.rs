//! PNG decode/encode for single-channel 8-bit images
//!
//! Decoding reduces whatever the file holds to one 8-bit gray channel:
//! grayscale is taken directly (16-bit reduced to its high byte), RGB and
//! RGBA are converted with integer luma weights. Encoding always writes
//! 8-bit grayscale.

use crate::{IoError, IoResult};
use areatab_core::GrayImage;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Integer luma reduction, `(77*R + 150*G + 29*B) >> 8`.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8
}

/// Read a PNG file as an 8-bit grayscale image.
///
/// # Errors
///
/// Fails fast on missing files, undecodable data, or pixel layouts other
/// than 8/16-bit grayscale, grayscale+alpha, RGB, or RGBA.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize];
                pixels.extend_from_slice(row);
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..];
                for x in 0..width as usize {
                    // Big-endian sample; keep the high byte
                    pixels.push(row[x * 2]);
                }
            }
        }
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..];
                for x in 0..width as usize {
                    pixels.push(row[x * 2]);
                }
            }
        }
        (ColorType::Rgb, BitDepth::Eight) => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..];
                for x in 0..width as usize {
                    pixels.push(luma(row[x * 3], row[x * 3 + 1], row[x * 3 + 2]));
                }
            }
        }
        (ColorType::Rgba, BitDepth::Eight) => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..];
                for x in 0..width as usize {
                    pixels.push(luma(row[x * 4], row[x * 4 + 1], row[x * 4 + 2]));
                }
            }
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG layout: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    Ok(GrayImage::from_vec(width, height, pixels)?)
}

/// Write an 8-bit grayscale image as a PNG file.
pub fn write_gray<P: AsRef<Path>>(path: P, img: &GrayImage) -> IoResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(img.as_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        // Green dominates the weighting
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
    }

    #[test]
    fn test_write_read_roundtrip() {
        let mut img = GrayImage::new(13, 7).unwrap();
        for y in 0..7u32 {
            for x in 0..13u32 {
                img.set_unchecked(x, y, ((x * 19 + y * 3) % 256) as u8);
            }
        }

        let dir = std::env::temp_dir();
        let path = dir.join("areatab_io_roundtrip.png");
        write_gray(&path, &img).unwrap();
        let back = read_gray(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back, img);
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let err = read_gray("/nonexistent/areatab-no-such-file.png");
        assert!(matches!(err, Err(IoError::Io(_))));
    }
}

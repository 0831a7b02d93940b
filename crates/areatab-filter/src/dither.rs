//! Dither sources for quantized table construction
//!
//! Quantizing a real-valued quotient to an integer code loses information.
//! Adding an offset in `[0, 1)` before truncating decides how: a constant
//! 0.5 gives deterministic round-to-nearest, while a random offset gives
//! stochastic rounding, which trades deterministic bias for quantization
//! noise that averages out visually.

use areatab_core::GrayImage;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Supplies the per-pixel offset added to a scaled quotient before it is
/// truncated to an integer code.
pub trait DitherSource {
    /// Offset for the pixel at (x, y). Stochastic sources return a value
    /// in `[0, 1)`; [`RoundToNearest`] returns the constant 0.5.
    fn sample(&mut self, x: u32, y: u32) -> f32;
}

/// Deterministic round-to-nearest: a constant offset of 0.5.
pub struct RoundToNearest;

impl DitherSource for RoundToNearest {
    fn sample(&mut self, _x: u32, _y: u32) -> f32 {
        0.5
    }
}

/// Uniform white noise, drawn independently per pixel.
pub struct WhiteNoise {
    rng: StdRng,
}

impl WhiteNoise {
    /// Create a white-noise source seeded from OS entropy.
    pub fn new() -> Self {
        WhiteNoise {
            rng: rand::make_rng(),
        }
    }

    /// Create a reproducible white-noise source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        WhiteNoise {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl DitherSource for WhiteNoise {
    fn sample(&mut self, _x: u32, _y: u32) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Deterministic lookup into a tileable blue-noise texture.
///
/// Blue noise has suppressed low-frequency energy, so its dithering looks
/// less clumpy than white noise. The texture is indexed with wraparound at
/// its own dimensions; a well-made pattern tiles seamlessly.
pub struct BlueNoise {
    texture: GrayImage,
}

impl BlueNoise {
    /// Wrap a grayscale texture as a blue-noise source.
    pub fn new(texture: GrayImage) -> Self {
        BlueNoise { texture }
    }
}

impl DitherSource for BlueNoise {
    fn sample(&mut self, x: u32, y: u32) -> f32 {
        let tx = x % self.texture.width();
        let ty = y % self.texture.height();
        self.texture.get_unchecked(tx, ty) as f32 / 255.0
    }
}

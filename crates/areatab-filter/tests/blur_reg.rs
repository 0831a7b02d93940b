//! Cross-module regression tests: table-backed blurs against the direct
//! windowed-average reference, over the full radius and scale budget.

use areatab_core::GrayImage;
use areatab_filter::{
    AvgTable, BlueNoise, RoundToNearest, SumTable, WhiteNoise, box_average, box_blur,
    box_blur_exact,
};

const RADII: [u32; 5] = [0, 1, 5, 25, 100];

fn noisy_image(w: u32, h: u32) -> GrayImage {
    let mut img = GrayImage::new(w, h).unwrap();
    let mut state = 0x9e3779b9u32;
    for y in 0..h {
        for x in 0..w {
            state = state.wrapping_mul(747796405).wrapping_add(2891336453);
            img.set_unchecked(x, y, (state >> 24) as u8);
        }
    }
    img
}

#[test]
fn sat_agrees_with_reference_within_rounding() {
    let img = noisy_image(64, 48);
    let sat = SumTable::build(&img);

    for radius in RADII {
        let reference = box_blur_exact(&img, radius).unwrap();
        let via_sat = box_blur(&sat, radius).unwrap();
        for y in 0..48u32 {
            for x in 0..64u32 {
                let r = reference.get_unchecked(x, y) as i32;
                let s = via_sat.get_unchecked(x, y) as i32;
                assert!(
                    (r - s).abs() <= 1,
                    "radius {} at ({},{}): reference {} vs SAT {}",
                    radius,
                    x,
                    y,
                    r,
                    s
                );
            }
        }
    }
}

#[test]
fn biased_sat_agrees_with_reference_within_rounding() {
    let img = noisy_image(40, 40);
    let biased = SumTable::build_biased(&img, 128);

    for radius in RADII {
        let reference = box_blur_exact(&img, radius).unwrap();
        let via_biased = box_blur(&biased, radius).unwrap();
        for y in 0..40u32 {
            for x in 0..40u32 {
                let r = reference.get_unchecked(x, y) as i32;
                let b = via_biased.get_unchecked(x, y) as i32;
                assert!(
                    (r - b).abs() <= 1,
                    "radius {} at ({},{}): reference {} vs biased SAT {}",
                    radius,
                    x,
                    y,
                    r,
                    b
                );
            }
        }
    }
}

#[test]
fn high_scale_aat_tracks_reference() {
    // At scale 256 the code quantization step is 1/256 gray level. Each
    // corner reconstruction amplifies half a step by the corner's own
    // rectangle area, so the worst-case drift per pixel is bounded by
    // 0.5 * (sum of corner areas) / (scale * window area), plus one gray
    // level of integer rounding on each side.
    const W: u32 = 32;
    const H: u32 = 24;
    let img = noisy_image(W, H);
    let sat = SumTable::build(&img);
    let aat = AvgTable::build(&sat, 256, &mut RoundToNearest).unwrap();

    for radius in RADII {
        let reference = box_blur_exact(&img, radius).unwrap();
        let via_aat = box_blur(&aat, radius).unwrap();
        for y in 0..H {
            for x in 0..W {
                let r = radius as i64;
                let sx = (x as i64 - r - 1).clamp(-1, W as i64 - 1);
                let sy = (y as i64 - r - 1).clamp(-1, H as i64 - 1);
                let ex = (x as i64 + r).min(W as i64 - 1);
                let ey = (y as i64 + r).min(H as i64 - 1);
                let corner_area = |cx: i64, cy: i64| -> f64 {
                    if cx < 0 || cy < 0 {
                        0.0
                    } else {
                        ((cx + 1) * (cy + 1)) as f64
                    }
                };
                let total = corner_area(sx, sy)
                    + corner_area(ex, sy)
                    + corner_area(sx, ey)
                    + corner_area(ex, ey);
                let window = ((ey - sy) * (ex - sx)) as f64;
                let bound = 0.5 * total / (256.0 * window) + 2.0;

                let rv = reference.get_unchecked(x, y) as f64;
                let av = via_aat.get_unchecked(x, y) as f64;
                assert!(
                    (rv - av).abs() <= bound,
                    "radius {} at ({},{}): reference {} vs AAT {} (bound {})",
                    radius,
                    x,
                    y,
                    rv,
                    av,
                    bound
                );
            }
        }
    }
}

#[test]
fn unscaled_aat_error_grows_away_from_origin() {
    // The central trade-off: with no extra precision bits, reconstruction
    // error is proportional to the corner's distance from the origin. The
    // result must still be a plausible blur - bounded drift, not garbage.
    let img = noisy_image(64, 64);
    let sat = SumTable::build(&img);
    let aat = AvgTable::build(&sat, 1, &mut RoundToNearest).unwrap();

    let reference = box_blur_exact(&img, 5).unwrap();
    let via_aat = box_blur(&aat, 5).unwrap();
    let mut worst = 0i32;
    for y in 0..64u32 {
        for x in 0..64u32 {
            let d = (reference.get_unchecked(x, y) as i32 - via_aat.get_unchecked(x, y) as i32)
                .abs();
            worst = worst.max(d);
        }
    }
    assert!(worst > 0, "unscaled quantization should be visible");
    assert!(
        worst < 128,
        "unscaled AAT degraded beyond plausibility: {}",
        worst
    );
}

#[test]
fn white_dither_is_unbiased() {
    // 3x1 image of 1, 0, 0: the origin rectangle at (2,0) averages to 1/3,
    // which no integer code represents. Across many seeds the stochastic
    // codes must average out to the true value instead of sticking to a
    // rounded one.
    let img = GrayImage::from_vec(3, 1, vec![1, 0, 0]).unwrap();
    let sat = SumTable::build(&img);

    let trials = 3000u32;
    let mut total = 0u64;
    for seed in 0..trials {
        let mut noise = WhiteNoise::seeded(seed as u64);
        let aat = AvgTable::build(&sat, 1, &mut noise).unwrap();
        total += aat.cell(2, 0) as u64;
    }
    let mean = total as f64 / trials as f64;
    assert!(
        (mean - 1.0 / 3.0).abs() < 0.03,
        "dithered codes averaged to {}, expected ~0.333",
        mean
    );
}

#[test]
fn blue_dither_is_deterministic() {
    let img = noisy_image(16, 16);
    let sat = SumTable::build(&img);
    let texture = GrayImage::from_vec(4, 4, (0..16).map(|v| (v * 16) as u8).collect()).unwrap();

    let a = AvgTable::build(&sat, 4, &mut BlueNoise::new(texture.clone())).unwrap();
    let b = AvgTable::build(&sat, 4, &mut BlueNoise::new(texture)).unwrap();
    for y in 0..16u32 {
        for x in 0..16u32 {
            assert_eq!(a.cell(x, y), b.cell(x, y));
        }
    }
}

#[test]
fn single_pixel_queries_are_exact_per_radius_budget() {
    let img = noisy_image(20, 20);
    let sat = SumTable::build(&img);
    for y in 0..20u32 {
        for x in 0..20u32 {
            assert_eq!(box_average(&sat, x, y, 0), img.get_unchecked(x, y));
        }
    }
}

//! Test pattern generation
//!
//! Provides deterministic color sets for parity and property tests.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rgbhsl_core::{Hsl, HslColor, RgbColor, hsl_to_rgb_unit};

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation and half lightness
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors on the edge of the RGB cube
    GamutBoundary,
    /// Colors where two channels tie for the maximum
    TiedMaximum,
    /// All zeros (black)
    Black,
    /// All 255 (white)
    White,
}

/// Generate `count` colors for a pattern
pub fn generate_colors(pattern: TestPattern, count: usize) -> Vec<RgbColor> {
    match pattern {
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            cycle(&corners, count)
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f64 / count as f64) * 360.0;
                hsl_to_rgb_unit(Hsl::new(hue, 1.0, 0.5)).to_color()
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f64 / count as f64) * 256.0) as u8;
                RgbColor::new(v, v, v)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut c = [0u8; 3];
                    rng.fill_bytes(&mut c);
                    RgbColor::from(c)
                })
                .collect()
        }
        TestPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            cycle(&tones, count)
        }
        TestPattern::GamutBoundary => {
            let colors: [[u8; 3]; 8] = [
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ];
            cycle(&colors, count)
        }
        TestPattern::TiedMaximum => (0..count)
            .map(|i| {
                let hi = 128 + (i % 128) as u8;
                let lo = (i * 7 % usize::from(hi)) as u8;
                match i % 3 {
                    0 => RgbColor::new(hi, hi, lo),
                    1 => RgbColor::new(lo, hi, hi),
                    _ => RgbColor::new(hi, lo, hi),
                }
            })
            .collect(),
        TestPattern::Black => vec![RgbColor::new(0, 0, 0); count],
        TestPattern::White => vec![RgbColor::new(255, 255, 255); count],
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<RgbColor> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|&c| RgbColor::from(c))
        .collect()
}

/// Generate `count` random in-range HSL colors
pub fn random_hsl(seed: u64, count: usize) -> Vec<HslColor> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| {
            HslColor::new(
                rng.gen_range(0..=360),
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
            )
            .ok()
        })
        .collect()
}

/// Standard sample counts
pub mod sizes {
    pub const SMALL: usize = 1024;
    pub const MEDIUM: usize = 65536;
}

//! Output range invariants
//!
//! Checks the unrounded float results, before any clamping, over every
//! integer input the validator can let through.

use rayon::prelude::*;
use rgbhsl_core::math::round_half_away;
use rgbhsl_core::{
    ChannelBounds, Hsl, HslColor, Rgb, RgbColor, hsl_to_rgb, hsl_to_rgb_unit, rgb_to_hsl,
    rgb_to_hsl_unit,
};

fn in_bounds(value: f64, bounds: ChannelBounds) -> bool {
    let rounded = round_half_away(value);
    rounded >= f64::from(bounds.min) && rounded <= f64::from(bounds.max)
}

/// RGB → HSL stays in bounds without relying on the clamp
#[test]
fn test_rgb_to_hsl_unclamped_range() {
    let violations: usize = (0..=255u8)
        .into_par_iter()
        .map(|r| {
            let mut bad = 0;
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let hsl = rgb_to_hsl_unit(RgbColor::new(r, g, b).to_unit());
                    let ok = hsl.h >= 0.0
                        && in_bounds(hsl.h, ChannelBounds::HUE)
                        && in_bounds(hsl.s * 100.0, ChannelBounds::PERCENT)
                        && in_bounds(hsl.l * 100.0, ChannelBounds::PERCENT);
                    if !ok {
                        bad += 1;
                    }
                }
            }
            bad
        })
        .sum();

    assert_eq!(violations, 0);
}

/// HSL → RGB stays in bounds without relying on the clamp
#[test]
fn test_hsl_to_rgb_unclamped_range() {
    let violations: usize = (0..=360u16)
        .into_par_iter()
        .map(|h| {
            let mut bad = 0;
            for s in 0..=100u16 {
                for l in 0..=100u16 {
                    let rgb = hsl_to_rgb_unit(Hsl::new(
                        f64::from(h),
                        f64::from(s) / 100.0,
                        f64::from(l) / 100.0,
                    ));
                    let ok = [rgb.r, rgb.g, rgb.b]
                        .iter()
                        .all(|&v| in_bounds(v * 255.0, ChannelBounds::RGB));
                    if !ok {
                        bad += 1;
                    }
                }
            }
            bad
        })
        .sum();

    assert_eq!(violations, 0);
}

/// Every rounded HSL → RGB output is a complete record
#[test]
fn test_hsl_to_rgb_outputs_complete() {
    for h in (0..=360).step_by(15) {
        for s in (0..=100).step_by(10) {
            for l in (0..=100).step_by(10) {
                let rgb = hsl_to_rgb(HslColor::new(h, s, l).expect("valid"));
                assert!(rgb.is_complete());
            }
        }
    }
}

/// Extremes of the RGB cube hit the HSL bounds exactly
#[test]
fn test_extremes() {
    let white = rgb_to_hsl(RgbColor::new(255, 255, 255));
    assert_eq!(white.light(), Some(100));
    assert_eq!(white.saturation(), Some(0));

    let black = rgb_to_hsl(RgbColor::new(0, 0, 0));
    assert_eq!(black.light(), Some(0));

    // largest hue reachable from 8-bit input
    let near_red = rgb_to_hsl(RgbColor::new(255, 0, 1));
    assert_eq!(near_red.hue(), Some(360));
}

/// Out-of-range float input is clamped on the way out
#[test]
fn test_defensive_clamp() {
    let rgb = Rgb::new(1.5, -0.5, 0.5).to_color();
    assert_eq!(rgb, RgbColor::new(255, 0, 128));

    let hsl = Hsl::new(720.0, 2.0, -1.0).to_color();
    assert_eq!(hsl, HslColor::new(360, 100, 0).expect("valid"));
}

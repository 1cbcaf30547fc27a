//! Reference implementation wrappers
//!
//! Routes conversions through the `palette` crate's sRGB ⇄ HSL so results can
//! be compared against rgbhsl. Both sides use the same normalization and the
//! same final rounding, so any difference comes from the float math.

use palette::{FromColor, encoding};
use rgbhsl_core::{Hsl, HslColor, Rgb, RgbColor};

type PaletteHsl = palette::Hsl<encoding::Srgb, f64>;
type PaletteRgb = palette::Srgb<f64>;

/// Convert normalized RGB to HSL using palette
///
/// Hue is returned in [0, 360) degrees.
pub fn palette_rgb_to_hsl_unit(rgb: Rgb) -> Hsl {
    let hsl = PaletteHsl::from_color(PaletteRgb::new(rgb.r, rgb.g, rgb.b));
    Hsl::new(hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness)
}

/// Convert HSL with hue in degrees to normalized RGB using palette
pub fn palette_hsl_to_rgb_unit(hsl: Hsl) -> Rgb {
    let rgb = PaletteRgb::from_color(PaletteHsl::new(hsl.h, hsl.s, hsl.l));
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

/// Convert an RGB record to HSL using palette, rounded like rgbhsl
pub fn palette_rgb_to_hsl(color: RgbColor) -> HslColor {
    palette_rgb_to_hsl_unit(color.to_unit()).to_color()
}

/// Convert an HSL record to RGB using palette, rounded like rgbhsl
pub fn palette_hsl_to_rgb(color: HslColor) -> RgbColor {
    palette_hsl_to_rgb_unit(color.to_unit()).to_color()
}

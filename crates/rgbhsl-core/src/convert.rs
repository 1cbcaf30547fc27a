//! RGB ⇄ HSL conversion
//!
//! The free functions [`rgb_to_hsl`] and [`hsl_to_rgb`] are total: empty
//! fields read as 0 and every output is rounded and clamped into its channel
//! bounds. [`Converter`] wraps them with [`ConvertOptions`] for callers that
//! want empty fields reported instead.

use crate::color::{Hsl, HslColor, Rgb, RgbColor};
use crate::{Error, Result};

/// What a conversion does with empty input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Read empty fields as 0 and always produce a result
    #[default]
    TreatAsZero,
    /// Fail with [`Error::IncompleteInput`] naming the first empty field
    Reject,
}

/// Options for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Handling of empty input fields
    pub empty_policy: EmptyPolicy,
}

impl ConvertOptions {
    /// Options that refuse to convert partially entered colors
    pub const fn strict() -> Self {
        Self {
            empty_policy: EmptyPolicy::Reject,
        }
    }

    /// Set the empty field policy
    pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
}

/// Converter configured with [`ConvertOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Options this converter was created with
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert an RGB record to HSL
    pub fn to_hsl(&self, rgb: RgbColor) -> Result<HslColor> {
        match (self.options.empty_policy, rgb.first_empty()) {
            (EmptyPolicy::Reject, Some(channel)) => Err(Error::IncompleteInput(channel.into())),
            _ => Ok(rgb_to_hsl(rgb)),
        }
    }

    /// Convert an HSL record to RGB
    pub fn to_rgb(&self, hsl: HslColor) -> Result<RgbColor> {
        match (self.options.empty_policy, hsl.first_empty()) {
            (EmptyPolicy::Reject, Some(channel)) => Err(Error::IncompleteInput(channel.into())),
            _ => Ok(hsl_to_rgb(hsl)),
        }
    }
}

/// Convert an RGB record to HSL, reading empty fields as 0
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    rgb_to_hsl_unit(rgb.to_unit()).to_color()
}

/// Convert an HSL record to RGB, reading empty fields as 0
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    hsl_to_rgb_unit(hsl.to_unit()).to_color()
}

/// Convert normalized RGB to HSL with hue in degrees
///
/// When two channels tie for the maximum, the hue formula of the first one
/// in red, green, blue order is used.
pub fn rgb_to_hsl_unit(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;
    let max = rgb.max();
    let min = rgb.min();
    let light = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl::new(0.0, 0.0, light);
    }

    let delta = max - min;
    let saturation = if light > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(sector * 60.0, saturation, light)
}

/// Convert HSL with hue in degrees to normalized RGB
pub fn hsl_to_rgb_unit(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        // achromatic
        return Rgb::new(l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Evaluate one RGB channel from the HSL intermediates `p`, `q`
///
/// `t` is the channel's hue position in turns; values within one turn
/// outside [0, 1] are wrapped once.
#[inline]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

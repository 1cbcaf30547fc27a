//! Accuracy measurement in channel units
//!
//! Differences are measured per channel in the record's own integer units
//! (8-bit levels, degrees, percent). Hue distance wraps around the circle so
//! 0° and 360° compare equal.

use rgbhsl_core::{HslChannel, HslColor, RgbChannel, RgbColor};

/// Statistics from a channel difference comparison
#[derive(Debug, Clone)]
pub struct ChannelDiffStats {
    /// Mean of the per-sample maximum channel difference
    pub mean: f64,
    /// Maximum difference over all samples
    pub max: u16,
    /// 95th percentile difference
    pub p95: u16,
    /// Number of samples
    pub count: usize,
    /// Number of samples that differ at all
    pub mismatches: usize,
}

impl ChannelDiffStats {
    /// Check if every sample matched exactly
    pub fn is_exact(&self) -> bool {
        self.max == 0
    }

    /// Check if every sample is within `tolerance` units
    pub fn within(&self, tolerance: u16) -> bool {
        self.max <= tolerance
    }
}

/// Largest per-channel difference between two RGB records
///
/// Empty fields compare as 0.
pub fn rgb_distance(a: RgbColor, b: RgbColor) -> u16 {
    RgbChannel::ALL
        .into_iter()
        .map(|c| {
            let x = a.get(c).unwrap_or(0);
            let y = b.get(c).unwrap_or(0);
            u16::from(x.abs_diff(y))
        })
        .max()
        .unwrap_or(0)
}

/// Circular distance between two hues in degrees
pub fn hue_distance(a: u16, b: u16) -> u16 {
    let d = a.abs_diff(b) % 360;
    d.min(360 - d)
}

/// Largest per-channel difference between two HSL records
///
/// Hue is compared on the circle and ignored when both colors are
/// achromatic, since any hue is then equally valid.
pub fn hsl_distance(a: HslColor, b: HslColor) -> u16 {
    let get = |c: HslColor, ch| c.get(ch).unwrap_or(0);
    let achromatic = get(a, HslChannel::Saturation) == 0 && get(b, HslChannel::Saturation) == 0;

    let hue = if achromatic {
        0
    } else {
        hue_distance(get(a, HslChannel::Hue), get(b, HslChannel::Hue))
    };
    let sat = get(a, HslChannel::Saturation).abs_diff(get(b, HslChannel::Saturation));
    let light = get(a, HslChannel::Light).abs_diff(get(b, HslChannel::Light));

    hue.max(sat).max(light)
}

fn summarize(mut diffs: Vec<u16>) -> ChannelDiffStats {
    let count = diffs.len();
    if count == 0 {
        return ChannelDiffStats {
            mean: 0.0,
            max: 0,
            p95: 0,
            count: 0,
            mismatches: 0,
        };
    }

    diffs.sort_unstable();

    let mean = diffs.iter().map(|&d| f64::from(d)).sum::<f64>() / count as f64;
    let max = diffs.last().copied().unwrap_or(0);
    let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);
    let p95 = diffs[p95_idx];
    let mismatches = diffs.iter().filter(|&&d| d > 0).count();

    ChannelDiffStats {
        mean,
        max,
        p95,
        count,
        mismatches,
    }
}

/// Compare two equally long RGB sequences
pub fn compare_rgb(reference: &[RgbColor], result: &[RgbColor]) -> ChannelDiffStats {
    assert_eq!(reference.len(), result.len());
    summarize(
        reference
            .iter()
            .zip(result)
            .map(|(&a, &b)| rgb_distance(a, b))
            .collect(),
    )
}

/// Compare two equally long HSL sequences
pub fn compare_hsl(reference: &[HslColor], result: &[HslColor]) -> ChannelDiffStats {
    assert_eq!(reference.len(), result.len());
    summarize(
        reference
            .iter()
            .zip(result)
            .map(|(&a, &b)| hsl_distance(a, b))
            .collect(),
    )
}

//! Parity testing framework
//!
//! Compares rgbhsl output against a reference implementation.

use crate::accuracy::{ChannelDiffStats, compare_hsl, compare_rgb};
use rgbhsl_core::{HslColor, RgbColor, hsl_to_rgb, rgb_to_hsl};
use std::fmt;

/// Reference implementation for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// palette crate sRGB ⇄ HSL
    Palette,
    /// Known answers from `data/reference_colors.json`
    Fixture,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Palette => write!(f, "palette"),
            Reference::Fixture => write!(f, "fixture"),
        }
    }
}

/// Result of a parity test
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the test
    pub test_name: String,
    /// Reference used
    pub reference: Reference,
    /// Difference statistics
    pub stats: ChannelDiffStats,
    /// Whether the test passed
    pub passed: bool,
}

impl ParityResult {
    /// Check if this result indicates exact match
    pub fn is_exact(&self) -> bool {
        self.stats.is_exact()
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {} samples, {} differ, max {}, p95 {}, mean {:.4} [{}]",
            self.test_name,
            self.reference,
            self.stats.count,
            self.stats.mismatches,
            self.stats.max,
            self.stats.p95,
            self.stats.mean,
            if self.passed { "PASS" } else { "FAIL" }
        )
    }
}

/// A parity test comparing rgbhsl to a reference implementation
pub struct ParityTest {
    /// Test name
    pub name: String,
    /// Reference implementation
    pub reference: Reference,
    /// Largest allowed per-channel difference
    pub tolerance: u16,
}

impl ParityTest {
    /// Create a new parity test requiring exact agreement
    pub fn new(name: impl Into<String>, reference: Reference) -> Self {
        Self {
            name: name.into(),
            reference,
            tolerance: 0,
        }
    }

    /// Allow up to `tolerance` units of difference per channel
    pub fn with_tolerance(mut self, tolerance: u16) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Compare RGB → HSL on `inputs`
    pub fn run_rgb_to_hsl(
        &self,
        inputs: &[RgbColor],
        reference: impl Fn(RgbColor) -> HslColor,
    ) -> ParityResult {
        let expected: Vec<HslColor> = inputs.iter().map(|&c| reference(c)).collect();
        let actual: Vec<HslColor> = inputs.iter().map(|&c| rgb_to_hsl(c)).collect();
        self.finish(compare_hsl(&expected, &actual))
    }

    /// Compare HSL → RGB on `inputs`
    pub fn run_hsl_to_rgb(
        &self,
        inputs: &[HslColor],
        reference: impl Fn(HslColor) -> RgbColor,
    ) -> ParityResult {
        let expected: Vec<RgbColor> = inputs.iter().map(|&c| reference(c)).collect();
        let actual: Vec<RgbColor> = inputs.iter().map(|&c| hsl_to_rgb(c)).collect();
        self.finish(compare_rgb(&expected, &actual))
    }

    fn finish(&self, stats: ChannelDiffStats) -> ParityResult {
        ParityResult {
            test_name: self.name.clone(),
            reference: self.reference,
            passed: stats.within(self.tolerance),
            stats,
        }
    }
}

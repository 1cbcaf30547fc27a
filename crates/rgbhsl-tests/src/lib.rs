//! # rgbhsl-tests
//!
//! Parity and property testing for rgbhsl.
//!
//! This crate provides:
//! - Reference conversions through the `palette` crate
//! - Per-channel difference statistics
//! - Deterministic color pattern generation
//! - A parity harness comparing rgbhsl against a reference
//! - Known-answer fixtures in `data/reference_colors.json`
//!
//! ## Test Categories
//!
//! 1. **Known cases**: fixed inputs with exact expected outputs
//! 2. **Round trips**: every 8-bit RGB color through HSL and back
//! 3. **Range invariants**: outputs stay within channel bounds
//! 4. **Parity**: agreement with `palette` within one rounding step
//! 5. **Validator and session**: edit acceptance and silent rejection

pub mod accuracy;
pub mod fixtures;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelDiffStats, compare_hsl, compare_rgb, hsl_distance, rgb_distance};
pub use parity::ParityTest;

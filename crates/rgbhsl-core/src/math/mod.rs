//! Numeric helpers shared by both conversion directions
//!
//! This module provides:
//! - The single round-to-nearest utility (half away from zero)
//! - Normalization between integer channel units and the unit interval

pub mod rounding;

pub use rounding::{from_unit, round_half_away, round_to_bounds, to_unit};

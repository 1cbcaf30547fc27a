//! Rounding and normalization
//!
//! Every integer that leaves the converter or the validator goes through
//! [`round_half_away`], so both directions break ties identically.

use crate::types::ChannelBounds;

/// Round to the nearest integer, ties away from zero
///
/// `2.5` rounds to `3`, `-2.5` to `-3`. NaN propagates.
#[inline]
pub fn round_half_away(value: f64) -> f64 {
    value.round()
}

/// Round and clamp to a channel's closed interval
///
/// NaN maps to the lower bound.
#[inline]
pub fn round_to_bounds(value: f64, bounds: ChannelBounds) -> u16 {
    let rounded = round_half_away(value);
    if rounded.is_nan() {
        return bounds.min;
    }
    rounded.clamp(f64::from(bounds.min), f64::from(bounds.max)) as u16
}

/// Normalize an integer channel value to a fraction of `scale`
#[inline]
pub fn to_unit(value: u16, scale: f64) -> f64 {
    f64::from(value) / scale
}

/// Scale a unit-interval value back up and round it into `bounds`
#[inline]
pub fn from_unit(value: f64, scale: f64, bounds: ChannelBounds) -> u16 {
    round_to_bounds(value * scale, bounds)
}

//! Edit validation
//!
//! Decides whether a raw string typed into a channel field may replace the
//! stored value. An empty string always passes (it clears the field); any
//! other input must parse as a number inside the channel's closed interval.
//! Validation has no side effects: a rejected edit simply leaves the caller's
//! state as it was.

use crate::math::round_half_away;
use crate::types::{Channel, HslChannel, RgbChannel};

/// Outcome of an accepted edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Empty input, the field becomes empty
    Clear,
    /// Numeric input, rounded to the nearest integer
    Set(u16),
}

impl Edit {
    /// Value to store, `None` for a cleared field
    pub fn value(&self) -> Option<u16> {
        match self {
            Edit::Clear => None,
            Edit::Set(v) => Some(*v),
        }
    }
}

/// Parse a raw field edit for `channel`
///
/// Returns `None` when the edit must be rejected. Surrounding whitespace is
/// ignored, decimal and exponent forms are accepted, and fractional values
/// round half away from zero (`"12.5"` becomes 13).
pub fn parse_edit(channel: impl Into<Channel>, raw: &str) -> Option<Edit> {
    if raw.is_empty() {
        return Some(Edit::Clear);
    }

    let bounds = channel.into().bounds();
    let number = raw.trim().parse::<f64>().ok()?;
    if !bounds.contains_f64(number) {
        return None;
    }

    // in bounds, so the cast cannot truncate
    Some(Edit::Set(round_half_away(number).max(0.0) as u16))
}

/// Check an edit for a channel given by field name
///
/// Unknown channel names are rejected.
pub fn accept(channel_name: &str, raw: &str) -> bool {
    Channel::from_name(channel_name).is_some_and(|channel| parse_edit(channel, raw).is_some())
}

/// Check an edit to one of the RGB fields
pub fn validate_rgb_edit(channel: RgbChannel, raw: &str) -> bool {
    parse_edit(channel, raw).is_some()
}

/// Check an edit to one of the HSL fields
pub fn validate_hsl_edit(channel: HslChannel, raw: &str) -> bool {
    parse_edit(channel, raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_boundaries() {
        for channel in RgbChannel::ALL {
            assert!(validate_rgb_edit(channel, "0"));
            assert!(validate_rgb_edit(channel, "255"));
            assert!(!validate_rgb_edit(channel, "256"));
            assert!(!validate_rgb_edit(channel, "-1"));
        }
    }

    #[test]
    fn test_hsl_boundaries() {
        assert!(validate_hsl_edit(HslChannel::Hue, "360"));
        assert!(!validate_hsl_edit(HslChannel::Hue, "361"));
        assert!(validate_hsl_edit(HslChannel::Saturation, "100"));
        assert!(!validate_hsl_edit(HslChannel::Saturation, "101"));
        assert!(validate_hsl_edit(HslChannel::Light, "0"));
        assert!(!validate_hsl_edit(HslChannel::Light, "100.5"));
    }

    #[test]
    fn test_empty_clears() {
        assert!(validate_rgb_edit(RgbChannel::Red, ""));
        assert!(validate_hsl_edit(HslChannel::Hue, ""));
        assert_eq!(parse_edit(RgbChannel::Red, ""), Some(Edit::Clear));
        assert_eq!(Edit::Clear.value(), None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(!validate_hsl_edit(HslChannel::Hue, "abc"));
        assert!(!validate_rgb_edit(RgbChannel::Green, "12abc"));
        assert!(!validate_rgb_edit(RgbChannel::Green, " "));
        assert!(!validate_rgb_edit(RgbChannel::Green, "NaN"));
        assert!(!validate_rgb_edit(RgbChannel::Green, "inf"));
        assert!(!validate_rgb_edit(RgbChannel::Green, "0x10"));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_edit(RgbChannel::Blue, " 42 "), Some(Edit::Set(42)));
        assert_eq!(parse_edit(RgbChannel::Blue, "1e2"), Some(Edit::Set(100)));
        assert_eq!(parse_edit(RgbChannel::Blue, "+7"), Some(Edit::Set(7)));
        assert_eq!(parse_edit(RgbChannel::Blue, "-0"), Some(Edit::Set(0)));
        assert_eq!(parse_edit(RgbChannel::Blue, "254.7"), Some(Edit::Set(255)));
        assert_eq!(parse_edit(HslChannel::Hue, "12.5"), Some(Edit::Set(13)));
        assert_eq!(parse_edit(HslChannel::Hue, "12.49"), Some(Edit::Set(12)));
    }

    #[test]
    fn test_accept_by_name() {
        assert!(accept("red", "255"));
        assert!(!accept("red", "256"));
        assert!(accept("red", ""));
        assert!(accept("hue", "360"));
        assert!(accept("saturation", "100"));
        assert!(!accept("light", "101"));
        assert!(!accept("alpha", "1"));
        assert!(!accept("alpha", ""));
    }
}

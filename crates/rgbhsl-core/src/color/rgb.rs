//! RGB color records
//!
//! [`RgbColor`] is the editable 8-bit record with per-field empty state.
//! [`Rgb`] is the normalized floating-point form the converter works in.

use crate::math::{from_unit, to_unit};
use crate::types::{ChannelBounds, RgbChannel};
use crate::{Error, Result};
use std::fmt;

/// Scale between an 8-bit channel and the unit interval
pub(crate) const RGB_SCALE: f64 = 255.0;

/// Editable RGB color, each channel empty or in 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    red: Option<u8>,
    green: Option<u8>,
    blue: Option<u8>,
}

impl RgbColor {
    /// All fields empty
    pub const EMPTY: Self = Self::from_fields(None, None, None);

    /// Create a fully specified color
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::from_fields(Some(red), Some(green), Some(blue))
    }

    /// Create a color where any field may be empty
    #[inline]
    pub const fn from_fields(red: Option<u8>, green: Option<u8>, blue: Option<u8>) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub const fn red(&self) -> Option<u8> {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> Option<u8> {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> Option<u8> {
        self.blue
    }

    /// Read a channel by identifier
    pub fn get(&self, channel: RgbChannel) -> Option<u8> {
        match channel {
            RgbChannel::Red => self.red,
            RgbChannel::Green => self.green,
            RgbChannel::Blue => self.blue,
        }
    }

    /// Copy of this color with one field replaced
    ///
    /// `None` clears the field. Values above 255 are rejected.
    pub fn with_channel(self, channel: RgbChannel, value: Option<u16>) -> Result<Self> {
        let value = match value {
            Some(v) => Some(u8::try_from(v).map_err(|_| Error::OutOfRange {
                channel: channel.into(),
                value: v,
            })?),
            None => None,
        };

        let mut next = self;
        match channel {
            RgbChannel::Red => next.red = value,
            RgbChannel::Green => next.green = value,
            RgbChannel::Blue => next.blue = value,
        }
        Ok(next)
    }

    /// Check that no field is empty
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Check that every field is empty
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// First empty field in red, green, blue order
    pub fn first_empty(&self) -> Option<RgbChannel> {
        RgbChannel::ALL.into_iter().find(|&c| self.get(c).is_none())
    }

    /// Fields as an array
    pub const fn to_array(&self) -> [Option<u8>; 3] {
        [self.red, self.green, self.blue]
    }

    /// Normalize to [0, 1], empty fields read as 0
    pub fn to_unit(&self) -> Rgb {
        let unit = |v: Option<u8>| to_unit(u16::from(v.unwrap_or(0)), RGB_SCALE);
        Rgb::new(unit(self.red), unit(self.green), unit(self.blue))
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl TryFrom<[u16; 3]> for RgbColor {
    type Error = Error;

    fn try_from(arr: [u16; 3]) -> Result<Self> {
        Self::EMPTY
            .with_channel(RgbChannel::Red, Some(arr[0]))?
            .with_channel(RgbChannel::Green, Some(arr[1]))?
            .with_channel(RgbChannel::Blue, Some(arr[2]))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            Field(self.red),
            Field(self.green),
            Field(self.blue)
        )
    }
}

/// Display adapter rendering an empty field as `-`
pub(crate) struct Field<T>(pub(crate) Option<T>);

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => v.fmt(f),
            None => f.write_str("-"),
        }
    }
}

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest component
    #[inline]
    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest component
    #[inline]
    pub fn min(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Round to an 8-bit record, clamping out-of-range components
    pub fn to_color(&self) -> RgbColor {
        let channel = |v: f64| from_unit(v, RGB_SCALE, ChannelBounds::RGB) as u8;
        RgbColor::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Channel;

    #[test]
    fn test_with_channel_replaces_one_field() {
        let base = RgbColor::new(10, 20, 30);
        let next = base.with_channel(RgbChannel::Green, Some(200)).unwrap();
        assert_eq!(next, RgbColor::new(10, 200, 30));
        // original untouched
        assert_eq!(base, RgbColor::new(10, 20, 30));

        let cleared = next.with_channel(RgbChannel::Red, None).unwrap();
        assert_eq!(cleared.red(), None);
        assert_eq!(cleared.first_empty(), Some(RgbChannel::Red));
    }

    #[test]
    fn test_with_channel_rejects_out_of_range() {
        let err = RgbColor::EMPTY
            .with_channel(RgbChannel::Blue, Some(256))
            .unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                channel: Channel::Rgb(RgbChannel::Blue),
                value: 256
            }
        );
        assert!(RgbColor::try_from([0u16, 255, 300]).is_err());
        assert_eq!(
            RgbColor::try_from([0u16, 255, 128]),
            Ok(RgbColor::new(0, 255, 128))
        );
    }

    #[test]
    fn test_empty_reads_as_zero() {
        let partial = RgbColor::from_fields(Some(255), None, None);
        assert!(!partial.is_complete());
        assert!(!partial.is_empty());
        assert_eq!(partial.to_unit(), Rgb::new(1.0, 0.0, 0.0));
        assert!(RgbColor::EMPTY.is_empty());
        assert_eq!(RgbColor::EMPTY.to_unit(), Rgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_unit_round_trip() {
        for v in 0..=255u8 {
            let color = RgbColor::new(v, 255 - v, v / 2);
            assert_eq!(color.to_unit().to_color(), color);
        }
    }

    #[test]
    fn test_to_color_clamps() {
        let out = Rgb::new(1.2, -0.3, 0.5).to_color();
        assert_eq!(out, RgbColor::new(255, 0, 128));
    }

    #[test]
    fn test_display() {
        assert_eq!(RgbColor::new(255, 0, 128).to_string(), "rgb(255, 0, 128)");
        assert_eq!(
            RgbColor::from_fields(Some(1), None, Some(3)).to_string(),
            "rgb(1, -, 3)"
        );
    }
}

//! HSL color records
//!
//! [`HslColor`] holds integer degrees and percentages, each possibly empty.
//! [`Hsl`] keeps hue in degrees and saturation/lightness in [0, 1].

use super::rgb::Field;
use crate::math::{round_to_bounds, to_unit};
use crate::types::{Channel, ChannelBounds, HslChannel};
use crate::{Error, Result};
use std::fmt;

/// Scale between a percentage and the unit interval
pub(crate) const PERCENT_SCALE: f64 = 100.0;

/// Editable HSL color
///
/// Hue is in 0..=360 degrees, saturation and light in 0..=100 percent.
/// Every constructor checks those bounds, so a non-empty field is always
/// in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HslFields", into = "HslFields"))]
pub struct HslColor {
    hue: Option<u16>,
    saturation: Option<u8>,
    light: Option<u8>,
}

impl HslColor {
    /// All fields empty
    pub const EMPTY: Self = Self {
        hue: None,
        saturation: None,
        light: None,
    };

    /// Create a fully specified color
    pub fn new(hue: u16, saturation: u8, light: u8) -> Result<Self> {
        Self::from_fields(Some(hue), Some(saturation), Some(light))
    }

    /// Create a color where any field may be empty
    pub fn from_fields(hue: Option<u16>, saturation: Option<u8>, light: Option<u8>) -> Result<Self> {
        Self::EMPTY
            .with_channel(HslChannel::Hue, hue)?
            .with_channel(HslChannel::Saturation, saturation.map(u16::from))?
            .with_channel(HslChannel::Light, light.map(u16::from))
    }

    /// Build from values the caller has already clamped
    pub(crate) fn from_clamped(hue: u16, saturation: u16, light: u16) -> Self {
        Self {
            hue: Some(hue.min(ChannelBounds::HUE.max)),
            saturation: Some(saturation.min(ChannelBounds::PERCENT.max) as u8),
            light: Some(light.min(ChannelBounds::PERCENT.max) as u8),
        }
    }

    #[inline]
    pub const fn hue(&self) -> Option<u16> {
        self.hue
    }

    #[inline]
    pub const fn saturation(&self) -> Option<u8> {
        self.saturation
    }

    #[inline]
    pub const fn light(&self) -> Option<u8> {
        self.light
    }

    /// Read a channel by identifier
    pub fn get(&self, channel: HslChannel) -> Option<u16> {
        match channel {
            HslChannel::Hue => self.hue,
            HslChannel::Saturation => self.saturation.map(u16::from),
            HslChannel::Light => self.light.map(u16::from),
        }
    }

    /// Copy of this color with one field replaced
    ///
    /// `None` clears the field. Values outside the channel bounds are rejected.
    pub fn with_channel(self, channel: HslChannel, value: Option<u16>) -> Result<Self> {
        if let Some(v) = value {
            let id = Channel::Hsl(channel);
            if !id.bounds().contains(v) {
                return Err(Error::OutOfRange { channel: id, value: v });
            }
        }

        let mut next = self;
        match channel {
            HslChannel::Hue => next.hue = value,
            // bounds checked above, percentages fit in u8
            HslChannel::Saturation => next.saturation = value.map(|v| v as u8),
            HslChannel::Light => next.light = value.map(|v| v as u8),
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

    /// First empty field in hue, saturation, light order
    pub fn first_empty(&self) -> Option<HslChannel> {
        HslChannel::ALL.into_iter().find(|&c| self.get(c).is_none())
    }

    /// Fields as an array
    pub fn to_array(&self) -> [Option<u16>; 3] {
        HslChannel::ALL.map(|c| self.get(c))
    }

    /// Normalize saturation and light to [0, 1], empty fields read as 0
    ///
    /// Hue stays in degrees.
    pub fn to_unit(&self) -> Hsl {
        Hsl::new(
            f64::from(self.hue.unwrap_or(0)),
            to_unit(u16::from(self.saturation.unwrap_or(0)), PERCENT_SCALE),
            to_unit(u16::from(self.light.unwrap_or(0)), PERCENT_SCALE),
        )
    }
}

impl TryFrom<[u16; 3]> for HslColor {
    type Error = Error;

    fn try_from(arr: [u16; 3]) -> Result<Self> {
        Self::EMPTY
            .with_channel(HslChannel::Hue, Some(arr[0]))?
            .with_channel(HslChannel::Saturation, Some(arr[1]))?
            .with_channel(HslChannel::Light, Some(arr[2]))
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}°, {}%, {}%)",
            Field(self.hue),
            Field(self.saturation),
            Field(self.light)
        )
    }
}

/// Wire form of [`HslColor`], re-validated on deserialize
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct HslFields {
    hue: Option<u16>,
    saturation: Option<u16>,
    light: Option<u16>,
}

#[cfg(feature = "serde")]
impl TryFrom<HslFields> for HslColor {
    type Error = Error;

    fn try_from(fields: HslFields) -> Result<Self> {
        Self::EMPTY
            .with_channel(HslChannel::Hue, fields.hue)?
            .with_channel(HslChannel::Saturation, fields.saturation)?
            .with_channel(HslChannel::Light, fields.light)
    }
}

#[cfg(feature = "serde")]
impl From<HslColor> for HslFields {
    fn from(color: HslColor) -> Self {
        Self {
            hue: color.get(HslChannel::Hue),
            saturation: color.get(HslChannel::Saturation),
            light: color.get(HslChannel::Light),
        }
    }
}

/// HSL color in floating point
///
/// - `h`: hue in degrees (0.0 to 360.0)
/// - `s`: saturation (0.0 to 1.0)
/// - `l`: lightness (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Round to integer degrees and percentages, clamping to channel bounds
    pub fn to_color(&self) -> HslColor {
        HslColor::from_clamped(
            round_to_bounds(self.h, ChannelBounds::HUE),
            round_to_bounds(self.s * PERCENT_SCALE, ChannelBounds::PERCENT),
            round_to_bounds(self.l * PERCENT_SCALE, ChannelBounds::PERCENT),
        )
    }
}

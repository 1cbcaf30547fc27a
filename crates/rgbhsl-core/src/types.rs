//! Channel identifiers and their bounds
//!
//! These are the names the presentation layer uses to wire input widgets to
//! the validator and the session.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Closed interval a channel value must lie in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelBounds {
    /// Inclusive lower bound
    pub min: u16,
    /// Inclusive upper bound
    pub max: u16,
}

impl ChannelBounds {
    /// Create a new bounds pair
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// 8-bit RGB channel range
    pub const RGB: Self = Self::new(0, 255);
    /// Hue range in degrees
    pub const HUE: Self = Self::new(0, 360);
    /// Saturation and lightness range in percent
    pub const PERCENT: Self = Self::new(0, 100);

    /// Check if an integer value is inside the interval
    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check if a parsed number is inside the interval
    ///
    /// NaN is never contained.
    #[inline]
    pub fn contains_f64(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

/// Channel of an [`RgbColor`](crate::RgbColor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    /// All channels in field order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
}

/// Channel of an [`HslColor`](crate::HslColor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HslChannel {
    Hue,
    Saturation,
    Light,
}

impl HslChannel {
    /// All channels in field order
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Light];
}

/// Any editable channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Rgb(RgbChannel),
    Hsl(HslChannel),
}

impl Channel {
    /// All six channels, RGB first
    pub const ALL: [Self; 6] = [
        Self::Rgb(RgbChannel::Red),
        Self::Rgb(RgbChannel::Green),
        Self::Rgb(RgbChannel::Blue),
        Self::Hsl(HslChannel::Hue),
        Self::Hsl(HslChannel::Saturation),
        Self::Hsl(HslChannel::Light),
    ];

    /// Field name used by the input widgets
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb(RgbChannel::Red) => "red",
            Self::Rgb(RgbChannel::Green) => "green",
            Self::Rgb(RgbChannel::Blue) => "blue",
            Self::Hsl(HslChannel::Hue) => "hue",
            Self::Hsl(HslChannel::Saturation) => "saturation",
            Self::Hsl(HslChannel::Light) => "light",
        }
    }

    /// Widget label including the accepted range
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rgb(RgbChannel::Red) => "Red (0-255)",
            Self::Rgb(RgbChannel::Green) => "Green (0-255)",
            Self::Rgb(RgbChannel::Blue) => "Blue (0-255)",
            Self::Hsl(HslChannel::Hue) => "Hue (0-360)",
            Self::Hsl(HslChannel::Saturation) => "Saturation (0-100)",
            Self::Hsl(HslChannel::Light) => "Light (0-100)",
        }
    }

    /// Unit suffix shown next to the field
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Rgb(_) => "",
            Self::Hsl(HslChannel::Hue) => "°",
            Self::Hsl(_) => "%",
        }
    }

    /// Closed interval accepted for this channel
    pub fn bounds(&self) -> ChannelBounds {
        match self {
            Self::Rgb(_) => ChannelBounds::RGB,
            Self::Hsl(HslChannel::Hue) => ChannelBounds::HUE,
            Self::Hsl(_) => ChannelBounds::PERCENT,
        }
    }

    /// Look up a channel by its field name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl From<RgbChannel> for Channel {
    fn from(channel: RgbChannel) -> Self {
        Self::Rgb(channel)
    }
}

impl From<HslChannel> for Channel {
    fn from(channel: HslChannel) -> Self {
        Self::Hsl(channel)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for RgbChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Channel::from(*self).fmt(f)
    }
}

impl fmt::Display for HslChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Channel::from(*self).fmt(f)
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownChannel(s.to_string()))
    }
}

impl FromStr for RgbChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<Channel>()? {
            Channel::Rgb(channel) => Ok(channel),
            Channel::Hsl(_) => Err(Error::UnknownChannel(s.to_string())),
        }
    }
}

impl FromStr for HslChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<Channel>()? {
            Channel::Hsl(channel) => Ok(channel),
            Channel::Rgb(_) => Err(Error::UnknownChannel(s.to_string())),
        }
    }
}

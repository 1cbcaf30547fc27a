//! Editing session state
//!
//! [`ConverterSession`] is the state a converter view owns: one RGB record,
//! one HSL record, and the converter used by the two directional actions.
//! Field edits go through the validator first; conversions replace the
//! target record wholesale.

use crate::color::{HslColor, RgbColor};
use crate::convert::{ConvertOptions, Converter};
use crate::types::{Channel, HslChannel, RgbChannel};
use crate::validate::parse_edit;
use crate::Result;

/// RGB and HSL fields of one converter view
#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    rgb: RgbColor,
    hsl: HslColor,
    converter: Converter,
}

impl ConverterSession {
    /// Create a session with both records empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with specific conversion options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            converter: Converter::new(options),
            ..Self::default()
        }
    }

    /// Current RGB record
    pub fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Current HSL record
    pub fn hsl(&self) -> HslColor {
        self.hsl
    }

    /// Conversion options in effect
    pub fn options(&self) -> ConvertOptions {
        self.converter.options()
    }

    /// Apply a raw edit to an RGB field
    ///
    /// Returns `false` and leaves the record untouched when the validator
    /// rejects `raw`.
    pub fn edit_rgb(&mut self, channel: RgbChannel, raw: &str) -> bool {
        let Some(edit) = parse_edit(channel, raw) else {
            tracing::trace!(%channel, raw, "rejected rgb edit");
            return false;
        };
        match self.rgb.with_channel(channel, edit.value()) {
            Ok(next) => {
                self.rgb = next;
                true
            }
            Err(error) => {
                tracing::trace!(%channel, raw, %error, "rgb record refused edit");
                false
            }
        }
    }

    /// Apply a raw edit to an HSL field
    ///
    /// Returns `false` and leaves the record untouched when the validator
    /// rejects `raw`.
    pub fn edit_hsl(&mut self, channel: HslChannel, raw: &str) -> bool {
        let Some(edit) = parse_edit(channel, raw) else {
            tracing::trace!(%channel, raw, "rejected hsl edit");
            return false;
        };
        match self.hsl.with_channel(channel, edit.value()) {
            Ok(next) => {
                self.hsl = next;
                true
            }
            Err(error) => {
                tracing::trace!(%channel, raw, %error, "hsl record refused edit");
                false
            }
        }
    }

    /// Apply a raw edit to the field named `channel_name`
    ///
    /// Fails only for an unknown field name; otherwise reports whether the
    /// edit was accepted.
    pub fn edit(&mut self, channel_name: &str, raw: &str) -> Result<bool> {
        Ok(match channel_name.parse::<Channel>()? {
            Channel::Rgb(channel) => self.edit_rgb(channel, raw),
            Channel::Hsl(channel) => self.edit_hsl(channel, raw),
        })
    }

    /// Replace the HSL record with the conversion of the RGB record
    ///
    /// On error (strict options with an empty RGB field) nothing changes.
    pub fn convert_to_hsl(&mut self) -> Result<HslColor> {
        let hsl = self.converter.to_hsl(self.rgb)?;
        tracing::debug!(rgb = %self.rgb, hsl = %hsl, "converted rgb to hsl");
        self.hsl = hsl;
        Ok(hsl)
    }

    /// Replace the RGB record with the conversion of the HSL record
    ///
    /// On error (strict options with an empty HSL field) nothing changes.
    pub fn convert_to_rgb(&mut self) -> Result<RgbColor> {
        let rgb = self.converter.to_rgb(self.hsl)?;
        tracing::debug!(hsl = %self.hsl, rgb = %rgb, "converted hsl to rgb");
        self.rgb = rgb;
        Ok(rgb)
    }

    /// Text a widget should show for `channel`, blank when empty
    pub fn field_text(&self, channel: impl Into<Channel>) -> String {
        let value = match channel.into() {
            Channel::Rgb(c) => self.rgb.get(c).map(u16::from),
            Channel::Hsl(c) => self.hsl.get(c),
        };
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    /// Clear both records
    pub fn reset(&mut self) {
        self.rgb = RgbColor::EMPTY;
        self.hsl = HslColor::EMPTY;
    }
}

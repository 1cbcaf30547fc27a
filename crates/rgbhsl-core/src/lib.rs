//! # rgbhsl - RGB ⇄ HSL conversion core
//!
//! Conversion math and input validation for an interactive color converter.
//! The presentation layer renders the fields; this crate decides which edits
//! are accepted and computes one color model from the other.
//!
//! ## Parts
//!
//! - **Converter**: [`rgb_to_hsl`] and [`hsl_to_rgb`], pure and total
//! - **Validator**: [`validate_rgb_edit`], [`validate_hsl_edit`] and [`accept`]
//! - **Session**: [`ConverterSession`], the state record a view owns
//!
//! Channels are integers: RGB in 0..=255, hue in 0..=360 degrees, saturation
//! and light in 0..=100 percent. Any field may also be empty; the converter
//! reads empty fields as 0 unless configured with [`ConvertOptions::strict`].
//! All rounding is half away from zero.
//!
//! ## Quick Start
//!
//! ```
//! use rgbhsl_core::{ConverterSession, HslChannel, RgbChannel, RgbColor, rgb_to_hsl};
//!
//! let hsl = rgb_to_hsl(RgbColor::new(255, 0, 0));
//! assert_eq!(hsl.to_string(), "hsl(0°, 100%, 50%)");
//!
//! let mut session = ConverterSession::new();
//! assert!(session.edit_rgb(RgbChannel::Green, "255"));
//! assert!(!session.edit_rgb(RgbChannel::Blue, "256"));
//! session.convert_to_hsl().unwrap();
//! assert_eq!(session.field_text(HslChannel::Hue), "120");
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod session;
pub mod types;
pub mod validate;

pub use color::{Hsl, HslColor, Rgb, RgbColor};
pub use convert::{
    ConvertOptions, Converter, EmptyPolicy, hsl_to_rgb, hsl_to_rgb_unit, hue_to_rgb, rgb_to_hsl,
    rgb_to_hsl_unit,
};
pub use error::{Error, Result};
pub use session::ConverterSession;
pub use types::{Channel, ChannelBounds, HslChannel, RgbChannel};
pub use validate::{Edit, accept, parse_edit, validate_hsl_edit, validate_rgb_edit};

/// Version of rgbhsl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Color value records
//!
//! This module provides:
//! - [`RgbColor`] and [`HslColor`], the editable records with empty fields
//! - [`Rgb`] and [`Hsl`], the normalized floating-point working forms

pub mod hsl;
pub mod rgb;

pub use hsl::{Hsl, HslColor};
pub use rgb::{Rgb, RgbColor};

//! Error types for rgbhsl

use crate::types::Channel;
use thiserror::Error;

/// Result type for rgbhsl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rgbhsl operations
///
/// None of these reach the end user through the editing flow: rejected
/// keystrokes are reported as `false` by the validator, and conversions under
/// the default [`EmptyPolicy`](crate::EmptyPolicy) are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Channel name is not one of red/green/blue/hue/saturation/light
    #[error("Unknown channel: {0:?}")]
    UnknownChannel(String),

    /// Field value outside the channel's closed interval
    #[error("{channel} value {value} is out of range {}..={}", .channel.bounds().min, .channel.bounds().max)]
    OutOfRange { channel: Channel, value: u16 },

    /// Conversion attempted with an empty field under `EmptyPolicy::Reject`
    #[error("Incomplete input: {0} is empty")]
    IncompleteInput(Channel),
}

//! Error types for color conversion and mixing operations.

use thiserror::Error;

/// Error type for color conversion and mixing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A color array did not have exactly three elements.
    #[error("invalid array length: {0} (expected 3)")]
    InvalidArrayLength(usize),

    /// A channel value was outside the range 0 to 255.
    #[error("invalid channel value: {0} (expected 0 to 255)")]
    InvalidValue(f64),

    /// A hex code failed the format check.
    #[error("invalid hex code: {0:?}")]
    InvalidHex(String),

    /// An alpha weight was outside the range 0 to 1.
    #[error("invalid alpha: {0} (expected 0 to 1)")]
    InvalidAlpha(f64),
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;

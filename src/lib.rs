//! RGB/hex color conversion and mixing utilities.
//!
//! This crate converts between RGB channel triplets and six-digit hex codes,
//! and linearly interpolates ("mixes") two colors with an adjustable weight:
//!
//! - [`color`]: validators, formatters, and mixers as free functions
//! - [`error`]: error types for the library
//!
//! Every operation is a pure, synchronous function over small fixed-size
//! inputs; there is no shared state, so everything is safely callable from
//! any number of threads.
//!
//! # Examples
//!
//! ## Converting between representations
//!
//! ```
//! use colormix::{arr_to_hex, hex_to_arr, values_to_hex};
//!
//! let hex = arr_to_hex(&[255.0, 0.0, 128.0], true).unwrap();
//! assert_eq!(hex, "#ff0080");
//!
//! let arr = hex_to_arr("#ff0080").unwrap();
//! assert_eq!(arr, [255, 0, 128]);
//!
//! // Without the leading hash
//! let bare = values_to_hex(255.0, 0.0, 128.0, false).unwrap();
//! assert_eq!(bare, "ff0080");
//! ```
//!
//! ## Mixing colors
//!
//! ```
//! use colormix::{mix_by_array, mix_by_hex, DEFAULT_ALPHA};
//!
//! // alpha weights the FIRST color (inverted from the usual blending
//! // convention): alpha 1.0 returns the first color unchanged.
//! let mostly_white = mix_by_array(&[255.0; 3], &[0.0; 3], 0.75).unwrap();
//! assert_eq!(mostly_white, [191, 191, 191]);
//!
//! let gray = mix_by_hex("#ffffff", "#000000", DEFAULT_ALPHA).unwrap();
//! assert_eq!(gray, [128, 128, 128]);
//! ```
//!
//! ## Handling invalid input
//!
//! ```
//! use colormix::{arr_to_hex, ColorError};
//!
//! let err = arr_to_hex(&[1.0, 2.0], true).unwrap_err();
//! assert_eq!(err, ColorError::InvalidArrayLength(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod color;
pub mod error;

// Re-export the whole public surface at the crate root for convenience
pub use color::{
    add_zero, arr_to_hex, hex_to_arr, is_valid_alpha, is_valid_arr, is_valid_hex, is_valid_value,
    mix_by_array, mix_by_hex, mix_by_value, values_to_hex, DEFAULT_ALPHA,
};
pub use error::{ColorError, Result};

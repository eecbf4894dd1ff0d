//! RGB triplet and hex-code conversion, plus linear color mixing.
//!
//! Colors are handled in two interchangeable representations:
//!
//! - a **color array**: exactly three channel values in (red, green, blue)
//!   order, each in the range 0 to 255, and
//! - a **hex code**: six lowercase hex digits with an optional leading `#`,
//!   two digits per channel.
//!
//! Channel inputs are `f64` rather than `u8`: any numeric value in
//! `[0, 256)` is accepted, including fractional ones. Validated outputs
//! always fit 8 bits, so conversion and mixing results are `[u8; 3]`.
//!
//! # Mixing
//!
//! [`mix_by_array`] and friends interpolate per channel:
//! `round(color2 * (1 - alpha) + color1 * alpha)`. Note that `alpha` is the
//! weight of the *first* color, which is inverted from the usual
//! alpha-blending convention where alpha belongs to the overlay drawn over
//! a background.
//!
//! # Examples
//!
//! ```
//! use colormix::{arr_to_hex, hex_to_arr, mix_by_hex};
//!
//! let hex = arr_to_hex(&[255.0, 0.0, 128.0], true).unwrap();
//! assert_eq!(hex, "#ff0080");
//!
//! let arr = hex_to_arr("#ff0080").unwrap();
//! assert_eq!(arr, [255, 0, 128]);
//!
//! // Even mix of white and black.
//! let gray = mix_by_hex("#ffffff", "#000000", 0.5).unwrap();
//! assert_eq!(gray, [128, 128, 128]);
//! ```

use crate::error::{ColorError, Result};

/// The conventional mixing weight: both colors contribute equally.
pub const DEFAULT_ALPHA: f64 = 0.5;

// ============================================================================
// Validators
// ============================================================================

/// Returns whether `alpha` is a valid mixing weight (0 to 1 inclusive).
#[inline]
pub fn is_valid_alpha(alpha: f64) -> bool {
    (0.0..=1.0).contains(&alpha)
}

/// Returns whether `values` has exactly three elements.
///
/// Element values are not checked here; see [`is_valid_value`].
#[inline]
pub fn is_valid_arr(values: &[f64]) -> bool {
    values.len() == 3
}

/// Returns whether `hex` is a valid six-digit hex code.
///
/// The leading `#` is optional; the remaining string must be exactly six
/// ASCII hex digits.
///
/// # Examples
///
/// ```
/// use colormix::is_valid_hex;
///
/// assert!(is_valid_hex("FFAABB"));
/// assert!(is_valid_hex("#ff0080"));
/// assert!(!is_valid_hex("GGAABB"));
/// assert!(!is_valid_hex("#FFF"));
/// ```
#[inline]
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns whether `value` is a valid channel intensity (0 to 255).
///
/// No integer constraint is applied: fractional values inside the range
/// are accepted.
#[inline]
pub fn is_valid_value(value: f64) -> bool {
    value >= 0.0 && value < 256.0
}

/// Validates a color array: length first, then each channel value.
fn validate_channels(values: &[f64]) -> Result<()> {
    if !is_valid_arr(values) {
        return Err(ColorError::InvalidArrayLength(values.len()));
    }
    for &value in values {
        if !is_valid_value(value) {
            return Err(ColorError::InvalidValue(value));
        }
    }
    Ok(())
}

// ============================================================================
// Formatters
// ============================================================================

/// Left-pads `value` with a single `'0'` and keeps the last two characters.
///
/// Guarantees a two-character result for any one- or two-character hex
/// digit string. Longer inputs are truncated to their last two characters,
/// not rejected.
///
/// # Examples
///
/// ```
/// use colormix::add_zero;
///
/// assert_eq!(add_zero("f"), "0f");
/// assert_eq!(add_zero("ff"), "ff");
/// assert_eq!(add_zero("abc"), "bc");
/// ```
pub fn add_zero(value: &str) -> String {
    let padded: Vec<char> = format!("0{value}").chars().collect();
    padded[padded.len().saturating_sub(2)..].iter().collect()
}

/// Converts three channel values to a hex code.
///
/// Each channel is validated via [`is_valid_value`] and formatted as two
/// lowercase hex digits (fractional channels truncate toward zero). The
/// result is prefixed with `#` iff `include_hash` is true.
///
/// # Examples
///
/// ```
/// use colormix::values_to_hex;
///
/// assert_eq!(values_to_hex(255.0, 0.0, 128.0, true).unwrap(), "#ff0080");
/// assert_eq!(values_to_hex(255.0, 0.0, 128.0, false).unwrap(), "ff0080");
/// ```
pub fn values_to_hex(r: f64, g: f64, b: f64, include_hash: bool) -> Result<String> {
    for value in [r, g, b] {
        if !is_valid_value(value) {
            return Err(ColorError::InvalidValue(value));
        }
    }

    let hash = if include_hash { "#" } else { "" };
    Ok(format!(
        "{hash}{}{}{}",
        add_zero(&format!("{:x}", r as u32)),
        add_zero(&format!("{:x}", g as u32)),
        add_zero(&format!("{:x}", b as u32)),
    ))
}

/// Converts a color array to a hex code.
///
/// Fails with [`ColorError::InvalidArrayLength`] if `values` is not exactly
/// three elements, or [`ColorError::InvalidValue`] if any element is out of
/// range; otherwise delegates to [`values_to_hex`].
pub fn arr_to_hex(values: &[f64], include_hash: bool) -> Result<String> {
    validate_channels(values)?;
    values_to_hex(values[0], values[1], values[2], include_hash)
}

/// Converts a hex code to a color array.
///
/// Fails with [`ColorError::InvalidHex`] if `hex` is not a valid six-digit
/// hex code (see [`is_valid_hex`]). The leading `#` is optional.
///
/// # Examples
///
/// ```
/// use colormix::hex_to_arr;
///
/// assert_eq!(hex_to_arr("#ff0080").unwrap(), [255, 0, 128]);
/// assert_eq!(hex_to_arr("ff0080").unwrap(), [255, 0, 128]);
/// ```
pub fn hex_to_arr(hex: &str) -> Result<[u8; 3]> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        // Unreachable after validation; fall back to 0 rather than panic.
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap_or(0);
    }
    Ok(channels)
}

// ============================================================================
// Mixers
// ============================================================================

/// Mixes two color arrays, weighting the *first* color by `alpha`.
///
/// Per channel the result is `round(color2 * (1 - alpha) + color1 * alpha)`,
/// rounding half away from zero. `alpha` is the weight of `color1`, which
/// is inverted from the usual alpha-blending convention.
///
/// Both arrays are validated (length, then each channel) and `alpha` must
/// be in 0 to 1. The result is a convex combination of in-range values, so
/// every channel stays within 0 to 255.
///
/// # Examples
///
/// ```
/// use colormix::{mix_by_array, DEFAULT_ALPHA};
///
/// let white = [255.0, 255.0, 255.0];
/// let black = [0.0, 0.0, 0.0];
///
/// assert_eq!(mix_by_array(&white, &black, DEFAULT_ALPHA).unwrap(), [128, 128, 128]);
/// assert_eq!(mix_by_array(&white, &black, 1.0).unwrap(), [255, 255, 255]);
/// assert_eq!(mix_by_array(&white, &black, 0.0).unwrap(), [0, 0, 0]);
/// ```
pub fn mix_by_array(color1: &[f64], color2: &[f64], alpha: f64) -> Result<[u8; 3]> {
    validate_channels(color1)?;
    validate_channels(color2)?;
    if !is_valid_alpha(alpha) {
        return Err(ColorError::InvalidAlpha(alpha));
    }

    let mut mixed = [0u8; 3];
    for (i, channel) in mixed.iter_mut().enumerate() {
        *channel = (color2[i] * (1.0 - alpha) + color1[i] * alpha).round() as u8;
    }
    Ok(mixed)
}

/// Mixes two hex codes, weighting the *first* color by `alpha`.
///
/// Both codes are converted via [`hex_to_arr`] (propagating
/// [`ColorError::InvalidHex`]), then mixed with [`mix_by_array`].
pub fn mix_by_hex(hex1: &str, hex2: &str, alpha: f64) -> Result<[u8; 3]> {
    let color1 = hex_to_arr(hex1)?.map(f64::from);
    let color2 = hex_to_arr(hex2)?.map(f64::from);
    mix_by_array(&color1, &color2, alpha)
}

/// Mixes two colors given as channel triples, weighting the first by `alpha`.
#[allow(clippy::too_many_arguments)]
pub fn mix_by_value(
    r1: f64,
    g1: f64,
    b1: f64,
    r2: f64,
    g2: f64,
    b2: f64,
    alpha: f64,
) -> Result<[u8; 3]> {
    mix_by_array(&[r1, g1, b1], &[r2, g2, b2], alpha)
}

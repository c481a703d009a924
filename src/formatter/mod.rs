//! Formatting entry points for every supported source type.
//!
//! Each function classifies the format string once, converts the value into
//! a [`DigitBuffer`] and hands it to the standard or custom renderer.
//! Integral `D`/`X` requests and the no-precision `G` bypass the digit
//! buffer entirely through direct decimal or nibble extraction, and the
//! float `R` format runs the convert/decode/compare round-trip scheme.

pub(crate) mod custom;
pub(crate) mod standard;

use std::fmt;

use crate::convert;
use crate::parser::spec::classify;
use crate::profile::FormattingProfile;
use crate::types::{DigitBuffer, F32_PRECISION, F64_PRECISION, FixedDecimal, FormatSpecifier};

/// Error type for formatting requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The standard format letter is not one the codec knows.
    InvalidSpecifier(char),
    /// The letter exists but does not apply to the source type
    /// (`X` on a float, `R` on an integer, ..).
    UnsupportedForType {
        specifier: char,
        type_name: &'static str,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidSpecifier(letter) => {
                write!(f, "unknown standard format specifier '{}'", letter)
            }
            FormatError::UnsupportedForType {
                specifier,
                type_name,
            } => write!(
                f,
                "format specifier '{}' is not supported for {} values",
                specifier, type_name
            ),
        }
    }
}

impl std::error::Error for FormatError {}

fn non_finite(buf: &DigitBuffer, profile: &FormattingProfile) -> Option<String> {
    if buf.is_nan {
        return Some(profile.nan_symbol.clone());
    }
    if buf.is_inf {
        return Some(if buf.sign {
            profile.negative_infinity_symbol.clone()
        } else {
            profile.positive_infinity_symbol.clone()
        });
    }
    None
}

fn format_integer(
    magnitude: u64,
    negative: bool,
    hex_bits: u64,
    type_name: &'static str,
    to_digits: impl FnOnce() -> DigitBuffer,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    match classify(spec) {
        FormatSpecifier::Standard { letter, precision } => match letter.to_ascii_uppercase() {
            // G without a precision renders the same as plain decimal.
            'G' if precision <= 0 => Ok(standard::int_dec_str(
                magnitude,
                negative,
                precision,
                &profile.negative_sign,
            )),
            'D' => Ok(standard::int_dec_str(
                magnitude,
                negative,
                precision,
                &profile.negative_sign,
            )),
            'X' => Ok(standard::int_hex_str(hex_bits, letter == 'x', precision)),
            'R' => Err(FormatError::UnsupportedForType {
                specifier: letter,
                type_name,
            }),
            _ => {
                let mut buf = to_digits();
                standard::render_standard(&mut buf, letter, precision, profile, false)
            }
        },
        FormatSpecifier::Custom => {
            let mut buf = to_digits();
            Ok(custom::render_pattern(&mut buf, spec, profile))
        }
    }
}

/// Format a signed 32-bit integer.
///
/// An empty `spec` is equivalent to `"G"`.
///
/// # Examples
/// ```
/// use numstr::{format_i32, profile};
///
/// let en_us = profile::builtin("en-US").unwrap();
/// assert_eq!(format_i32(12345, "D8", &en_us).unwrap(), "00012345");
/// assert_eq!(format_i32(0x2c45e, "x", &en_us).unwrap(), "2c45e");
/// ```
pub fn format_i32(
    value: i32,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    format_integer(
        value.unsigned_abs() as u64,
        value < 0,
        value as u32 as u64,
        "i32",
        || convert::i32_to_digits(value),
        spec,
        profile,
    )
}

/// Format an unsigned 32-bit integer. An empty `spec` is equivalent to `"G"`.
pub fn format_u32(
    value: u32,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    format_integer(
        value as u64,
        false,
        value as u64,
        "u32",
        || convert::u32_to_digits(value),
        spec,
        profile,
    )
}

/// Format a signed 64-bit integer. An empty `spec` is equivalent to `"G"`.
pub fn format_i64(
    value: i64,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    format_integer(
        value.unsigned_abs(),
        value < 0,
        value as u64,
        "i64",
        || convert::i64_to_digits(value),
        spec,
        profile,
    )
}

/// Format an unsigned 64-bit integer. An empty `spec` is equivalent to `"G"`.
pub fn format_u64(
    value: u64,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    format_integer(
        value,
        false,
        value,
        "u64",
        || convert::u64_to_digits(value),
        spec,
        profile,
    )
}

/// Format a double-precision float.
///
/// NaN and infinities render as the profile symbols regardless of `spec`.
/// `R` produces the shortest of the 15- and 17-digit renderings that parses
/// back to the exact same bits.
///
/// # Examples
/// ```
/// use numstr::{format_f64, profile};
///
/// let en_us = profile::builtin("en-US").unwrap();
/// assert_eq!(format_f64(123456789.0, "N4", &en_us).unwrap(), "123,456,789.0000");
/// assert_eq!(format_f64(-12345.6789, "C", &en_us).unwrap(), "($12,345.68)");
/// ```
pub fn format_f64(
    value: f64,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    let spec_kind = classify(spec);
    let mut precision = F64_PRECISION;

    if let FormatSpecifier::Standard { letter, precision: digits } = spec_kind {
        match letter.to_ascii_uppercase() {
            'R' => return round_trip_f64(value, profile),
            // High-precision requests re-expand at the full 17 digits.
            'E' if digits > 14 => precision = 17,
            'G' if digits > 15 => precision = 17,
            'D' | 'X' => {
                return Err(FormatError::UnsupportedForType {
                    specifier: letter,
                    type_name: "f64",
                });
            }
            _ => {}
        }
    }

    let mut buf = convert::f64_to_digits(value, precision);
    if let Some(symbol) = non_finite(&buf, profile) {
        return Ok(symbol);
    }
    match spec_kind {
        FormatSpecifier::Standard { letter, precision: digits } => {
            standard::render_standard(&mut buf, letter, digits, profile, false)
        }
        FormatSpecifier::Custom => Ok(custom::render_pattern(&mut buf, spec, profile)),
    }
}

/// Format a single-precision float. Semantics follow [`format_f64`] with
/// the 7/9-digit precision ladder.
pub fn format_f32(
    value: f32,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    let wide = value as f64;
    let spec_kind = classify(spec);
    let mut precision = F32_PRECISION;

    if let FormatSpecifier::Standard { letter, precision: digits } = spec_kind {
        match letter.to_ascii_uppercase() {
            'R' => return round_trip_f32(value, profile),
            'E' if digits > 6 => precision = 9,
            'G' if digits > 7 => precision = 9,
            'D' | 'X' => {
                return Err(FormatError::UnsupportedForType {
                    specifier: letter,
                    type_name: "f32",
                });
            }
            _ => {}
        }
    }

    let mut buf = convert::f64_to_digits(wide, precision);
    if let Some(symbol) = non_finite(&buf, profile) {
        return Ok(symbol);
    }
    match spec_kind {
        FormatSpecifier::Standard { letter, precision: digits } => {
            standard::render_standard(&mut buf, letter, digits, profile, false)
        }
        FormatSpecifier::Custom => Ok(custom::render_pattern(&mut buf, spec, profile)),
    }
}

/// Format a 96-bit fixed-point decimal. An empty `spec` is equivalent to
/// `"G"`, which for decimals preserves trailing fraction zeros.
pub fn format_fixed_decimal(
    value: &FixedDecimal,
    spec: &str,
    profile: &FormattingProfile,
) -> Result<String, FormatError> {
    match classify(spec) {
        FormatSpecifier::Standard { letter, precision } => match letter.to_ascii_uppercase() {
            'D' | 'X' | 'R' => Err(FormatError::UnsupportedForType {
                specifier: letter,
                type_name: "decimal",
            }),
            _ => {
                let mut buf = convert::decimal_to_digits(value);
                standard::render_standard(&mut buf, letter, precision, profile, true)
            }
        },
        FormatSpecifier::Custom => {
            let mut buf = convert::decimal_to_digits(value);
            Ok(custom::render_pattern(&mut buf, spec, profile))
        }
    }
}

/// Friendly-but-exact rendering: convert at the default precision, decode
/// the digits back and compare; only when the short form fails to round
/// trip is the full 17-digit expansion used.
fn round_trip_f64(value: f64, profile: &FormattingProfile) -> Result<String, FormatError> {
    let mut buf = convert::f64_to_digits(value, F64_PRECISION);
    if let Some(symbol) = non_finite(&buf, profile) {
        return Ok(symbol);
    }
    let decoded = convert::decode::digits_to_f64(&buf);
    if decoded == value {
        return standard::render_standard(&mut buf, 'G', F64_PRECISION, profile, false);
    }

    let mut buf = convert::f64_to_digits(value, 17);
    standard::render_standard(&mut buf, 'G', 17, profile, false)
}

fn round_trip_f32(value: f32, profile: &FormattingProfile) -> Result<String, FormatError> {
    let wide = value as f64;
    let mut buf = convert::f64_to_digits(wide, F32_PRECISION);
    if let Some(symbol) = non_finite(&buf, profile) {
        return Ok(symbol);
    }
    let decoded = convert::decode::digits_to_f64(&buf) as f32;
    if decoded == value {
        return standard::render_standard(&mut buf, 'G', F32_PRECISION, profile, false);
    }

    let mut buf = convert::f64_to_digits(wide, 9);
    standard::render_standard(&mut buf, 'G', 9, profile, false)
}

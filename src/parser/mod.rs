//! Parsing: numeric text to binary values, plus the two small grammars the
//! formatter needs (format specifier classification and picture-pattern
//! tokenizing).

pub mod pattern;
pub(crate) mod scan;
pub mod spec;

use std::fmt;

use crate::convert::decode;
use crate::profile::FormattingProfile;

/// Error type for numeric text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not scan as a number under the given profile.
    NotNumeric,
    /// The scanned digits decode outside the finite double range.
    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotNumeric => write!(f, "input is not a number"),
            ParseError::Overflow => write!(f, "number is outside the range of a double"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse numeric text into the nearest representable double.
///
/// The accepted shape is the one the standard formats emit: optional
/// whitespace and sign, digits with optional group separators, a decimal
/// separator with fraction digits, and an optional `e`/`E` exponent, all
/// punctuated per `profile`. NaN and infinity symbols are not accepted.
///
/// # Examples
/// ```
/// use numstr::parse_f64;
/// use numstr::profile::FormattingProfile;
///
/// let profile = FormattingProfile::default();
/// assert_eq!(parse_f64("12,345.6789", &profile).unwrap(), 12345.6789);
/// assert_eq!(parse_f64("-1.5e3", &profile).unwrap(), -1500.0);
/// ```
pub fn parse_f64(text: &str, profile: &FormattingProfile) -> Result<f64, ParseError> {
    let buf = scan::scan_number(text, profile).ok_or(ParseError::NotNumeric)?;
    let value = decode::digits_to_f64(&buf);
    if value.to_bits() & !(1u64 << 63) >= 0x7FF0_0000_0000_0000 {
        return Err(ParseError::Overflow);
    }
    Ok(value)
}

//! numstr: a numeric string codec.
//!
//! Converts integers, floats and 96-bit fixed-point decimals to text under
//! the standard single-letter formats (`C`, `D`, `E`, `F`, `G`, `N`, `P`,
//! `R`, `X`) and under custom picture patterns (`#,##0.00`-style), and
//! parses numeric text back into doubles. All punctuation, symbols,
//! grouping and layout pattern choices come from a caller-supplied
//! [`FormattingProfile`]; the codec itself is stateless and free of locale
//! logic.

mod convert;
pub mod formatter;
pub mod parser;
pub mod profile;
pub mod types;

pub use formatter::{
    FormatError, format_f32, format_f64, format_fixed_decimal, format_i32, format_i64, format_u32,
    format_u64,
};
pub use parser::{ParseError, parse_f64};
pub use profile::FormattingProfile;
pub use types::{DigitBuffer, FixedDecimal, FormatSpecifier};

#[cfg(test)]
mod tests;

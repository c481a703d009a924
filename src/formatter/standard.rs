//! Rendering of the standard single-letter formats.
//!
//! Each letter resolves its precision default, invokes the rounding engine,
//! and walks a small layout: fixed digits with optional grouping, scientific
//! notation, or a sign-selected pattern template in which `#` stands for the
//! whole grouped number and `-`/`$`/`%` stand for profile symbols.

use crate::profile::FormattingProfile;
use crate::types::{DECIMAL_PRECISION, DigitBuffer};

use super::FormatError;

/// Positive/negative layout templates, selected by the profile's pattern
/// indices. `#` is the number itself; every other character is either a
/// profile symbol placeholder or a literal.
const POS_CURRENCY_FORMATS: [&str; 4] = ["$#", "#$", "$ #", "# $"];

const NEG_CURRENCY_FORMATS: [&str; 16] = [
    "($#)", "-$#", "$-#", "$#-", "(#$)", "-#$", "#-$", "#$-", "-# $", "-$ #", "# $-", "$ #-",
    "$ -#", "#- $", "($ #)", "(# $)",
];

const POS_PERCENT_FORMATS: [&str; 4] = ["# %", "#%", "%#", "% #"];

const NEG_PERCENT_FORMATS: [&str; 12] = [
    "-# %", "-#%", "-%#", "%-#", "%#-", "#-%", "#%-", "-% #", "# %-", "% #-", "% -#", "#- %",
];

const NEG_NUMBER_FORMATS: [&str; 5] = ["(#)", "-#", "- #", "#-", "# -"];

const POS_NUMBER_FORMAT: &str = "#";

/// Base slack for the worst-case output estimates; rounding can grow the
/// scale by one after the estimate is taken, so the slack absorbs it.
const ESTIMATE_SLACK: usize = 105;

/// Grouping separators for one run of integer digits.
struct NumberSeparators<'a> {
    sizes: &'a [u32],
    group: &'a str,
    decimal: &'a str,
}

fn estimate_digit_count(scale: i32, digits: i32) -> usize {
    if scale < 0 {
        0
    } else {
        (scale + digits).max(0) as usize
    }
}

/// Render `buf` under standard format `letter` with the requested precision
/// (-1 means the per-letter or per-type default). `is_decimal` enables the
/// fixed-decimal general-format behavior that preserves trailing zeros.
pub(super) fn render_standard(
    buf: &mut DigitBuffer,
    letter: char,
    precision: i32,
    profile: &FormattingProfile,
    is_decimal: bool,
) -> Result<String, FormatError> {
    let mut out = String::new();
    let estimate;

    match letter.to_ascii_uppercase() {
        'C' => {
            let digits = if precision < 0 {
                profile.currency_decimal_digits
            } else {
                precision
            };
            let dig_count = estimate_digit_count(buf.scale, digits);
            estimate = ESTIMATE_SLACK
                + dig_count
                + profile.negative_sign.len()
                + profile.currency_group_sizes.len() * dig_count
                + profile.currency_decimal_separator.len()
                + profile.currency_symbol.len();

            buf.round(buf.scale + digits);
            let template = if buf.sign {
                pattern(&NEG_CURRENCY_FORMATS, profile.currency_negative_pattern)
            } else {
                pattern(&POS_CURRENCY_FORMATS, profile.currency_positive_pattern)
            };
            render_template(
                &mut out,
                template,
                buf,
                digits,
                profile,
                &NumberSeparators {
                    sizes: &profile.currency_group_sizes,
                    group: &profile.currency_group_separator,
                    decimal: &profile.currency_decimal_separator,
                },
            );
        }
        'F' => {
            let digits = if precision < 0 {
                profile.number_decimal_digits
            } else {
                precision
            };
            let dig_count = estimate_digit_count(buf.scale, digits);
            estimate = ESTIMATE_SLACK
                + dig_count
                + profile.negative_sign.len()
                + profile.decimal_separator.len();

            buf.round(buf.scale + digits);
            if buf.sign {
                out.push_str(&profile.negative_sign);
            }
            format_fixed(&mut out, buf, digits, None, &profile.decimal_separator);
        }
        'N' => {
            let digits = if precision < 0 {
                profile.number_decimal_digits
            } else {
                precision
            };
            let dig_count = estimate_digit_count(buf.scale, digits);
            estimate = ESTIMATE_SLACK
                + dig_count
                + profile.negative_sign.len()
                + profile.group_sizes.len() * dig_count
                + profile.decimal_separator.len();

            buf.round(buf.scale + digits);
            let template = if buf.sign {
                pattern(&NEG_NUMBER_FORMATS, profile.number_negative_pattern)
            } else {
                POS_NUMBER_FORMAT
            };
            render_template(
                &mut out,
                template,
                buf,
                digits,
                profile,
                &NumberSeparators {
                    sizes: &profile.group_sizes,
                    group: &profile.group_separator,
                    decimal: &profile.decimal_separator,
                },
            );
        }
        'E' => {
            let mut digits = if precision < 0 { 6 } else { precision };
            digits += 1;
            estimate = ESTIMATE_SLACK
                + digits.max(0) as usize
                + (profile.negative_sign.len() + profile.positive_sign.len()) * 2
                + profile.decimal_separator.len();

            buf.round(digits);
            if buf.sign {
                out.push_str(&profile.negative_sign);
            }
            format_scientific(&mut out, buf, digits, letter, profile);
        }
        'G' => {
            let mut digits = precision;
            let mut rounding = true;
            if digits < 1 {
                if is_decimal && digits == -1 {
                    // General format on a fixed decimal with no precision
                    // keeps trailing fraction zeros as significant.
                    digits = DECIMAL_PRECISION;
                    rounding = false;
                } else {
                    digits = buf.precision;
                }
            }
            estimate = ESTIMATE_SLACK
                + digits.max(0) as usize
                + (profile.negative_sign.len() + profile.positive_sign.len()) * 2
                + profile.decimal_separator.len();

            if rounding {
                buf.round(digits);
            } else if buf.digits().is_empty() {
                // Negative zero still formats as plain zero.
                buf.sign = false;
            }
            if buf.sign {
                out.push_str(&profile.negative_sign);
            }
            let exp_char = if letter == 'G' { 'E' } else { 'e' };
            format_general(&mut out, buf, digits, exp_char, profile, !rounding);
        }
        'P' => {
            let digits = if precision < 0 {
                profile.percent_decimal_digits
            } else {
                precision
            };
            buf.scale += 2;
            let dig_count = estimate_digit_count(buf.scale, digits);
            estimate = ESTIMATE_SLACK
                + dig_count
                + profile.negative_sign.len()
                + profile.percent_group_sizes.len() * dig_count
                + profile.percent_decimal_separator.len()
                + profile.percent_symbol.len();

            buf.round(buf.scale + digits);
            let template = if buf.sign {
                pattern(&NEG_PERCENT_FORMATS, profile.percent_negative_pattern)
            } else {
                pattern(&POS_PERCENT_FORMATS, profile.percent_positive_pattern)
            };
            render_template(
                &mut out,
                template,
                buf,
                digits,
                profile,
                &NumberSeparators {
                    sizes: &profile.percent_group_sizes,
                    group: &profile.percent_group_separator,
                    decimal: &profile.percent_decimal_separator,
                },
            );
        }
        _ => return Err(FormatError::InvalidSpecifier(letter)),
    }

    debug_assert!(out.len() <= estimate);
    Ok(out)
}

/// Out-of-range pattern indices fall back to the first layout rather than
/// failing a render that is otherwise fully specified.
fn pattern<'a>(table: &'a [&'a str], index: usize) -> &'a str {
    table.get(index).copied().unwrap_or(table[0])
}

fn render_template(
    out: &mut String,
    template: &str,
    buf: &DigitBuffer,
    digits: i32,
    profile: &FormattingProfile,
    seps: &NumberSeparators<'_>,
) {
    for ch in template.chars() {
        match ch {
            '#' => format_fixed(out, buf, digits, Some((seps.sizes, seps.group)), seps.decimal),
            '-' => out.push_str(&profile.negative_sign),
            '$' => out.push_str(&profile.currency_symbol),
            '%' => out.push_str(&profile.percent_symbol),
            _ => out.push(ch),
        }
    }
}

/// Cumulative digit counts (from the decimal point leftward) at which a
/// group separator belongs, for `num_digits` integer digits. The last size
/// repeats; a zero size stops grouping.
pub(super) fn group_boundaries(num_digits: i32, sizes: &[u32]) -> Vec<i32> {
    let mut boundaries = Vec::new();
    if sizes.is_empty() {
        return boundaries;
    }
    let mut index = 0usize;
    let mut size = sizes[0] as i32;
    let mut total = size;
    while num_digits > total {
        if size == 0 {
            break;
        }
        boundaries.push(total);
        if index < sizes.len() - 1 {
            index += 1;
            size = sizes[index] as i32;
        }
        total += size;
    }
    boundaries
}

/// Emit the digit stream as a fixed-point number: `scale` integer digits
/// (zero-padded past the significant run), then `digits` fraction digits.
fn format_fixed(
    out: &mut String,
    buf: &DigitBuffer,
    digits: i32,
    group: Option<(&[u32], &str)>,
    decimal_sep: &str,
) {
    let ds = buf.digits();
    let mut dig = 0usize;
    let mut dig_pos = buf.scale;

    if dig_pos > 0 {
        match group {
            Some((sizes, sep)) if !sizes.is_empty() => {
                let boundaries = group_boundaries(dig_pos, sizes);
                let dig_start = (dig_pos as usize).min(ds.len());
                for j in 0..dig_pos {
                    if (j as usize) < dig_start {
                        out.push(ds[j as usize] as char);
                    } else {
                        out.push('0');
                    }
                    let remaining = dig_pos - 1 - j;
                    if remaining > 0 && boundaries.contains(&remaining) {
                        out.push_str(sep);
                    }
                }
                dig = dig_start;
            }
            _ => loop {
                if dig < ds.len() {
                    out.push(ds[dig] as char);
                    dig += 1;
                } else {
                    out.push('0');
                }
                dig_pos -= 1;
                if dig_pos == 0 {
                    break;
                }
            },
        }
    } else {
        out.push('0');
    }

    if digits > 0 {
        out.push_str(decimal_sep);
        let mut digits = digits;
        while dig_pos < 0 && digits > 0 {
            out.push('0');
            dig_pos += 1;
            digits -= 1;
        }
        while digits > 0 {
            if dig < ds.len() {
                out.push(ds[dig] as char);
                dig += 1;
            } else {
                out.push('0');
            }
            digits -= 1;
        }
    }
}

fn format_scientific(
    out: &mut String,
    buf: &DigitBuffer,
    digits: i32,
    exp_char: char,
    profile: &FormattingProfile,
) {
    let ds = buf.digits();
    let mut dig = 0usize;

    if dig < ds.len() {
        out.push(ds[dig] as char);
        dig += 1;
    } else {
        out.push('0');
    }
    // E0 suppresses the decimal point.
    if digits != 1 {
        out.push_str(&profile.decimal_separator);
    }
    let mut remaining = digits - 1;
    while remaining > 0 {
        if dig < ds.len() {
            out.push(ds[dig] as char);
            dig += 1;
        } else {
            out.push('0');
        }
        remaining -= 1;
    }

    let exponent = if ds.is_empty() { 0 } else { buf.scale - 1 };
    write_exponent(
        out,
        exponent,
        exp_char,
        Some(&profile.positive_sign),
        &profile.negative_sign,
        3,
    );
}

fn format_general(
    out: &mut String,
    buf: &DigitBuffer,
    digits: i32,
    exp_char: char,
    profile: &FormattingProfile,
    suppress_scientific: bool,
) {
    let ds = buf.digits();
    let mut dig = 0usize;
    let mut dig_pos = buf.scale;
    let mut scientific = false;

    if !suppress_scientific && (dig_pos > digits || dig_pos < -3) {
        dig_pos = 1;
        scientific = true;
    }

    if dig_pos > 0 {
        loop {
            if dig < ds.len() {
                out.push(ds[dig] as char);
                dig += 1;
            } else {
                out.push('0');
            }
            dig_pos -= 1;
            if dig_pos == 0 {
                break;
            }
        }
    } else {
        out.push('0');
    }

    if dig < ds.len() || dig_pos < 0 {
        out.push_str(&profile.decimal_separator);
        while dig_pos < 0 {
            out.push('0');
            dig_pos += 1;
        }
        while dig < ds.len() {
            out.push(ds[dig] as char);
            dig += 1;
        }
    }

    if scientific {
        write_exponent(
            out,
            buf.scale - 1,
            exp_char,
            None,
            &profile.negative_sign,
            1,
        );
    }
}

/// Append an exponent marker, sign and zero-padded magnitude. A `None`
/// positive sign means positive exponents carry no sign at all.
pub(super) fn write_exponent(
    out: &mut String,
    value: i32,
    exp_char: char,
    positive_sign: Option<&str>,
    negative_sign: &str,
    min_digits: i32,
) {
    out.push(exp_char);
    if value < 0 {
        out.push_str(negative_sign);
    } else if let Some(sign) = positive_sign {
        out.push_str(sign);
    }
    let width = min_digits.max(1) as usize;
    out.push_str(&format!("{:0w$}", value.unsigned_abs(), w = width));
}

/// Plain decimal rendering for the integer fast path (`D` and default `G`),
/// zero-padded to the requested width.
pub(super) fn int_dec_str(magnitude: u64, negative: bool, digits: i32, negative_sign: &str) -> String {
    let width = digits.max(1) as usize;
    let mut out = String::with_capacity(width + negative_sign.len() + 20);
    if negative {
        out.push_str(negative_sign);
    }
    out.push_str(&format!("{:0w$}", magnitude, w = width));
    out
}

/// Hexadecimal rendering over the raw two's-complement bits, zero-padded
/// to the requested width; case follows the format letter.
pub(super) fn int_hex_str(value: u64, lowercase: bool, digits: i32) -> String {
    let width = digits.max(1) as usize;
    if lowercase {
        format!("{:0w$x}", value, w = width)
    } else {
        format!("{:0w$X}", value, w = width)
    }
}
